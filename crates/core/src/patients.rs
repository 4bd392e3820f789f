//! Patient registration and lookup.
//!
//! Pure data operations over the `pacientes.json` table. Every call loads the
//! table, operates on the in-memory array, and rewrites the file; nothing is
//! cached between requests.

use crate::config::CoreConfig;
use crate::error::{ClinicError, ClinicResult};
use crate::ident::{normalise, EntityKind};
use crate::models::{Appointment, Patient};
use chrono::Utc;
use clinica_types::NonEmptyText;
use std::sync::Arc;

/// Validated input for creating or replacing a patient.
///
/// Field presence has already been checked at the API boundary; the types
/// guarantee the texts are non-empty.
#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub name: NonEmptyText,
    pub age: u32,
    pub phone: NonEmptyText,
    pub email: NonEmptyText,
}

/// Service for patient operations.
#[derive(Clone)]
pub struct PatientService {
    cfg: Arc<CoreConfig>,
}

impl PatientService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    pub fn list(&self) -> ClinicResult<Vec<Patient>> {
        Ok(self.cfg.patients_table().load()?)
    }

    pub fn get(&self, id: &str) -> ClinicResult<Patient> {
        let id = normalise(EntityKind::Patient, id);
        let patients: Vec<Patient> = self.cfg.patients_table().load()?;
        patients
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(ClinicError::PatientNotFound)
    }

    /// Registers a new patient.
    ///
    /// Rejects an email already registered to any patient (case-insensitive).
    /// The identifier is `P` + zero-padded(count + 1) and the registration
    /// date is today's UTC calendar day.
    pub fn create(&self, draft: PatientDraft) -> ClinicResult<Patient> {
        let table = self.cfg.patients_table();
        let mut patients: Vec<Patient> = table.load()?;

        let email = draft.email.as_str().to_lowercase();
        if patients.iter().any(|p| p.email.to_lowercase() == email) {
            return Err(ClinicError::EmailTaken);
        }

        let patient = Patient {
            id: format!("P{:03}", patients.len() + 1),
            name: draft.name.into_inner(),
            age: draft.age,
            phone: draft.phone.into_inner(),
            email: draft.email.into_inner(),
            registered_on: Utc::now().date_naive(),
        };

        patients.push(patient.clone());
        table.save(&patients)?;
        tracing::info!("patient {} registered", patient.id);

        Ok(patient)
    }

    /// Replaces the mutable fields of an existing patient.
    ///
    /// The identifier and registration date are preserved. Rejects an email
    /// already registered to a different patient.
    pub fn update(&self, id: &str, draft: PatientDraft) -> ClinicResult<Patient> {
        let id = normalise(EntityKind::Patient, id);
        let table = self.cfg.patients_table();
        let mut patients: Vec<Patient> = table.load()?;

        let index = patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(ClinicError::PatientNotFound)?;

        let email = draft.email.as_str().to_lowercase();
        if patients
            .iter()
            .any(|p| p.email.to_lowercase() == email && p.id != id)
        {
            return Err(ClinicError::EmailTakenByOther);
        }

        let patient = &mut patients[index];
        patient.name = draft.name.into_inner();
        patient.age = draft.age;
        patient.phone = draft.phone.into_inner();
        patient.email = draft.email.into_inner();
        let updated = patient.clone();

        table.save(&patients)?;
        Ok(updated)
    }

    /// Removes a patient and returns the removed record.
    pub fn delete(&self, id: &str) -> ClinicResult<Patient> {
        let id = normalise(EntityKind::Patient, id);
        let table = self.cfg.patients_table();
        let mut patients: Vec<Patient> = table.load()?;

        let index = patients
            .iter()
            .position(|p| p.id == id)
            .ok_or(ClinicError::PatientNotFound)?;

        let removed = patients.remove(index);
        table.save(&patients)?;
        tracing::info!("patient {} removed", removed.id);

        Ok(removed)
    }

    /// All appointments referencing the patient, oldest first as stored.
    ///
    /// An empty history is reported as an error so the API can answer 404,
    /// matching what the dashboard expects. The patient itself is not checked
    /// for existence.
    pub fn history(&self, id: &str) -> ClinicResult<Vec<Appointment>> {
        let id = normalise(EntityKind::Patient, id);
        let appointments: Vec<Appointment> = self.cfg.appointments_table().load()?;

        let history: Vec<Appointment> = appointments
            .into_iter()
            .filter(|c| c.patient_id == id)
            .collect();

        if history.is_empty() {
            return Err(ClinicError::EmptyHistory);
        }
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_cfg(dir: &TempDir) -> Arc<CoreConfig> {
        Arc::new(CoreConfig::new(dir.path().to_path_buf()))
    }

    fn draft(name: &str, email: &str) -> PatientDraft {
        PatientDraft {
            name: NonEmptyText::new(name).unwrap(),
            age: 30,
            phone: NonEmptyText::new("5512345678").unwrap(),
            email: NonEmptyText::new(email).unwrap(),
        }
    }

    #[test]
    fn test_create_on_empty_store_assigns_p001_and_today() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));

        let patient = service.create(draft("Ana", "a@x.com")).unwrap();
        assert_eq!(patient.id, "P001");
        assert_eq!(patient.registered_on, Utc::now().date_naive());

        let second = service.create(draft("Luis", "l@x.com")).unwrap();
        assert_eq!(second.id, "P002");
    }

    #[test]
    fn test_create_rejects_duplicate_email_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));
        service.create(draft("Ana", "a@x.com")).unwrap();

        let result = service.create(draft("Otra", "A@X.COM"));
        assert!(matches!(result, Err(ClinicError::EmailTaken)));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_normalises_bare_numbers() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));
        service.create(draft("Ana", "a@x.com")).unwrap();

        assert_eq!(service.get("1").unwrap().id, "P001");
        assert_eq!(service.get("p001").unwrap().id, "P001");
        assert!(matches!(
            service.get("2"),
            Err(ClinicError::PatientNotFound)
        ));
    }

    #[test]
    fn test_update_preserves_id_and_registration_date() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));
        let created = service.create(draft("Ana", "a@x.com")).unwrap();

        let updated = service.update("P001", draft("Ana María", "am@x.com")).unwrap();
        assert_eq!(updated.id, "P001");
        assert_eq!(updated.registered_on, created.registered_on);
        assert_eq!(updated.name, "Ana María");
    }

    #[test]
    fn test_update_rejects_email_held_by_another_patient() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));
        service.create(draft("Ana", "a@x.com")).unwrap();
        service.create(draft("Luis", "l@x.com")).unwrap();

        let result = service.update("P002", draft("Luis", "a@x.com"));
        assert!(matches!(result, Err(ClinicError::EmailTakenByOther)));
        // Keeping your own email is fine.
        assert!(service.update("P002", draft("Luis", "L@x.com")).is_ok());
    }

    #[test]
    fn test_delete_removes_and_returns_the_record() {
        let dir = TempDir::new().unwrap();
        let service = PatientService::new(test_cfg(&dir));
        service.create(draft("Ana", "a@x.com")).unwrap();

        let removed = service.delete("1").unwrap();
        assert_eq!(removed.id, "P001");
        assert!(service.list().unwrap().is_empty());
        assert!(matches!(
            service.delete("1"),
            Err(ClinicError::PatientNotFound)
        ));
    }

    #[test]
    fn test_history_answers_not_found_when_empty() {
        let dir = TempDir::new().unwrap();
        let cfg = test_cfg(&dir);
        let service = PatientService::new(cfg.clone());
        service.create(draft("Ana", "a@x.com")).unwrap();

        assert!(matches!(
            service.history("P001"),
            Err(ClinicError::EmptyHistory)
        ));

        let cita = Appointment {
            id: "C001".into(),
            patient_id: "P001".into(),
            doctor_id: "D001".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            time: "09:00".parse().unwrap(),
            reason: "Consulta".into(),
            status: AppointmentStatus::Programada,
        };
        cfg.appointments_table().save(&[cita]).unwrap();

        let history = service.history("1").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].patient_id, "P001");
    }
}

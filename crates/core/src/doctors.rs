//! Doctor registration, lookup, and statistics.

use crate::config::CoreConfig;
use crate::error::{ClinicError, ClinicResult};
use crate::ident::{normalise, EntityKind};
use crate::models::Doctor;
use clinica_types::{ClockTime, NonEmptyText};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

/// Validated input for creating or replacing a doctor.
#[derive(Debug, Clone)]
pub struct DoctorDraft {
    pub name: NonEmptyText,
    pub specialty: NonEmptyText,
    pub opens: ClockTime,
    pub closes: ClockTime,
    pub available_days: Vec<String>,
}

/// Doctor head-count, total and by specialty.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoctorStats {
    pub total: usize,
    #[serde(rename = "porEspecialidad")]
    pub by_specialty: BTreeMap<String, usize>,
}

/// Service for doctor operations.
#[derive(Clone)]
pub struct DoctorService {
    cfg: Arc<CoreConfig>,
}

impl DoctorService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    pub fn list(&self) -> ClinicResult<Vec<Doctor>> {
        Ok(self.cfg.doctors_table().load()?)
    }

    pub fn get(&self, id: &str) -> ClinicResult<Doctor> {
        let id = normalise(EntityKind::Doctor, id);
        let doctors: Vec<Doctor> = self.cfg.doctors_table().load()?;
        doctors
            .into_iter()
            .find(|d| d.id == id)
            .ok_or(ClinicError::DoctorNotFound)
    }

    /// Registers a new doctor.
    ///
    /// The (nombre, especialidad) pair must be unique and the closing time
    /// must be strictly later than the opening time.
    pub fn create(&self, draft: DoctorDraft) -> ClinicResult<Doctor> {
        if draft.closes <= draft.opens {
            return Err(ClinicError::InvalidHours);
        }

        let table = self.cfg.doctors_table();
        let mut doctors: Vec<Doctor> = table.load()?;

        if doctors
            .iter()
            .any(|d| d.name == draft.name.as_str() && d.specialty == draft.specialty.as_str())
        {
            return Err(ClinicError::DuplicateDoctor);
        }

        let doctor = Doctor {
            id: format!("D{:03}", doctors.len() + 1),
            name: draft.name.into_inner(),
            specialty: draft.specialty.into_inner(),
            opens: draft.opens,
            closes: draft.closes,
            available_days: draft.available_days,
        };

        doctors.push(doctor.clone());
        table.save(&doctors)?;
        tracing::info!("doctor {} registered", doctor.id);

        Ok(doctor)
    }

    /// Replaces the mutable fields of an existing doctor.
    pub fn update(&self, id: &str, draft: DoctorDraft) -> ClinicResult<Doctor> {
        if draft.closes <= draft.opens {
            return Err(ClinicError::InvalidHours);
        }

        let id = normalise(EntityKind::Doctor, id);
        let table = self.cfg.doctors_table();
        let mut doctors: Vec<Doctor> = table.load()?;

        let index = doctors
            .iter()
            .position(|d| d.id == id)
            .ok_or(ClinicError::DoctorNotFound)?;

        if doctors.iter().any(|d| {
            d.name == draft.name.as_str() && d.specialty == draft.specialty.as_str() && d.id != id
        }) {
            return Err(ClinicError::DuplicateDoctorOther);
        }

        let doctor = &mut doctors[index];
        doctor.name = draft.name.into_inner();
        doctor.specialty = draft.specialty.into_inner();
        doctor.opens = draft.opens;
        doctor.closes = draft.closes;
        doctor.available_days = draft.available_days;
        let updated = doctor.clone();

        table.save(&doctors)?;
        Ok(updated)
    }

    /// Removes a doctor and returns the removed record.
    pub fn delete(&self, id: &str) -> ClinicResult<Doctor> {
        let id = normalise(EntityKind::Doctor, id);
        let table = self.cfg.doctors_table();
        let mut doctors: Vec<Doctor> = table.load()?;

        let index = doctors
            .iter()
            .position(|d| d.id == id)
            .ok_or(ClinicError::DoctorNotFound)?;

        let removed = doctors.remove(index);
        table.save(&doctors)?;
        tracing::info!("doctor {} removed", removed.id);

        Ok(removed)
    }

    /// Doctors matching the specialty, compared case-insensitively.
    ///
    /// No match is an empty list, not an error.
    pub fn by_specialty(&self, specialty: &str) -> ClinicResult<Vec<Doctor>> {
        let specialty = specialty.to_lowercase();
        let doctors: Vec<Doctor> = self.cfg.doctors_table().load()?;
        Ok(doctors
            .into_iter()
            .filter(|d| d.specialty.to_lowercase() == specialty)
            .collect())
    }

    pub fn stats(&self) -> ClinicResult<DoctorStats> {
        let doctors: Vec<Doctor> = self.cfg.doctors_table().load()?;

        let mut by_specialty: BTreeMap<String, usize> = BTreeMap::new();
        for doctor in &doctors {
            *by_specialty.entry(doctor.specialty.clone()).or_default() += 1;
        }

        Ok(DoctorStats {
            total: doctors.len(),
            by_specialty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cfg(dir: &TempDir) -> Arc<CoreConfig> {
        Arc::new(CoreConfig::new(dir.path().to_path_buf()))
    }

    fn draft(name: &str, specialty: &str) -> DoctorDraft {
        DoctorDraft {
            name: NonEmptyText::new(name).unwrap(),
            specialty: NonEmptyText::new(specialty).unwrap(),
            opens: "08:00".parse().unwrap(),
            closes: "17:00".parse().unwrap(),
            available_days: vec!["Lunes".into(), "Miércoles".into()],
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));

        assert_eq!(service.create(draft("García", "Cardiología")).unwrap().id, "D001");
        assert_eq!(service.create(draft("Luna", "Pediatría")).unwrap().id, "D002");
    }

    #[test]
    fn test_create_rejects_duplicate_name_and_specialty() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));
        service.create(draft("García", "Cardiología")).unwrap();

        let result = service.create(draft("García", "Cardiología"));
        assert!(matches!(result, Err(ClinicError::DuplicateDoctor)));
        // Same name under another specialty is a different doctor.
        assert!(service.create(draft("García", "Pediatría")).is_ok());
    }

    #[test]
    fn test_create_rejects_inverted_hours() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));

        let mut bad = draft("García", "Cardiología");
        bad.opens = "17:00".parse().unwrap();
        bad.closes = "08:00".parse().unwrap();
        assert!(matches!(
            service.create(bad.clone()),
            Err(ClinicError::InvalidHours)
        ));

        bad.closes = bad.opens;
        assert!(matches!(service.create(bad), Err(ClinicError::InvalidHours)));
    }

    #[test]
    fn test_update_rejects_pair_held_by_another_doctor() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));
        service.create(draft("García", "Cardiología")).unwrap();
        service.create(draft("Luna", "Pediatría")).unwrap();

        let result = service.update("D002", draft("García", "Cardiología"));
        assert!(matches!(result, Err(ClinicError::DuplicateDoctorOther)));
        // Re-saving your own pair is fine.
        assert!(service.update("D002", draft("Luna", "Pediatría")).is_ok());
    }

    #[test]
    fn test_by_specialty_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));
        service.create(draft("García", "Cardiología")).unwrap();
        service.create(draft("Luna", "Pediatría")).unwrap();

        let matches = service.by_specialty("cardiología").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "García");
        assert!(service.by_specialty("Dermatología").unwrap().is_empty());
    }

    #[test]
    fn test_stats_counts_by_specialty() {
        let dir = TempDir::new().unwrap();
        let service = DoctorService::new(test_cfg(&dir));
        service.create(draft("García", "Cardiología")).unwrap();
        service.create(draft("Luna", "Cardiología")).unwrap();
        service.create(draft("Sosa", "Pediatría")).unwrap();

        let stats = service.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_specialty["Cardiología"], 2);
        assert_eq!(stats.by_specialty["Pediatría"], 1);
    }
}

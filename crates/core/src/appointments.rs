//! Appointment scheduling, the one piece of real decision logic.
//!
//! [`AppointmentService::schedule`] enforces the business rules for a
//! requested (doctor, date, time) triple in a fixed order, short-circuiting on
//! the first failure. Steps before the final append perform no mutation, so a
//! rejected request leaves every table untouched.

use crate::config::CoreConfig;
use crate::error::{ClinicError, ClinicResult};
use crate::ident::{normalise, EntityKind};
use crate::models::{Appointment, AppointmentStatus, Doctor, Patient};
use chrono::{Datelike, NaiveDate, Weekday};
use clinica_types::{ClockTime, NonEmptyText};
use std::sync::Arc;

/// Capitalised Spanish weekday name, as stored in a doctor's
/// `diasDisponibles`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Raw input for scheduling an appointment.
///
/// Identifiers, date, and time arrive as client-supplied text; the validator
/// normalises and parses them at the step where each is first needed, so the
/// failure order matches the rule order.
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NonEmptyText,
    pub time: NonEmptyText,
    pub reason: NonEmptyText,
}

/// Service for appointment operations.
#[derive(Clone)]
pub struct AppointmentService {
    cfg: Arc<CoreConfig>,
}

impl AppointmentService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Lists appointments, optionally filtered by exact date and/or estado.
    ///
    /// An unknown `estado` value simply matches nothing.
    pub fn list(
        &self,
        date: Option<NaiveDate>,
        status: Option<&str>,
    ) -> ClinicResult<Vec<Appointment>> {
        let appointments: Vec<Appointment> = self.cfg.appointments_table().load()?;
        Ok(appointments
            .into_iter()
            .filter(|c| date.is_none_or(|d| c.date == d))
            .filter(|c| status.is_none_or(|s| c.status.as_str() == s))
            .collect())
    }

    pub fn get(&self, id: &str) -> ClinicResult<Appointment> {
        let id = normalise(EntityKind::Appointment, id);
        let appointments: Vec<Appointment> = self.cfg.appointments_table().load()?;
        appointments
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(ClinicError::AppointmentNotFound)
    }

    /// The doctor's agenda: every appointment referencing the doctor.
    ///
    /// No agenda is an empty list, not an error; the doctor itself is not
    /// checked for existence.
    pub fn for_doctor(&self, doctor_id: &str) -> ClinicResult<Vec<Appointment>> {
        let doctor_id = normalise(EntityKind::Doctor, doctor_id);
        let appointments: Vec<Appointment> = self.cfg.appointments_table().load()?;
        Ok(appointments
            .into_iter()
            .filter(|c| c.doctor_id == doctor_id)
            .collect())
    }

    /// Decides whether the requested appointment may be created and, if so,
    /// persists it.
    ///
    /// Rules, in order, first failure wins:
    /// 1. normalise both identifiers
    /// 2. the patient must exist
    /// 3. the doctor must exist
    /// 4. the doctor must work on the requested weekday
    /// 5. the time must fall within the doctor's office hours (inclusive)
    /// 6. the (doctor, date, time) slot must be free — any existing
    ///    appointment blocks it, whatever its estado
    ///
    /// On success the record is appended with a fresh `C`-prefixed identifier
    /// and estado `programada`.
    pub fn schedule(&self, draft: AppointmentDraft) -> ClinicResult<Appointment> {
        let patient_id = normalise(EntityKind::Patient, &draft.patient_id);
        let doctor_id = normalise(EntityKind::Doctor, &draft.doctor_id);

        let patients: Vec<Patient> = self.cfg.patients_table().load()?;
        if !patients.iter().any(|p| p.id == patient_id) {
            return Err(ClinicError::UnknownPatient);
        }

        let doctors: Vec<Doctor> = self.cfg.doctors_table().load()?;
        let doctor = doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or(ClinicError::UnknownDoctor)?;

        let date = NaiveDate::parse_from_str(draft.date.as_str(), "%Y-%m-%d")
            .map_err(|_| ClinicError::InvalidDate)?;
        let day = weekday_name(date.weekday());
        if !doctor.available_days.iter().any(|d| d == day) {
            tracing::warn!(
                "appointment rejected: doctor {} does not work on {}",
                doctor_id,
                day
            );
            return Err(ClinicError::DayUnavailable);
        }

        let time: ClockTime = draft
            .time
            .as_str()
            .parse()
            .map_err(|_| ClinicError::InvalidTime)?;
        // Compared as 4-digit HHMM integers; both bounds are inclusive.
        if time.ordinal() < doctor.opens.ordinal() || time.ordinal() > doctor.closes.ordinal() {
            return Err(ClinicError::OutsideHours);
        }

        let table = self.cfg.appointments_table();
        let mut appointments: Vec<Appointment> = table.load()?;

        // A cancelled cita still blocks its slot.
        if appointments
            .iter()
            .any(|c| c.doctor_id == doctor_id && c.date == date && c.time == time)
        {
            return Err(ClinicError::SlotTaken);
        }

        let appointment = Appointment {
            id: format!("C{:03}", appointments.len() + 1),
            patient_id,
            doctor_id,
            date,
            time,
            reason: draft.reason.into_inner(),
            status: AppointmentStatus::Programada,
        };

        appointments.push(appointment.clone());
        table.save(&appointments)?;
        tracing::info!(
            "appointment {} scheduled for doctor {} at {} {}",
            appointment.id,
            appointment.doctor_id,
            appointment.date,
            appointment.time
        );

        Ok(appointment)
    }

    /// Transitions a programada cita to cancelada. One-way.
    pub fn cancel(&self, id: &str) -> ClinicResult<Appointment> {
        self.transition(
            id,
            AppointmentStatus::Cancelada,
            ClinicError::NotCancellable,
        )
    }

    /// Transitions a programada cita to completada. One-way.
    pub fn complete(&self, id: &str) -> ClinicResult<Appointment> {
        self.transition(
            id,
            AppointmentStatus::Completada,
            ClinicError::NotCompletable,
        )
    }

    fn transition(
        &self,
        id: &str,
        target: AppointmentStatus,
        illegal: ClinicError,
    ) -> ClinicResult<Appointment> {
        let id = normalise(EntityKind::Appointment, id);
        let table = self.cfg.appointments_table();
        let mut appointments: Vec<Appointment> = table.load()?;

        let appointment = appointments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ClinicError::AppointmentNotFound)?;

        if appointment.status != AppointmentStatus::Programada {
            return Err(illegal);
        }

        appointment.status = target;
        let updated = appointment.clone();
        table.save(&appointments)?;
        tracing::info!("appointment {} is now {}", updated.id, updated.status);

        Ok(updated)
    }
}

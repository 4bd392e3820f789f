//! Error taxonomy for clinic operations.
//!
//! Display strings are the exact Spanish messages the admin dashboard already
//! consumes, so the REST layer can surface `to_string()` directly as the
//! `error` field of a response body.

use clinica_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    /// One or more required fields were absent or empty; `faltantes` lists
    /// their wire names.
    #[error("Faltan campos obligatorios")]
    MissingFields { faltantes: Vec<String> },

    #[error("Fecha inválida")]
    InvalidDate,
    #[error("Hora inválida")]
    InvalidTime,

    #[error("Paciente no encontrado")]
    PatientNotFound,
    #[error("Doctor no encontrado")]
    DoctorNotFound,
    #[error("Cita no encontrada")]
    AppointmentNotFound,
    #[error("Sin historial de citas")]
    EmptyHistory,

    /// Referenced patient is missing when scheduling (a 400, unlike the
    /// not-found lookup above).
    #[error("Paciente no existe")]
    UnknownPatient,
    #[error("Doctor no existe")]
    UnknownDoctor,

    #[error("El email ya está registrado")]
    EmailTaken,
    #[error("El email ya está registrado por otro paciente")]
    EmailTakenByOther,
    #[error("Ya existe un doctor con ese nombre y especialidad")]
    DuplicateDoctor,
    #[error("Ya existe otro doctor con ese nombre y especialidad")]
    DuplicateDoctorOther,
    #[error("El horario de fin debe ser posterior al de inicio")]
    InvalidHours,

    #[error("Doctor no atiende ese día")]
    DayUnavailable,
    #[error("Hora fuera del horario del doctor")]
    OutsideHours,
    #[error("El doctor ya tiene una cita en ese horario")]
    SlotTaken,
    #[error("Solo se pueden cancelar citas programadas")]
    NotCancellable,
    #[error("Solo se pueden completar citas programadas")]
    NotCompletable,

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;

impl ClinicError {
    /// Whether the error means the addressed record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClinicError::PatientNotFound
                | ClinicError::DoctorNotFound
                | ClinicError::AppointmentNotFound
                | ClinicError::EmptyHistory
        )
    }
}

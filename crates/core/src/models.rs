//! Domain records as stored on disk and served on the wire.
//!
//! Rust field names are English; serde renames map them to the Spanish keys
//! the dashboard and the JSON tables use.

use chrono::NaiveDate;
use clinica_types::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    #[schema(example = "P001")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "edad")]
    pub age: u32,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    /// Set server-side at registration (UTC calendar day).
    #[serde(rename = "fechaRegistro")]
    #[schema(value_type = String, example = "2025-01-06")]
    pub registered_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    #[schema(example = "D001")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "horarioInicio")]
    #[schema(value_type = String, example = "08:00")]
    pub opens: ClockTime,
    #[serde(rename = "horarioFin")]
    #[schema(value_type = String, example = "17:00")]
    pub closes: ClockTime,
    /// Capitalised Spanish weekday names, e.g. "Lunes".
    #[serde(rename = "diasDisponibles")]
    pub available_days: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    #[schema(example = "C001")]
    pub id: String,
    #[serde(rename = "pacienteId")]
    pub patient_id: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "fecha")]
    #[schema(value_type = String, example = "2025-01-06")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    #[schema(value_type = String, example = "09:00")]
    pub time: ClockTime,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
}

/// Appointment lifecycle state.
///
/// Created as `Programada`; both transitions out of it are one-way and only
/// legal from `Programada`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Programada,
    Cancelada,
    Completada,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Programada => "programada",
            AppointmentStatus::Cancelada => "cancelada",
            AppointmentStatus::Completada => "completada",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Request bodies and response envelopes of the wire contract.
//!
//! Every required field is optional at the deserialisation boundary so a
//! request with fields missing is answered with the `faltantes` list the
//! dashboard renders, instead of a bare decoding failure. Presence checks
//! treat blank text and empty arrays as missing; a numeric 0 is a value.

use clinica_core::{
    Appointment, AppointmentDraft, ClinicError, Doctor, DoctorDraft, Patient, PatientDraft, RawId,
};
use clinica_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Records `None` or blank text as a missing field under its wire name.
fn text_field(
    value: Option<String>,
    name: &'static str,
    faltantes: &mut Vec<String>,
) -> Option<NonEmptyText> {
    match value.map(NonEmptyText::new) {
        Some(Ok(text)) => Some(text),
        _ => {
            faltantes.push(name.to_owned());
            None
        }
    }
}

fn id_field(
    value: Option<RawId>,
    name: &'static str,
    faltantes: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(id) => {
            let id = id.to_string();
            if id.trim().is_empty() {
                faltantes.push(name.to_owned());
                None
            } else {
                Some(id)
            }
        }
        None => {
            faltantes.push(name.to_owned());
            None
        }
    }
}

/// Body of `POST /pacientes` and `PUT /pacientes/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NuevoPaciente {
    #[schema(example = "Ana López")]
    pub nombre: Option<String>,
    #[schema(example = 30)]
    pub edad: Option<u32>,
    #[schema(example = "5512345678")]
    pub telefono: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
}

impl NuevoPaciente {
    /// Checks field presence in wire order, then hands over a validated draft.
    pub fn draft(self) -> Result<PatientDraft, ClinicError> {
        let mut faltantes = Vec::new();
        let name = text_field(self.nombre, "nombre", &mut faltantes);
        let age = match self.edad {
            Some(age) => Some(age),
            None => {
                faltantes.push("edad".to_owned());
                None
            }
        };
        let phone = text_field(self.telefono, "telefono", &mut faltantes);
        let email = text_field(self.email, "email", &mut faltantes);

        match (name, age, phone, email) {
            (Some(name), Some(age), Some(phone), Some(email)) => Ok(PatientDraft {
                name,
                age,
                phone,
                email,
            }),
            _ => Err(ClinicError::MissingFields { faltantes }),
        }
    }
}

/// Body of `POST /doctores` and `PUT /doctores/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NuevoDoctor {
    #[schema(example = "Dra. García")]
    pub nombre: Option<String>,
    #[schema(example = "Cardiología")]
    pub especialidad: Option<String>,
    #[serde(rename = "horarioInicio")]
    #[schema(example = "08:00")]
    pub horario_inicio: Option<String>,
    #[serde(rename = "horarioFin")]
    #[schema(example = "17:00")]
    pub horario_fin: Option<String>,
    #[serde(rename = "diasDisponibles")]
    #[schema(example = json!(["Lunes", "Miércoles"]))]
    pub dias_disponibles: Option<Vec<String>>,
}

impl NuevoDoctor {
    pub fn draft(self) -> Result<DoctorDraft, ClinicError> {
        let mut faltantes = Vec::new();
        let name = text_field(self.nombre, "nombre", &mut faltantes);
        let specialty = text_field(self.especialidad, "especialidad", &mut faltantes);
        let opens = text_field(self.horario_inicio, "horarioInicio", &mut faltantes);
        let closes = text_field(self.horario_fin, "horarioFin", &mut faltantes);
        // An empty array counts as missing, matching the dashboard's form.
        let available_days = match self.dias_disponibles {
            Some(days) if !days.is_empty() => Some(days),
            _ => {
                faltantes.push("diasDisponibles".to_owned());
                None
            }
        };

        let (name, specialty, opens, closes, available_days) =
            match (name, specialty, opens, closes, available_days) {
                (Some(n), Some(s), Some(o), Some(c), Some(d)) => (n, s, o, c, d),
                _ => return Err(ClinicError::MissingFields { faltantes }),
            };

        let opens = opens
            .as_str()
            .parse()
            .map_err(|_| ClinicError::InvalidTime)?;
        let closes = closes
            .as_str()
            .parse()
            .map_err(|_| ClinicError::InvalidTime)?;

        Ok(DoctorDraft {
            name,
            specialty,
            opens,
            closes,
            available_days,
        })
    }
}

/// Body of `POST /citas`.
///
/// Identifiers may arrive as bare numbers or prefixed codes; both forms are
/// accepted and normalised downstream.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NuevaCita {
    #[serde(rename = "pacienteId")]
    #[schema(value_type = Option<String>, example = "P001")]
    pub paciente_id: Option<RawId>,
    #[serde(rename = "doctorId")]
    #[schema(value_type = Option<String>, example = "D001")]
    pub doctor_id: Option<RawId>,
    #[schema(example = "2025-01-06")]
    pub fecha: Option<String>,
    #[schema(example = "09:00")]
    pub hora: Option<String>,
    #[schema(example = "Consulta general")]
    pub motivo: Option<String>,
}

impl NuevaCita {
    pub fn draft(self) -> Result<AppointmentDraft, ClinicError> {
        let mut faltantes = Vec::new();
        let patient_id = id_field(self.paciente_id, "pacienteId", &mut faltantes);
        let doctor_id = id_field(self.doctor_id, "doctorId", &mut faltantes);
        let date = text_field(self.fecha, "fecha", &mut faltantes);
        let time = text_field(self.hora, "hora", &mut faltantes);
        let reason = text_field(self.motivo, "motivo", &mut faltantes);

        match (patient_id, doctor_id, date, time, reason) {
            (Some(patient_id), Some(doctor_id), Some(date), Some(time), Some(reason)) => {
                Ok(AppointmentDraft {
                    patient_id,
                    doctor_id,
                    date,
                    time,
                    reason,
                })
            }
            _ => Err(ClinicError::MissingFields { faltantes }),
        }
    }
}

/// `{ mensaje, paciente }` envelope returned by patient mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct PacienteRes {
    #[schema(example = "Paciente agregado")]
    pub mensaje: String,
    pub paciente: Patient,
}

/// `{ mensaje, doctor }` envelope returned by doctor mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct DoctorRes {
    #[schema(example = "Doctor agregado")]
    pub mensaje: String,
    pub doctor: Doctor,
}

/// `{ mensaje, cita }` envelope returned by appointment mutations.
#[derive(Debug, Serialize, ToSchema)]
pub struct CitaRes {
    #[schema(example = "Cita agendada")]
    pub mensaje: String,
    pub cita: Appointment,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    #[schema(example = "Clinica REST API is alive")]
    pub message: String,
}

/// Banner served at `/` instead of the dashboard's static assets.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Clínica API")]
    pub servicio: String,
    pub version: String,
    #[schema(example = "/swagger-ui")]
    pub documentacion: String,
}

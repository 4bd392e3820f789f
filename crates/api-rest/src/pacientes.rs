//! Patient endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use clinica_core::{Appointment, Patient};

use crate::dto::{NuevoPaciente, PacienteRes};
use crate::error::{ApiError, ErrorBody, Json};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/pacientes",
    responses(
        (status = 200, description = "Todos los pacientes registrados", body = [Patient])
    )
)]
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    Ok(Json(state.patients.list()?))
}

#[utoipa::path(
    get,
    path = "/pacientes/{id}",
    params(("id" = String, Path, description = "Identificador canónico (P001) o numérico (1)")),
    responses(
        (status = 200, description = "El paciente solicitado", body = Patient),
        (status = 404, description = "Paciente no encontrado", body = ErrorBody)
    )
)]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(state.patients.get(&id)?))
}

#[utoipa::path(
    post,
    path = "/pacientes",
    request_body = NuevoPaciente,
    responses(
        (status = 201, description = "Paciente agregado", body = PacienteRes),
        (status = 400, description = "Campos faltantes o email duplicado", body = ErrorBody)
    )
)]
/// Registers a new patient.
///
/// The identifier and registration date are assigned server-side.
pub async fn create_patient(
    State(state): State<AppState>,
    Json(body): Json<NuevoPaciente>,
) -> Result<(StatusCode, Json<PacienteRes>), ApiError> {
    let paciente = state.patients.create(body.draft()?)?;
    Ok((
        StatusCode::CREATED,
        Json(PacienteRes {
            mensaje: "Paciente agregado".into(),
            paciente,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/pacientes/{id}",
    params(("id" = String, Path, description = "Identificador del paciente")),
    request_body = NuevoPaciente,
    responses(
        (status = 200, description = "Paciente actualizado", body = PacienteRes),
        (status = 400, description = "Campos faltantes o email duplicado", body = ErrorBody),
        (status = 404, description = "Paciente no encontrado", body = ErrorBody)
    )
)]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NuevoPaciente>,
) -> Result<Json<PacienteRes>, ApiError> {
    let paciente = state.patients.update(&id, body.draft()?)?;
    Ok(Json(PacienteRes {
        mensaje: "Paciente actualizado".into(),
        paciente,
    }))
}

#[utoipa::path(
    delete,
    path = "/pacientes/{id}",
    params(("id" = String, Path, description = "Identificador del paciente")),
    responses(
        (status = 200, description = "Paciente eliminado", body = PacienteRes),
        (status = 404, description = "Paciente no encontrado", body = ErrorBody)
    )
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PacienteRes>, ApiError> {
    let paciente = state.patients.delete(&id)?;
    Ok(Json(PacienteRes {
        mensaje: "Paciente eliminado".into(),
        paciente,
    }))
}

#[utoipa::path(
    get,
    path = "/pacientes/{id}/historial",
    params(("id" = String, Path, description = "Identificador del paciente")),
    responses(
        (status = 200, description = "Citas del paciente", body = [Appointment]),
        (status = 404, description = "Sin historial de citas", body = ErrorBody)
    )
)]
pub async fn patient_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.patients.history(&id)?))
}

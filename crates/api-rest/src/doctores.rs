//! Doctor endpoints, including the specialty filter and the head-count
//! statistics the dashboard charts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use clinica_core::{Doctor, DoctorStats};

use crate::dto::{DoctorRes, NuevoDoctor};
use crate::error::{ApiError, ErrorBody, Json};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/doctores",
    responses(
        (status = 200, description = "Todos los doctores registrados", body = [Doctor])
    )
)]
pub async fn list_doctors(State(state): State<AppState>) -> Result<Json<Vec<Doctor>>, ApiError> {
    Ok(Json(state.doctors.list()?))
}

#[utoipa::path(
    get,
    path = "/doctores/{id}",
    params(("id" = String, Path, description = "Identificador canónico (D001) o numérico (1)")),
    responses(
        (status = 200, description = "El doctor solicitado", body = Doctor),
        (status = 404, description = "Doctor no encontrado", body = ErrorBody)
    )
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Doctor>, ApiError> {
    Ok(Json(state.doctors.get(&id)?))
}

#[utoipa::path(
    post,
    path = "/doctores",
    request_body = NuevoDoctor,
    responses(
        (status = 201, description = "Doctor agregado", body = DoctorRes),
        (status = 400, description = "Campos faltantes, horario inválido o doctor duplicado", body = ErrorBody)
    )
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(body): Json<NuevoDoctor>,
) -> Result<(StatusCode, Json<DoctorRes>), ApiError> {
    let doctor = state.doctors.create(body.draft()?)?;
    Ok((
        StatusCode::CREATED,
        Json(DoctorRes {
            mensaje: "Doctor agregado".into(),
            doctor,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/doctores/{id}",
    params(("id" = String, Path, description = "Identificador del doctor")),
    request_body = NuevoDoctor,
    responses(
        (status = 200, description = "Doctor actualizado", body = DoctorRes),
        (status = 400, description = "Campos faltantes, horario inválido o doctor duplicado", body = ErrorBody),
        (status = 404, description = "Doctor no encontrado", body = ErrorBody)
    )
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NuevoDoctor>,
) -> Result<Json<DoctorRes>, ApiError> {
    let doctor = state.doctors.update(&id, body.draft()?)?;
    Ok(Json(DoctorRes {
        mensaje: "Doctor actualizado".into(),
        doctor,
    }))
}

#[utoipa::path(
    delete,
    path = "/doctores/{id}",
    params(("id" = String, Path, description = "Identificador del doctor")),
    responses(
        (status = 200, description = "Doctor eliminado", body = DoctorRes),
        (status = 404, description = "Doctor no encontrado", body = ErrorBody)
    )
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DoctorRes>, ApiError> {
    let doctor = state.doctors.delete(&id)?;
    Ok(Json(DoctorRes {
        mensaje: "Doctor eliminado".into(),
        doctor,
    }))
}

#[utoipa::path(
    get,
    path = "/doctores/especialidad/{especialidad}",
    params(("especialidad" = String, Path, description = "Especialidad a filtrar, sin distinguir mayúsculas")),
    responses(
        (status = 200, description = "Doctores de la especialidad, posiblemente ninguno", body = [Doctor])
    )
)]
pub async fn doctors_by_specialty(
    State(state): State<AppState>,
    Path(especialidad): Path<String>,
) -> Result<Json<Vec<Doctor>>, ApiError> {
    Ok(Json(state.doctors.by_specialty(&especialidad)?))
}

#[utoipa::path(
    get,
    path = "/estadisticas/doctores",
    responses(
        (status = 200, description = "Total de doctores y cuenta por especialidad", body = DoctorStats)
    )
)]
pub async fn doctor_stats(State(state): State<AppState>) -> Result<Json<DoctorStats>, ApiError> {
    Ok(Json(state.doctors.stats()?))
}

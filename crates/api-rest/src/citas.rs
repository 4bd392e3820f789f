//! Appointment endpoints.
//!
//! `create_appointment` is the entry to the scheduling validator; everything
//! else is lookup and the two one-way status transitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use clinica_core::{Appointment, ClinicError};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::dto::{CitaRes, NuevaCita};
use crate::error::{ApiError, ErrorBody, Json};
use crate::AppState;

/// Optional filters of `GET /citas`. Blank values mean no filter.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CitasQuery {
    /// Exact calendar day, ISO `YYYY-MM-DD`.
    pub fecha: Option<String>,
    /// Exact estado; an unknown value matches nothing.
    pub estado: Option<String>,
}

#[utoipa::path(
    get,
    path = "/citas",
    params(CitasQuery),
    responses(
        (status = 200, description = "Citas que pasan los filtros", body = [Appointment]),
        (status = 400, description = "Fecha inválida", body = ErrorBody)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<CitasQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let fecha = match query.fecha.as_deref().filter(|f| !f.is_empty()) {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ClinicError::InvalidDate)?,
        ),
        None => None,
    };
    let estado = query.estado.as_deref().filter(|e| !e.is_empty());

    Ok(Json(state.appointments.list(fecha, estado)?))
}

#[utoipa::path(
    get,
    path = "/citas/{id}",
    params(("id" = String, Path, description = "Identificador canónico (C001) o numérico (1)")),
    responses(
        (status = 200, description = "La cita solicitada", body = Appointment),
        (status = 404, description = "Cita no encontrada", body = ErrorBody)
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError> {
    Ok(Json(state.appointments.get(&id)?))
}

#[utoipa::path(
    post,
    path = "/citas",
    request_body = NuevaCita,
    responses(
        (status = 201, description = "Cita agendada", body = CitaRes),
        (status = 400, description = "Campos faltantes o regla de agenda violada", body = ErrorBody)
    )
)]
/// Schedules a new appointment.
///
/// The request is checked, in order: referenced patient and doctor exist, the
/// doctor works that weekday, the time falls within office hours, and the
/// slot is free. The first failing rule is the one reported.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(body): Json<NuevaCita>,
) -> Result<(StatusCode, Json<CitaRes>), ApiError> {
    let cita = state.appointments.schedule(body.draft()?)?;
    Ok((
        StatusCode::CREATED,
        Json(CitaRes {
            mensaje: "Cita agendada".into(),
            cita,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/citas/{id}/cancelar",
    params(("id" = String, Path, description = "Identificador de la cita")),
    responses(
        (status = 200, description = "Cita cancelada", body = CitaRes),
        (status = 400, description = "La cita no está programada", body = ErrorBody),
        (status = 404, description = "Cita no encontrada", body = ErrorBody)
    )
)]
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CitaRes>, ApiError> {
    let cita = state.appointments.cancel(&id)?;
    Ok(Json(CitaRes {
        mensaje: "Cita cancelada".into(),
        cita,
    }))
}

#[utoipa::path(
    put,
    path = "/citas/{id}/completar",
    params(("id" = String, Path, description = "Identificador de la cita")),
    responses(
        (status = 200, description = "Cita completada", body = CitaRes),
        (status = 400, description = "La cita no está programada", body = ErrorBody),
        (status = 404, description = "Cita no encontrada", body = ErrorBody)
    )
)]
pub async fn complete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CitaRes>, ApiError> {
    let cita = state.appointments.complete(&id)?;
    Ok(Json(CitaRes {
        mensaje: "Cita completada".into(),
        cita,
    }))
}

#[utoipa::path(
    get,
    path = "/citas/doctor/{doctorId}",
    params(("doctorId" = String, Path, description = "Identificador del doctor")),
    responses(
        (status = 200, description = "Agenda del doctor, posiblemente vacía", body = [Appointment])
    )
)]
pub async fn doctor_agenda(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    Ok(Json(state.appointments.for_doctor(&doctor_id)?))
}

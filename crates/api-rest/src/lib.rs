//! # API REST
//!
//! REST surface of the clinica appointment manager.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON decoding, `faltantes` reporting, CORS)
//!
//! All domain decisions live in `clinica-core`; this crate decodes requests,
//! calls the services, and maps results onto the wire contract the admin
//! dashboard consumes.

#![warn(rust_2018_idioms)]

pub mod citas;
pub mod doctores;
pub mod dto;
pub mod error;
pub mod pacientes;

use axum::response::Json;
use axum::routing::{get, put};
use axum::Router;
use clinica_core::{
    Appointment, AppointmentService, AppointmentStatus, CoreConfig, Doctor, DoctorService,
    DoctorStats, Patient, PatientService,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dto::{
    CitaRes, DoctorRes, HealthRes, NuevaCita, NuevoDoctor, NuevoPaciente, PacienteRes, ServiceInfo,
};
use error::ErrorBody;

/// Application state shared across REST API handlers.
///
/// Holds one service per entity type; each service carries only the shared
/// [`CoreConfig`], so handlers never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            patients: PatientService::new(cfg.clone()),
            doctors: DoctorService::new(cfg.clone()),
            appointments: AppointmentService::new(cfg),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root,
        health,
        pacientes::list_patients,
        pacientes::get_patient,
        pacientes::create_patient,
        pacientes::update_patient,
        pacientes::delete_patient,
        pacientes::patient_history,
        doctores::list_doctors,
        doctores::get_doctor,
        doctores::create_doctor,
        doctores::update_doctor,
        doctores::delete_doctor,
        doctores::doctors_by_specialty,
        doctores::doctor_stats,
        citas::list_appointments,
        citas::get_appointment,
        citas::create_appointment,
        citas::cancel_appointment,
        citas::complete_appointment,
        citas::doctor_agenda,
    ),
    components(schemas(
        Patient,
        Doctor,
        Appointment,
        AppointmentStatus,
        DoctorStats,
        NuevoPaciente,
        NuevoDoctor,
        NuevaCita,
        PacienteRes,
        DoctorRes,
        CitaRes,
        ErrorBody,
        HealthRes,
        ServiceInfo,
    ))
)]
struct ApiDoc;

/// Builds the application router, Swagger UI and permissive CORS included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/pacientes",
            get(pacientes::list_patients).post(pacientes::create_patient),
        )
        .route(
            "/pacientes/:id",
            get(pacientes::get_patient)
                .put(pacientes::update_patient)
                .delete(pacientes::delete_patient),
        )
        .route("/pacientes/:id/historial", get(pacientes::patient_history))
        .route(
            "/doctores",
            get(doctores::list_doctors).post(doctores::create_doctor),
        )
        .route(
            "/doctores/:id",
            get(doctores::get_doctor)
                .put(doctores::update_doctor)
                .delete(doctores::delete_doctor),
        )
        .route(
            "/doctores/especialidad/:especialidad",
            get(doctores::doctors_by_specialty),
        )
        .route("/estadisticas/doctores", get(doctores::doctor_stats))
        .route(
            "/citas",
            get(citas::list_appointments).post(citas::create_appointment),
        )
        .route("/citas/:id", get(citas::get_appointment))
        .route("/citas/:id/cancelar", put(citas::cancel_appointment))
        .route("/citas/:id/completar", put(citas::complete_appointment))
        .route("/citas/doctor/:doctorId", get(citas::doctor_agenda))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = ServiceInfo)
    )
)]
/// The dashboard's old index route; answers with service metadata now that
/// static assets are served elsewhere.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        servicio: "Clínica API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        documentacion: "/swagger-ui".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Clinica REST API is alive".into(),
    })
}

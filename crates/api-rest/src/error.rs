//! Mapping from clinic errors to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clinica_core::ClinicError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error body shape the dashboard consumes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Doctor no atiende ese día")]
    pub error: String,
    /// Wire names of the missing required fields, when that is the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faltantes: Option<Vec<String>>,
}

/// JSON extractor and response wrapper for the clinic wire contract.
///
/// Replaces [`axum::Json`] in handlers so that a body axum cannot decode —
/// not JSON at all, wrong content type, or the wrong shape for the target
/// type — still answers with the `{ error }` envelope instead of axum's
/// plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Wrapper giving [`ClinicError`] and body rejections an HTTP rendering.
///
/// Validation and business-rule violations answer 400, missing records 404,
/// storage failures 500 with a generic message (the cause goes to the log,
/// not the client).
#[derive(Debug)]
pub enum ApiError {
    Clinic(ClinicError),
    BadBody(JsonRejection),
}

impl From<ClinicError> for ApiError {
    fn from(err: ClinicError) -> Self {
        Self::Clinic(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::BadBody(rejection) => {
                tracing::warn!("request body rejected: {rejection}");
                let body = ErrorBody {
                    error: "Cuerpo de la petición inválido".into(),
                    faltantes: None,
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::Clinic(err) => err,
        };

        if let ClinicError::Store(e) = &err {
            tracing::error!("storage failure: {e}");
            let body = ErrorBody {
                error: "Error interno del servidor".into(),
                faltantes: None,
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };

        let error = err.to_string();
        let faltantes = match err {
            ClinicError::MissingFields { faltantes } => Some(faltantes),
            _ => None,
        };

        (status, Json(ErrorBody { error, faltantes })).into_response()
    }
}

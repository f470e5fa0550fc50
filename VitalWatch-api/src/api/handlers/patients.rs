use std::sync::Arc;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

// Import domain services
use vital_watch_domain::services::{PatientServiceError, PatientServiceTrait};

// Import our entities
use crate::entities::common::ErrorResponse;
use crate::entities::patient::{CreatePatientRequest, PatientProfile};

/// Shared handle to the patient service
pub type PatientServiceHandle = Arc<dyn PatientServiceTrait + Send + Sync>;

/// Map patient service errors to API responses
fn error_response(err: PatientServiceError) -> Response {
    match err {
        PatientServiceError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("patient")),
        )
            .into_response(),
        PatientServiceError::ValidationError(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation_error(&message, None)),
        )
            .into_response(),
        PatientServiceError::RepositoryError(message) => {
            error!("Repository error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal_error()),
            )
                .into_response()
        }
    }
}

/// Register a new patient with their recorded baseline
#[utoipa::path(
    post,
    path = "/api/v1/patients",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient registered", body = PatientProfile),
        (status = 400, description = "Invalid registration request", body = ErrorResponse)
    ),
    tag = "patients"
)]
#[instrument(skip_all)]
pub async fn create_patient(
    Extension(service): Extension<PatientServiceHandle>,
    Json(request): Json<CreatePatientRequest>,
) -> Response {
    info!("Registering new patient");

    match service.register_patient(request.into()).await {
        Ok(profile) => (StatusCode::CREATED, Json(PatientProfile::from(profile))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get a patient profile by id
#[utoipa::path(
    get,
    path = "/api/v1/patients/{id}",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Patient profile", body = PatientProfile),
        (status = 400, description = "Invalid patient identifier", body = ErrorResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse)
    ),
    tag = "patients"
)]
#[instrument(skip_all)]
pub async fn get_patient(
    Extension(service): Extension<PatientServiceHandle>,
    Path(id): Path<String>,
) -> Response {
    info!("Fetching patient {}", id);

    match service.get_patient(&id).await {
        Ok(profile) => (StatusCode::OK, Json(PatientProfile::from(profile))).into_response(),
        Err(e) => error_response(e),
    }
}

/// List all registered patients
#[utoipa::path(
    get,
    path = "/api/v1/patients",
    responses(
        (status = 200, description = "Registered patients", body = [PatientProfile])
    ),
    tag = "patients"
)]
#[instrument(skip_all)]
pub async fn list_patients(Extension(service): Extension<PatientServiceHandle>) -> Response {
    match service.list_patients().await {
        Ok(profiles) => {
            let profiles: Vec<PatientProfile> =
                profiles.into_iter().map(PatientProfile::from).collect();
            (StatusCode::OK, Json(profiles)).into_response()
        }
        Err(e) => error_response(e),
    }
}

use std::sync::Arc;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument};

// Import domain services
use vital_watch_domain::entities::patient::BloodPressure;
use vital_watch_domain::services::{VitalsServiceError, VitalsServiceTrait};

// Import our entities
use crate::entities::common::ErrorResponse;
use crate::entities::vitals::{BloodPressureCheckRequest, TemperatureCheckRequest};

/// Shared handle to the vitals check service
pub type VitalsServiceHandle = Arc<dyn VitalsServiceTrait + Send + Sync>;

/// Map vitals service errors to API responses
fn error_response(err: VitalsServiceError) -> Response {
    match err {
        VitalsServiceError::PatientNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("patient")),
        )
            .into_response(),
        VitalsServiceError::ValidationError(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(&message)),
        )
            .into_response(),
        VitalsServiceError::RepositoryError(message) => {
            error!("Repository error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal_error()),
            )
                .into_response()
        }
    }
}

/// Check an observed blood pressure against the patient's baseline.
///
/// Raises an alert through the configured notifier when the reading
/// deviates; the response carries no alert outcome.
#[utoipa::path(
    post,
    path = "/api/v1/patients/{id}/checks/blood-pressure",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    request_body = BloodPressureCheckRequest,
    responses(
        (status = 204, description = "Check completed"),
        (status = 400, description = "Invalid patient identifier", body = ErrorResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse)
    ),
    tag = "vitals"
)]
#[instrument(skip_all)]
pub async fn check_blood_pressure(
    Extension(service): Extension<VitalsServiceHandle>,
    Path(id): Path<String>,
    Json(request): Json<BloodPressureCheckRequest>,
) -> Response {
    info!("Blood pressure check requested for patient {}", id);

    let observed = BloodPressure::new(request.high, request.low);

    match service.check_blood_pressure(&id, observed).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// Check an observed body temperature against the patient's baseline.
#[utoipa::path(
    post,
    path = "/api/v1/patients/{id}/checks/temperature",
    params(
        ("id" = String, Path, description = "Patient identifier")
    ),
    request_body = TemperatureCheckRequest,
    responses(
        (status = 204, description = "Check completed"),
        (status = 400, description = "Invalid patient identifier", body = ErrorResponse),
        (status = 404, description = "Patient not found", body = ErrorResponse)
    ),
    tag = "vitals"
)]
#[instrument(skip_all)]
pub async fn check_temperature(
    Extension(service): Extension<VitalsServiceHandle>,
    Path(id): Path<String>,
    Json(request): Json<TemperatureCheckRequest>,
) -> Response {
    info!("Temperature check requested for patient {}", id);

    match service.check_temperature(&id, request.temperature).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

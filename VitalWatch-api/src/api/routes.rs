use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;
use std::sync::Arc;

use vital_watch_data::repository::PatientRepository;
use vital_watch_domain::alerts::create_notifier_from_env;
use vital_watch_domain::health::{DefaultHealthService, HealthServiceTrait};
use vital_watch_domain::services::{PatientService, VitalsService};

use crate::api::handlers::patients::PatientServiceHandle;
use crate::api::handlers::vitals::VitalsServiceHandle;
use crate::api::handlers::{health, patients, vitals};
use crate::openapi::configure_swagger_routes;

/// Create the application router with default services.
///
/// A single patient repository backs both the patient service and the vitals
/// checker, so registered patients are visible to subsequent checks.
pub fn create_app() -> Router {
    debug!("Creating application router");

    let repository = PatientRepository::new();
    let notifier = create_notifier_from_env();

    let patient_service: PatientServiceHandle =
        Arc::new(PatientService::new(repository.clone()));
    let vitals_service: VitalsServiceHandle =
        Arc::new(VitalsService::new(repository.clone(), notifier));
    let health_service: Arc<dyn HealthServiceTrait + Send + Sync> =
        Arc::new(DefaultHealthService::new(repository));

    app_with_services(patient_service, vitals_service, health_service)
}

/// Assemble the router from explicit service handles
pub(crate) fn app_with_services(
    patient_service: PatientServiceHandle,
    vitals_service: VitalsServiceHandle,
    health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
) -> Router {
    // Define specific routes before parametrized routes to avoid conflicts
    let api_routes = Router::new()
        .route(
            "/patients",
            get(patients::list_patients).post(patients::create_patient),
        )
        .route("/patients/:id", get(patients::get_patient))
        .route(
            "/patients/:id/checks/blood-pressure",
            post(vitals::check_blood_pressure),
        )
        .route(
            "/patients/:id/checks/temperature",
            post(vitals::check_temperature),
        );

    debug!("API routes configured");

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health::health_check))
        .merge(configure_swagger_routes())
        .layer(Extension(patient_service))
        .layer(Extension(vitals_service))
        .layer(Extension(health_service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

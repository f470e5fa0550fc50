use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Patient endpoints
        crate::api::handlers::patients::create_patient,
        crate::api::handlers::patients::get_patient,
        crate::api::handlers::patients::list_patients,

        // Vitals check endpoints
        crate::api::handlers::vitals::check_blood_pressure,
        crate::api::handlers::vitals::check_temperature,
    ),
    components(
        schemas(
            // Entities
            crate::entities::patient::PatientProfile,
            crate::entities::patient::CreatePatientRequest,
            crate::entities::patient::HealthBaseline,
            crate::entities::patient::BloodPressure,
            crate::entities::vitals::BloodPressureCheckRequest,
            crate::entities::vitals::TemperatureCheckRequest,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient registration and lookup endpoints"),
        (name = "vitals", description = "Vitals check endpoints")
    ),
    info(
        title = "VitalWatch API",
        version = "0.1.0",
        description = "API for checking patient vital signs against recorded baselines",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;

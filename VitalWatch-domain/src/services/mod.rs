// Services that implement business logic
pub mod patient;
pub mod vitals;

// Re-export common service types for easier imports
pub use patient::{PatientService, PatientServiceError, PatientServiceTrait};
pub use vitals::{
    VitalsService, VitalsServiceError, VitalsServiceTrait, TEMPERATURE_TOLERANCE,
};

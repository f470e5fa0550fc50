// API-facing request and response entities
pub mod common;
pub mod patient;
pub mod vitals;

// Re-export common types for easier imports
pub use common::ErrorResponse;
pub use patient::{BloodPressure, CreatePatientRequest, HealthBaseline, PatientProfile};
pub use vitals::{BloodPressureCheckRequest, TemperatureCheckRequest};

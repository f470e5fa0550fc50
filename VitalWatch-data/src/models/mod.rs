// Storage models for patient records
pub mod patient;

// Re-export common types for easier imports
pub use patient::{BloodPressure, CreatePatientRequest, HealthBaseline, PatientProfile};

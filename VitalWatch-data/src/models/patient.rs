use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// An ordered systolic/diastolic pair in mmHg.
///
/// High is expected to be greater than or equal to low, but this is not
/// enforced; readings are stored exactly as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub high: u16,

    /// Diastolic pressure (the lower number)
    pub low: u16,
}

impl BloodPressure {
    /// Create a pressure pair from its components
    pub fn new(high: u16, low: u16) -> Self {
        Self { high, low }
    }
}

/// A patient's recorded normal vital signs, used as the comparison
/// reference for vitals checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBaseline {
    /// Normal body temperature in degrees Celsius
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub blood_pressure: BloodPressure,
}

/// Storage model for a patient profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Unique identifier for the patient (UUID string)
    pub id: String,

    /// Patient's first name
    pub first_name: String,

    /// Patient's last name
    pub last_name: String,

    /// Patient's date of birth
    pub birth_date: NaiveDate,

    /// Recorded normal vital signs
    pub baseline: HealthBaseline,
}

/// Input data for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    /// Patient's first name
    pub first_name: String,

    /// Patient's last name
    pub last_name: String,

    /// Patient's date of birth
    pub birth_date: NaiveDate,

    /// Normal body temperature in degrees Celsius
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub blood_pressure: BloodPressure,
}

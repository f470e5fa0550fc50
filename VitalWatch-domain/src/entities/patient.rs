use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use validator::Validate;

/// An ordered systolic/diastolic pair in mmHg.
///
/// High is expected to be greater than or equal to low, but this is not
/// enforced anywhere; a reading is compared exactly as taken.
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

impl std::fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.high, self.low)
    }
}

/// A patient's recorded normal vital signs.
///
/// The baseline is immutable input to a check call; checks never create,
/// update, or delete it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBaseline {
    /// Normal body temperature in degrees Celsius
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub blood_pressure: BloodPressure,
}

/// A registered patient and their recorded baseline
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
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePatientRequest {
    /// Patient's first name
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,

    /// Patient's last name
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,

    /// Patient's date of birth
    pub birth_date: NaiveDate,

    /// Normal body temperature in degrees Celsius
    #[validate(range(min = 30.0, max = 45.0, message = "Temperature outside plausible range"))]
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub blood_pressure: BloodPressure,
}

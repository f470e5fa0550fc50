use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use utoipa::ToSchema;

use vital_watch_domain::entities::patient as domain;

/// An ordered systolic/diastolic pair in mmHg
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub high: u16,

    /// Diastolic pressure (the lower number)
    pub low: u16,
}

/// A patient's recorded normal vital signs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct HealthBaseline {
    /// Normal body temperature in degrees Celsius
    pub normal_temperature: f64,

    /// Normal blood pressure
    pub blood_pressure: BloodPressure,
}

/// A registered patient and their recorded baseline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
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

/// Request body for registering a new patient
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
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

impl From<domain::BloodPressure> for BloodPressure {
    fn from(pressure: domain::BloodPressure) -> Self {
        Self {
            high: pressure.high,
            low: pressure.low,
        }
    }
}

impl From<BloodPressure> for domain::BloodPressure {
    fn from(pressure: BloodPressure) -> Self {
        Self {
            high: pressure.high,
            low: pressure.low,
        }
    }
}

impl From<domain::PatientProfile> for PatientProfile {
    fn from(profile: domain::PatientProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            birth_date: profile.birth_date,
            baseline: HealthBaseline {
                normal_temperature: profile.baseline.normal_temperature,
                blood_pressure: profile.baseline.blood_pressure.into(),
            },
        }
    }
}

impl From<CreatePatientRequest> for domain::CreatePatientRequest {
    fn from(request: CreatePatientRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
            normal_temperature: request.normal_temperature,
            blood_pressure: request.blood_pressure.into(),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for a blood pressure check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureCheckRequest {
    /// Observed systolic pressure (the higher number)
    pub high: u16,

    /// Observed diastolic pressure (the lower number)
    pub low: u16,
}

/// Request body for a body temperature check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TemperatureCheckRequest {
    /// Observed body temperature in degrees Celsius
    pub temperature: f64,
}

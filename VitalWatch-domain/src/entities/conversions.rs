use crate::entities::patient::{BloodPressure, CreatePatientRequest, HealthBaseline, PatientProfile};
use uuid::Uuid;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Helper function to safely parse a string ID to UUID
///
/// This centralizes UUID parsing logic to ensure consistent handling across
/// the application. When an invalid UUID is provided, it returns a
/// descriptive error message.
pub fn parse_string_to_uuid(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid UUID format: {}", id))
}

/// Convert from data model to domain entity for a blood pressure pair
pub fn convert_to_domain_pressure(data_pressure: vital_watch_data::models::patient::BloodPressure)
    -> BloodPressure
{
    BloodPressure {
        high: data_pressure.high,
        low: data_pressure.low,
    }
}

/// Convert from domain entity to data model for a blood pressure pair
pub fn convert_to_data_pressure(domain_pressure: BloodPressure)
    -> vital_watch_data::models::patient::BloodPressure
{
    vital_watch_data::models::patient::BloodPressure {
        high: domain_pressure.high,
        low: domain_pressure.low,
    }
}

/// Convert from data model to domain entity for a patient profile
pub fn convert_to_domain_profile(data_profile: vital_watch_data::models::patient::PatientProfile)
    -> PatientProfile
{
    PatientProfile {
        id: data_profile.id,
        first_name: data_profile.first_name,
        last_name: data_profile.last_name,
        birth_date: data_profile.birth_date,
        baseline: HealthBaseline {
            normal_temperature: data_profile.baseline.normal_temperature,
            blood_pressure: convert_to_domain_pressure(data_profile.baseline.blood_pressure),
        },
    }
}

/// Convert from domain entity to data model for a create request
pub fn convert_to_data_create_request(domain_request: &CreatePatientRequest)
    -> vital_watch_data::models::patient::CreatePatientRequest
{
    vital_watch_data::models::patient::CreatePatientRequest {
        first_name: domain_request.first_name.clone(),
        last_name: domain_request.last_name.clone(),
        birth_date: domain_request.birth_date,
        normal_temperature: domain_request.normal_temperature,
        blood_pressure: convert_to_data_pressure(domain_request.blood_pressure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_to_uuid_valid() {
        let parsed = parse_string_to_uuid("21f89cee-c0ae-4eb9-b291-f0dffd12e16b");
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_parse_string_to_uuid_invalid() {
        let parsed = parse_string_to_uuid("not-a-uuid");
        assert!(parsed.unwrap_err().contains("Invalid UUID format"));
    }

    #[test]
    fn test_pressure_round_trip() {
        let domain = BloodPressure::new(120, 80);
        let data = convert_to_data_pressure(domain);
        assert_eq!(convert_to_domain_pressure(data), domain);
    }
}

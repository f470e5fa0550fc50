use thiserror::Error;
use validator::Validate;
use async_trait::async_trait;

use crate::entities::conversions;
use crate::entities::patient::{CreatePatientRequest, PatientProfile};
use vital_watch_data::repository::{PatientRepositoryTrait, RepositoryError};

/// Patient service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Trait for patient registration and lookup operations
#[async_trait]
pub trait PatientServiceTrait {
    /// Validate a patient registration request
    fn validate_create_request(
        &self,
        request: &CreatePatientRequest,
    ) -> Result<(), PatientServiceError>;

    /// Register a new patient with their recorded baseline
    async fn register_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientProfile, PatientServiceError>;

    /// Get a patient profile by id
    async fn get_patient(&self, id: &str) -> Result<PatientProfile, PatientServiceError>;

    /// List all registered patients
    async fn list_patients(&self) -> Result<Vec<PatientProfile>, PatientServiceError>;
}

/// Patient service for registration and lookup
pub struct PatientService<R: PatientRepositoryTrait> {
    repository: R,
}

impl<R: PatientRepositoryTrait> PatientService<R> {
    /// Create a new patient service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> PatientServiceError {
        match err {
            RepositoryError::NotFound(msg) => PatientServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => PatientServiceError::ValidationError(msg),
            _ => PatientServiceError::RepositoryError(err.to_string()),
        }
    }
}

#[async_trait]
impl<R: PatientRepositoryTrait + Send + Sync> PatientServiceTrait for PatientService<R> {
    /// Validate a patient registration request
    fn validate_create_request(
        &self,
        request: &CreatePatientRequest,
    ) -> Result<(), PatientServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = request.validate() {
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(PatientServiceError::ValidationError(error_message));
        }

        // Additional validation: component-wise plausibility of the baseline
        // pressure. High >= low is deliberately not checked; readings are
        // stored exactly as recorded.
        if request.blood_pressure.high > 300 {
            return Err(PatientServiceError::ValidationError(
                "Systolic pressure above plausible range".to_string(),
            ));
        }
        if request.blood_pressure.low > 200 {
            return Err(PatientServiceError::ValidationError(
                "Diastolic pressure above plausible range".to_string(),
            ));
        }

        Ok(())
    }

    /// Register a new patient with their recorded baseline
    async fn register_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientProfile, PatientServiceError> {
        self.validate_create_request(&request)?;

        let data_request = conversions::convert_to_data_create_request(&request);

        let data_profile = self
            .repository
            .add(data_request)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Ok(conversions::convert_to_domain_profile(data_profile))
    }

    /// Get a patient profile by id
    async fn get_patient(&self, id: &str) -> Result<PatientProfile, PatientServiceError> {
        let id_uuid = conversions::parse_string_to_uuid(id)
            .map_err(PatientServiceError::ValidationError)?;

        let data_profile = self
            .repository
            .get_by_id(id_uuid)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                PatientServiceError::NotFound(format!("Patient with ID {} not found", id))
            })?;

        Ok(conversions::convert_to_domain_profile(data_profile))
    }

    /// List all registered patients
    async fn list_patients(&self) -> Result<Vec<PatientProfile>, PatientServiceError> {
        let data_profiles = self
            .repository
            .get_all()
            .await
            .map_err(|e| self.map_repo_error(e))?;

        let profiles = data_profiles
            .into_iter()
            .map(conversions::convert_to_domain_profile)
            .collect();

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::patient::BloodPressure;
    use chrono::NaiveDate;
    use vital_watch_data::repository::tests::MockPatientRepository;

    fn create_request() -> CreatePatientRequest {
        CreatePatientRequest {
            first_name: "Yuri".to_string(),
            last_name: "Sidorov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1981, 2, 26).unwrap(),
            normal_temperature: 36.55,
            blood_pressure: BloodPressure::new(120, 80),
        }
    }

    #[test]
    fn test_validate_create_request_valid() {
        let service = PatientService::new(MockPatientRepository::new());

        assert!(service.validate_create_request(&create_request()).is_ok());
    }

    #[test]
    fn test_validate_create_request_empty_name() {
        let service = PatientService::new(MockPatientRepository::new());

        let mut request = create_request();
        request.first_name = String::new();

        let result = service.validate_create_request(&request);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("First name"));
    }

    #[test]
    fn test_validate_create_request_implausible_temperature() {
        let service = PatientService::new(MockPatientRepository::new());

        let mut request = create_request();
        request.normal_temperature = 50.0;

        let result = service.validate_create_request(&request);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Temperature"));
    }

    #[test]
    fn test_validate_create_request_implausible_pressure() {
        let service = PatientService::new(MockPatientRepository::new());

        let mut request = create_request();
        request.blood_pressure = BloodPressure::new(350, 80);

        let result = service.validate_create_request(&request);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Systolic"));
    }

    #[test]
    fn test_validate_create_request_inverted_pressure_is_accepted() {
        let service = PatientService::new(MockPatientRepository::new());

        // High below low is stored as recorded, not rejected
        let mut request = create_request();
        request.blood_pressure = BloodPressure::new(80, 120);

        assert!(service.validate_create_request(&request).is_ok());
    }

    #[tokio::test]
    async fn test_register_and_get_patient() {
        let service = PatientService::new(MockPatientRepository::new());

        let profile = service.register_patient(create_request()).await.unwrap();
        assert_eq!(profile.baseline.blood_pressure, BloodPressure::new(120, 80));

        let found = service.get_patient(&profile.id).await.unwrap();
        assert_eq!(found, profile);
    }

    #[tokio::test]
    async fn test_get_patient_unknown_id_is_not_found() {
        let service = PatientService::new(MockPatientRepository::new());

        let result = service.get_patient(&uuid::Uuid::new_v4().to_string()).await;
        assert!(matches!(result, Err(PatientServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_patients() {
        let service = PatientService::new(MockPatientRepository::new());

        service.register_patient(create_request()).await.unwrap();
        service.register_patient(create_request()).await.unwrap();

        let profiles = service.list_patients().await.unwrap();
        assert_eq!(profiles.len(), 2);
    }
}

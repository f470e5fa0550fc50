use tracing::debug;
use uuid::Uuid;
use async_trait::async_trait;

use crate::models::patient::{CreatePatientRequest, PatientProfile};
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for patient profiles
#[async_trait]
pub trait PatientRepositoryTrait {
    /// Register a new patient from a request, generating its identifier
    async fn add(&self, request: CreatePatientRequest) -> Result<PatientProfile, RepositoryError>;

    /// Get a patient profile by id
    async fn get_by_id(&self, id: Uuid) -> Result<Option<PatientProfile>, RepositoryError>;

    /// Get all patient profiles
    async fn get_all(&self) -> Result<Vec<PatientProfile>, RepositoryError>;
}

/// Repository for patient profiles backed by in-memory storage.
///
/// The trait is the seam where a persistent backend would plug in; only the
/// in-memory implementation ships with this service.
#[derive(Debug, Clone, Default)]
pub struct PatientRepository {
    storage: InMemoryStorage,
}

impl PatientRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl PatientRepositoryTrait for PatientRepository {
    /// Register a new patient from a request
    async fn add(&self, request: CreatePatientRequest) -> Result<PatientProfile, RepositoryError> {
        // Generate a unique ID
        let id = Uuid::new_v4();

        let profile = PatientProfile {
            id: id.to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
            baseline: crate::models::patient::HealthBaseline {
                normal_temperature: request.normal_temperature,
                blood_pressure: request.blood_pressure,
            },
        };

        debug!("Storing patient profile: {}", profile.id);
        self.storage.store_profile(&profile).await
    }

    /// Get a patient profile by id
    async fn get_by_id(&self, id: Uuid) -> Result<Option<PatientProfile>, RepositoryError> {
        debug!("Getting patient profile by id: {}", id);
        self.storage.get_by_id(&id).await
    }

    /// Get all patient profiles
    async fn get_all(&self) -> Result<Vec<PatientProfile>, RepositoryError> {
        debug!("Getting all patient profiles");
        self.storage.get_all().await
    }
}

/// Mock patient repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock implementation of PatientRepository for testing
    pub struct MockPatientRepository {
        profiles: Mutex<Vec<PatientProfile>>,
    }

    impl Default for MockPatientRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPatientRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
            }
        }

        /// Create a mock repository with predefined profiles
        pub fn with_profiles(profiles: Vec<PatientProfile>) -> Self {
            Self {
                profiles: Mutex::new(profiles),
            }
        }
    }

    #[async_trait]
    impl PatientRepositoryTrait for MockPatientRepository {
        async fn add(&self, request: CreatePatientRequest) -> Result<PatientProfile, RepositoryError> {
            let profile = PatientProfile {
                id: Uuid::new_v4().to_string(),
                first_name: request.first_name,
                last_name: request.last_name,
                birth_date: request.birth_date,
                baseline: crate::models::patient::HealthBaseline {
                    normal_temperature: request.normal_temperature,
                    blood_pressure: request.blood_pressure,
                },
            };

            let mut profiles = self.profiles.lock().map_err(RepositoryError::from)?;
            profiles.push(profile.clone());

            Ok(profile)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<PatientProfile>, RepositoryError> {
            let profiles = self.profiles.lock().map_err(RepositoryError::from)?;
            let profile = profiles.iter().find(|p| p.id == id.to_string()).cloned();

            Ok(profile)
        }

        async fn get_all(&self) -> Result<Vec<PatientProfile>, RepositoryError> {
            let profiles = self.profiles.lock().map_err(RepositoryError::from)?;
            Ok(profiles.clone())
        }
    }

    #[cfg(test)]
    mod repository_tests {
        use super::*;
        use crate::models::patient::{BloodPressure, HealthBaseline};
        use chrono::NaiveDate;

        fn request() -> CreatePatientRequest {
            CreatePatientRequest {
                first_name: "Iris".to_string(),
                last_name: "Moran".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1982, 5, 21).unwrap(),
                normal_temperature: 36.6,
                blood_pressure: BloodPressure::new(130, 90),
            }
        }

        #[test]
        fn test_add_assigns_uuid_and_baseline() {
            let repo = PatientRepository::new();

            tokio_test::block_on(async {
                let profile = repo.add(request()).await.unwrap();

                assert!(Uuid::parse_str(&profile.id).is_ok());
                assert_eq!(
                    profile.baseline,
                    HealthBaseline {
                        normal_temperature: 36.6,
                        blood_pressure: BloodPressure::new(130, 90),
                    }
                );
            });
        }

        #[test]
        fn test_added_profile_is_retrievable() {
            let repo = PatientRepository::new();

            tokio_test::block_on(async {
                let profile = repo.add(request()).await.unwrap();
                let id = Uuid::parse_str(&profile.id).unwrap();

                let found = repo.get_by_id(id).await.unwrap();
                assert_eq!(found, Some(profile));
            });
        }

        #[test]
        fn test_unknown_id_is_none() {
            let repo = PatientRepository::new();

            tokio_test::block_on(async {
                let found = repo.get_by_id(Uuid::new_v4()).await.unwrap();
                assert!(found.is_none());
            });
        }
    }
}

use std::sync::{Arc, Mutex};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::patient::PatientProfile;
use super::errors::RepositoryError;

/// In-memory storage implementation for patient profiles
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Storage for patient profiles, keyed by id
    profiles: Arc<Mutex<HashMap<String, PatientProfile>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a profile in memory
    pub async fn store_profile(&self, profile: &PatientProfile) -> Result<PatientProfile, RepositoryError> {
        let mut store = self.profiles.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        store.insert(profile.id.clone(), profile.clone());
        Ok(profile.clone())
    }

    /// Get a profile by id from memory
    pub async fn get_by_id(&self, id: &Uuid) -> Result<Option<PatientProfile>, RepositoryError> {
        let store = self.profiles.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        Ok(store.get(&id.to_string()).cloned())
    }

    /// Get all profiles from memory
    pub async fn get_all(&self) -> Result<Vec<PatientProfile>, RepositoryError> {
        let store = self.profiles.lock().map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        let mut profiles: Vec<PatientProfile> = store.values().cloned().collect();

        // Stable listing order for callers
        profiles.sort_by(|a, b| a.last_name.cmp(&b.last_name).then_with(|| a.id.cmp(&b.id)));

        Ok(profiles)
    }
}

// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use vital_watch_data::repository::tests::MockPatientRepository;

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;

use crate::alerts::{AlertNotifier, NotifierError, VitalsAlert};
use crate::health::{
    ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus,
};

/// Notifier test double that records every alert it is asked to deliver.
///
/// Stands in for the real delivery channel so tests can assert how many
/// alerts a check produced, and inspect their payloads.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<VitalsAlert>>,
    fail_sends: bool,
}

impl RecordingNotifier {
    /// Create a new recording notifier
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// Configure the notifier to fail every delivery.
    ///
    /// Deliveries are still recorded so tests can assert they were attempted.
    pub fn with_delivery_failure(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Number of deliveries attempted so far
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Snapshot of the alerts delivered so far
    pub fn sent(&self) -> Vec<VitalsAlert> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertNotifier for RecordingNotifier {
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(alert.clone());

        if self.fail_sends {
            Err(NotifierError::Delivery(
                "Delivery failed - mock is configured to fail sends".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Patient store component status
    store_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            store_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a degraded patient store
    pub fn with_degraded_patient_store(mut self) -> Self {
        self.store_status = ComponentStatus::Degraded;
        self
    }

    /// Configure the mock with an unhealthy patient store
    pub fn with_unhealthy_patient_store(mut self) -> Self {
        self.store_status = ComponentStatus::Unhealthy;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(
        mut self,
        name: &str,
        status: ComponentStatus,
        details: Option<String>,
    ) -> Self {
        self.components
            .insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    /// Get the system health
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "patient_store".to_string(),
            HealthComponent {
                status: self.store_status.clone(),
                details: match self.store_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => {
                        Some("Patient store is experiencing high load".to_string())
                    }
                    ComponentStatus::Unhealthy => Some("Patient store unavailable".to_string()),
                },
            },
        );

        components.insert(
            "alerting".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    /// Check patient store status
    async fn check_patient_store(&self) -> Result<bool, String> {
        match self.store_status {
            ComponentStatus::Healthy => Ok(true),
            ComponentStatus::Degraded => Ok(true),
            ComponentStatus::Unhealthy => Err("Patient store unavailable".to_string()),
        }
    }
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}

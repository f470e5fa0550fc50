use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;
use async_trait::async_trait;

use crate::alerts::{AlertNotifier, VitalMetric, VitalsAlert};
use crate::entities::conversions;
use crate::entities::patient::{BloodPressure, PatientProfile};
use vital_watch_data::repository::{PatientRepositoryTrait, RepositoryError};

/// Accepted deviation from the baseline temperature before an alert fires,
/// in degrees Celsius. A reading exactly at the boundary does not alert.
pub const TEMPERATURE_TOLERANCE: f64 = 1.5;

/// Vitals check service errors
#[derive(Debug, Error)]
pub enum VitalsServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Patient not found error
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Trait for vitals check operations.
///
/// A check resolves the patient's recorded baseline, compares the observed
/// reading against it, and raises at most one alert through the notifier.
/// Checks are stateless; nothing about the patient is created, updated, or
/// deleted.
#[async_trait]
pub trait VitalsServiceTrait {
    /// Check an observed blood pressure against the patient's baseline
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        observed: BloodPressure,
    ) -> Result<(), VitalsServiceError>;

    /// Check an observed body temperature against the patient's baseline
    async fn check_temperature(
        &self,
        patient_id: &str,
        observed: f64,
    ) -> Result<(), VitalsServiceError>;
}

/// Vitals check service over a patient record store and an alert notifier
pub struct VitalsService<R, N> {
    repository: R,
    notifier: N,
}

impl<R, N> VitalsService<R, N>
where
    R: PatientRepositoryTrait,
    N: AlertNotifier,
{
    /// Create a new vitals check service
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> VitalsServiceError {
        match err {
            RepositoryError::NotFound(msg) => VitalsServiceError::PatientNotFound(msg),
            RepositoryError::Validation(msg) => VitalsServiceError::ValidationError(msg),
            _ => VitalsServiceError::RepositoryError(err.to_string()),
        }
    }

    /// Resolve a patient id to its profile
    async fn fetch_profile(
        &self,
        patient_id: &str,
    ) -> Result<(Uuid, PatientProfile), VitalsServiceError> {
        let id = conversions::parse_string_to_uuid(patient_id)
            .map_err(VitalsServiceError::ValidationError)?;

        let data_profile = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| {
                VitalsServiceError::PatientNotFound(format!(
                    "Patient with ID {} not found",
                    patient_id
                ))
            })?;

        Ok((id, conversions::convert_to_domain_profile(data_profile)))
    }

    /// Deliver an alert, swallowing delivery failures.
    ///
    /// Alert delivery is best-effort; a failed send never fails the check.
    async fn dispatch_alert(&self, alert: VitalsAlert) {
        if let Err(e) = self.notifier.send(&alert).await {
            error!(
                patient_id = %alert.patient_id,
                error = %e,
                "Failed to send notification"
            );
        }
    }
}

#[async_trait]
impl<R, N> VitalsServiceTrait for VitalsService<R, N>
where
    R: PatientRepositoryTrait + Send + Sync,
    N: AlertNotifier + Send + Sync,
{
    /// Check an observed blood pressure against the patient's baseline.
    ///
    /// Any difference in either component raises exactly one alert; equality
    /// of both components is the only no-alert outcome.
    async fn check_blood_pressure(
        &self,
        patient_id: &str,
        observed: BloodPressure,
    ) -> Result<(), VitalsServiceError> {
        let (id, profile) = self.fetch_profile(patient_id).await?;
        let baseline = profile.baseline.blood_pressure;

        if observed != baseline {
            debug!(
                patient_id = %id,
                observed = %observed,
                baseline = %baseline,
                "Blood pressure deviates from baseline"
            );
            let alert = VitalsAlert::new(
                id,
                VitalMetric::BloodPressure,
                observed.to_string(),
                baseline.to_string(),
            );
            self.dispatch_alert(alert).await;
        }

        Ok(())
    }

    /// Check an observed body temperature against the patient's baseline.
    ///
    /// A deviation beyond TEMPERATURE_TOLERANCE in either direction raises
    /// exactly one alert; equality never alerts.
    async fn check_temperature(
        &self,
        patient_id: &str,
        observed: f64,
    ) -> Result<(), VitalsServiceError> {
        let (id, profile) = self.fetch_profile(patient_id).await?;
        let baseline = profile.baseline.normal_temperature;

        if (observed - baseline).abs() > TEMPERATURE_TOLERANCE {
            debug!(
                patient_id = %id,
                observed,
                baseline,
                "Temperature deviates from baseline"
            );
            let alert = VitalsAlert::new(
                id,
                VitalMetric::Temperature,
                observed.to_string(),
                baseline.to_string(),
            );
            self.dispatch_alert(alert).await;
        }

        Ok(())
    }
}

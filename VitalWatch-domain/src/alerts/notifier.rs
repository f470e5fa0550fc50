//! Notification handlers for baseline-deviation alerts

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The vital-sign metric a check alerts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalMetric {
    BloodPressure,
    Temperature,
}

impl std::fmt::Display for VitalMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VitalMetric::BloodPressure => write!(f, "blood pressure"),
            VitalMetric::Temperature => write!(f, "temperature"),
        }
    }
}

/// Alert payload describing a reading that deviated from a patient's baseline
#[derive(Debug, Clone, Serialize)]
pub struct VitalsAlert {
    /// The patient whose reading deviated
    pub patient_id: Uuid,

    /// The metric that deviated
    pub metric: VitalMetric,

    /// The observed reading, rendered for the message
    pub observed: String,

    /// The recorded baseline, rendered for the message
    pub baseline: String,

    /// Human-readable alert message
    pub message: String,

    /// When the deviation was detected
    pub triggered_at: DateTime<Utc>,
}

impl VitalsAlert {
    /// Build an alert for a deviated reading
    pub fn new(
        patient_id: Uuid,
        metric: VitalMetric,
        observed: impl Into<String>,
        baseline: impl Into<String>,
    ) -> Self {
        let observed = observed.into();
        let baseline = baseline.into();
        let message = format!(
            "Patient {}: observed {} {} deviates from recorded baseline {}",
            patient_id, metric, observed, baseline
        );

        Self {
            patient_id,
            metric,
            observed,
            baseline,
            message,
            triggered_at: Utc::now(),
        }
    }
}

/// Trait for alert delivery.
///
/// Delivery is fire-and-forget from the checker's perspective; a failed send
/// is logged by the caller and never fails the check.
#[async_trait]
pub trait AlertNotifier {
    /// Deliver an alert
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError>;
}

#[async_trait]
impl<T> AlertNotifier for Arc<T>
where
    T: AlertNotifier + Send + Sync + ?Sized,
{
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError> {
        (**self).send(alert).await
    }
}

/// Notifier that emits alerts to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl AlertNotifier for LogNotifier {
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError> {
        tracing::warn!(
            patient_id = %alert.patient_id,
            metric = %alert.metric,
            "Alert triggered: {}",
            alert.message
        );
        Ok(())
    }
}

/// Notifier that POSTs alerts to a configured webhook
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    headers: HashMap<String, String>,
}

impl WebhookNotifier {
    /// Create a webhook notifier for a target URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Attach an extra header to every delivery
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl AlertNotifier for WebhookNotifier {
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError> {
        let payload = serde_json::json!({
            "patient_id": alert.patient_id,
            "metric": alert.metric,
            "message": alert.message,
            "observed": alert.observed,
            "baseline": alert.baseline,
            "timestamp": alert.triggered_at.to_rfc3339(),
        });

        let mut request = self.client.post(&self.url).json(&payload);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.send().await.map_err(|e| {
            NotifierError::Webhook(format!("Failed to send webhook: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(NotifierError::Webhook(format!(
                "Webhook returned status {}",
                response.status()
            )));
        }

        tracing::debug!(
            patient_id = %alert.patient_id,
            url = %self.url,
            "Webhook notification sent"
        );

        Ok(())
    }
}

/// Notifier errors
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Webhook error: {0}")]
    Webhook(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Create a notifier from environment configuration.
///
/// When ALERT_WEBHOOK_URL is set, alerts are POSTed there; otherwise they go
/// to the log.
pub fn create_notifier_from_env() -> Arc<dyn AlertNotifier + Send + Sync> {
    match std::env::var("ALERT_WEBHOOK_URL") {
        Ok(url) if !url.is_empty() => {
            tracing::info!("Alert delivery configured via webhook: {}", url);
            Arc::new(WebhookNotifier::new(url))
        }
        _ => {
            tracing::info!("Alert delivery configured via log");
            Arc::new(LogNotifier)
        }
    }
}

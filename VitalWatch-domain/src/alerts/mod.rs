//! Alert payloads and delivery for vitals checks

mod notifier;

pub use notifier::{
    create_notifier_from_env, AlertNotifier, LogNotifier, NotifierError, VitalMetric, VitalsAlert,
    WebhookNotifier,
};

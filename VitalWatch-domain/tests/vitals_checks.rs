// Vitals check scenarios over a fixed set of test patients.
//
// Every scenario runs for every patient: readings equal to the recorded
// baseline never alert, deviating readings alert exactly once, and the
// alert count is observed through a notifier test double.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use vital_watch_data::models::patient as stored;
use vital_watch_data::repository::tests::MockPatientRepository;
use vital_watch_domain::alerts::{AlertNotifier, NotifierError, VitalsAlert};
use vital_watch_domain::entities::patient::BloodPressure;
use vital_watch_domain::services::{VitalsService, VitalsServiceError, VitalsServiceTrait};

/// Local stand-in for the alert delivery channel
#[derive(Debug, Default)]
struct CountingNotifier {
    sent: Mutex<Vec<VitalsAlert>>,
}

impl CountingNotifier {
    fn new() -> Self {
        Self::default()
    }

    fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl AlertNotifier for CountingNotifier {
    async fn send(&self, alert: &VitalsAlert) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

fn test_patients() -> Vec<stored::PatientProfile> {
    vec![
        stored::PatientProfile {
            id: "21f89cee-c0ae-4eb9-b291-f0dffd12e16b".to_string(),
            first_name: "Yuri".to_string(),
            last_name: "Sidorov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1981, 2, 26).unwrap(),
            baseline: stored::HealthBaseline {
                normal_temperature: 36.55,
                blood_pressure: stored::BloodPressure::new(120, 80),
            },
        },
        stored::PatientProfile {
            id: "dccdf215-1dfc-4165-979a-f53e0f95d36e".to_string(),
            first_name: "Sergey".to_string(),
            last_name: "Smirnov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1982, 5, 21).unwrap(),
            baseline: stored::HealthBaseline {
                normal_temperature: 36.6,
                blood_pressure: stored::BloodPressure::new(130, 90),
            },
        },
    ]
}

fn service() -> (
    impl VitalsServiceTrait,
    Arc<CountingNotifier>,
) {
    let repository = MockPatientRepository::with_profiles(test_patients());
    let notifier = Arc::new(CountingNotifier::new());
    let service = VitalsService::new(repository, Arc::clone(&notifier));

    (service, notifier)
}

#[tokio::test]
async fn blood_pressure_equal_to_baseline_never_alerts() {
    for patient in test_patients() {
        let (service, notifier) = service();
        let baseline = patient.baseline.blood_pressure;

        service
            .check_blood_pressure(&patient.id, BloodPressure::new(baseline.high, baseline.low))
            .await
            .unwrap();

        assert_eq!(notifier.send_count(), 0, "patient {}", patient.id);
    }
}

#[tokio::test]
async fn temperature_equal_to_baseline_never_alerts() {
    for patient in test_patients() {
        let (service, notifier) = service();

        service
            .check_temperature(&patient.id, patient.baseline.normal_temperature)
            .await
            .unwrap();

        assert_eq!(notifier.send_count(), 0, "patient {}", patient.id);
    }
}

#[tokio::test]
async fn blood_pressure_raised_by_ten_alerts_exactly_once() {
    for patient in test_patients() {
        let (service, notifier) = service();
        let baseline = patient.baseline.blood_pressure;
        let observed = BloodPressure::new(baseline.high + 10, baseline.low + 10);

        service
            .check_blood_pressure(&patient.id, observed)
            .await
            .unwrap();

        assert_eq!(notifier.send_count(), 1, "patient {}", patient.id);
    }
}

#[tokio::test]
async fn temperature_two_degrees_below_baseline_alerts_exactly_once() {
    for patient in test_patients() {
        let (service, notifier) = service();
        let observed = patient.baseline.normal_temperature - 2.0;

        service.check_temperature(&patient.id, observed).await.unwrap();

        assert_eq!(notifier.send_count(), 1, "patient {}", patient.id);
    }
}

#[tokio::test]
async fn unknown_patient_is_reported_and_never_alerts() {
    let (service, notifier) = service();
    let unknown = Uuid::new_v4().to_string();

    let result = service
        .check_blood_pressure(&unknown, BloodPressure::new(120, 80))
        .await;

    assert!(matches!(result, Err(VitalsServiceError::PatientNotFound(_))));
    assert_eq!(notifier.send_count(), 0);
}

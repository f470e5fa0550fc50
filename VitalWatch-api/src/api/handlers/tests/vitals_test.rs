use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::api::routes::create_app;
use super::{get_body_bytes, initialize, json_request};

/// Register a patient with baseline 36.55 / 120-80 and return its id
async fn register_patient(app: &Router) -> String {
    let body = json!({
        "first_name": "Yuri",
        "last_name": "Sidorov",
        "birth_date": "1981-02-26",
        "normal_temperature": 36.55,
        "blood_pressure": { "high": 120, "low": 80 }
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/patients", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_blood_pressure_check_with_matching_reading() {
    initialize();

    let app = create_app();
    let id = register_patient(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/patients/{}/checks/blood-pressure", id),
            json!({ "high": 120, "low": 80 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_blood_pressure_check_with_deviating_reading() {
    initialize();

    let app = create_app();
    let id = register_patient(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/patients/{}/checks/blood-pressure", id),
            json!({ "high": 130, "low": 90 }),
        ))
        .await
        .unwrap();

    // The alert goes through the notifier; the response carries no outcome
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_temperature_check_with_matching_reading() {
    initialize();

    let app = create_app();
    let id = register_patient(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/patients/{}/checks/temperature", id),
            json!({ "temperature": 36.55 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_temperature_check_with_deviating_reading() {
    initialize();

    let app = create_app();
    let id = register_patient(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/patients/{}/checks/temperature", id),
            json!({ "temperature": 34.55 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_check_for_unknown_patient_is_not_found() {
    initialize();

    let app = create_app();

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/patients/{}/checks/temperature", Uuid::new_v4()),
            json!({ "temperature": 36.6 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_slice(&get_body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_check_with_invalid_patient_id_is_bad_request() {
    initialize();

    let app = create_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/patients/not-a-uuid/checks/blood-pressure",
            json!({ "high": 120, "low": 80 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

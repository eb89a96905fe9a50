//! Dashboard and roster routes over the bundled roster and a failing upstream.

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use careboard::patients::{
    patients_router, Patient, PatientFetchError, PatientSource, SamplePatientSource,
};
use serde_json::Value;
use tower::ServiceExt;

struct DownstreamOutage;

impl PatientSource for DownstreamOutage {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Patient>, PatientFetchError>> + Send {
        async {
            Err(PatientFetchError::Status {
                status: 500,
                reason: "Internal Server Error".to_string(),
            })
        }
    }
}

async fn get(router: axum::Router, uri: &str) -> Response {
    router
        .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
        .await
        .expect("route executes")
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn dashboard_renders_the_focus_patient() {
    let router = patients_router(Arc::new(SamplePatientSource), "Jessica Taylor");

    let response = get(router, "/api/v1/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["profile"]["name"], "Jessica Taylor");
    assert_eq!(payload["profile"]["date_of_birth_display"], "August 23, 1996");
    assert_eq!(payload["vitals"]["chart"]["labels"][0], "Oct, 2023");
    assert_eq!(payload["diagnostics"][0]["name"], "Hypertension");
    assert!(payload.get("error").is_none());
}

#[tokio::test]
async fn roster_marks_the_focus_patient_active() {
    let router = patients_router(Arc::new(SamplePatientSource), "Ryan");

    let response = get(router, "/api/v1/patients").await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let roster = payload.as_array().expect("roster array");
    assert_eq!(roster.len(), 6);
    let active: Vec<&str> = roster
        .iter()
        .filter(|entry| entry["is_active"] == Value::Bool(true))
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert_eq!(active, vec!["Ryan Johnson"]);
}

#[tokio::test]
async fn dashboard_degrades_when_the_upstream_fails() {
    let router = patients_router(Arc::new(DownstreamOutage), "Jessica Taylor");

    let response = get(router, "/api/v1/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["profile"].is_null());
    assert_eq!(payload["roster"], Value::Array(Vec::new()));
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("500"));
}

#[tokio::test]
async fn roster_reports_upstream_failures_as_bad_gateway() {
    let router = patients_router(Arc::new(DownstreamOutage), "Jessica Taylor");

    let response = get(router, "/api/v1/patients").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .starts_with("patient data error"));
}

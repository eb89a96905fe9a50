use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use super::domain::{ClinicalInput, PredictionResult};
use super::estimator::ReadmissionEstimator;
use super::presets::Preset;
use super::session::{PredictorSession, PredictorView, SessionError};

/// Raw form post: an optional preset to start from plus field overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormResultView {
    pub view: PredictorView,
    pub input: ClinicalInput,
    pub prediction: PredictionResult,
    pub headline: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresetView {
    pub name: String,
    pub label: &'static str,
    pub input: ClinicalInput,
}

/// Router builder exposing the estimator over HTTP.
pub fn readmission_router(estimator: Arc<ReadmissionEstimator>) -> Router {
    Router::new()
        .route("/api/v1/readmission/predict", post(predict_handler))
        .route("/api/v1/readmission/form", post(form_handler))
        .route("/api/v1/readmission/presets/:name", get(preset_handler))
        .with_state(estimator)
}

pub(crate) async fn predict_handler(
    State(estimator): State<Arc<ReadmissionEstimator>>,
    Json(input): Json<ClinicalInput>,
) -> Json<PredictionResult> {
    let prediction = estimator.estimate(&input);
    log_prediction(&prediction);
    Json(prediction)
}

pub(crate) async fn form_handler(
    State(estimator): State<Arc<ReadmissionEstimator>>,
    Json(submission): Json<FormSubmission>,
) -> Response {
    let today = Local::now().date_naive();
    match run_form(&estimator, submission, today) {
        Ok(view) => {
            log_prediction(&view.prediction);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(FormRejection::Preset(message)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        Err(FormRejection::Session(error)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn preset_handler(Path(name): Path<String>) -> Response {
    match name.parse::<Preset>() {
        Ok(preset) => {
            let view = PresetView {
                name: preset.to_string(),
                label: preset.label(),
                input: preset.input(Local::now().date_naive()),
            };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}

pub(crate) enum FormRejection {
    Preset(String),
    Session(SessionError),
}

pub(crate) fn run_form(
    estimator: &ReadmissionEstimator,
    submission: FormSubmission,
    today: NaiveDate,
) -> Result<FormResultView, FormRejection> {
    let preset = match submission.preset.as_deref() {
        Some(name) => name
            .parse::<Preset>()
            .map_err(|error| FormRejection::Preset(error.to_string()))?,
        None => Preset::HighRisk,
    };

    let mut session = PredictorSession::with_input(estimator.clone(), preset.input(today));
    for (name, value) in &submission.fields {
        session
            .update_field(name, &raw_form_value(value))
            .map_err(FormRejection::Session)?;
    }

    let prediction = session.submit().clone();

    Ok(FormResultView {
        view: session.view(),
        input: session.input().clone(),
        headline: prediction.headline(),
        prediction,
    })
}

fn raw_form_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn log_prediction(prediction: &PredictionResult) {
    info!(
        readmitted = prediction.will_be_readmitted,
        risk_score = prediction.risk_score,
        probability = prediction.probability,
        "readmission estimate computed"
    );
}

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::warn;

use super::client::PatientSource;
use super::dashboard::{DashboardView, RosterEntry};
use crate::error::AppError;

/// Shared state for the dashboard routes.
pub struct PatientsState<S> {
    pub source: Arc<S>,
    pub focus_patient: String,
}

impl<S> Clone for PatientsState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            focus_patient: self.focus_patient.clone(),
        }
    }
}

/// Router builder exposing the roster and the composed dashboard.
pub fn patients_router<S>(source: Arc<S>, focus_patient: impl Into<String>) -> Router
where
    S: PatientSource + 'static,
{
    let state = PatientsState {
        source,
        focus_patient: focus_patient.into(),
    };

    Router::new()
        .route("/api/v1/patients", get(roster_handler::<S>))
        .route("/api/v1/dashboard", get(dashboard_handler::<S>))
        .with_state(state)
}

pub(crate) async fn roster_handler<S>(
    State(state): State<PatientsState<S>>,
) -> Result<Json<Vec<RosterEntry>>, AppError>
where
    S: PatientSource + 'static,
{
    let patients = state.source.fetch_all().await?;
    let view = DashboardView::compose(&patients, &state.focus_patient);
    Ok(Json(view.roster))
}

/// Always answers 200; a failed fetch yields the degraded view.
pub(crate) async fn dashboard_handler<S>(State(state): State<PatientsState<S>>) -> Json<DashboardView>
where
    S: PatientSource + 'static,
{
    let view = match state.source.fetch_all().await {
        Ok(patients) => DashboardView::compose(&patients, &state.focus_patient),
        Err(err) => {
            warn!(error = %err, "patient collection unavailable; rendering empty dashboard");
            DashboardView::unavailable(&state.focus_patient, err.to_string())
        }
    };
    Json(view)
}

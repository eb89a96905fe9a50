use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ClinicalInput, PredictionResult};
use super::estimator::ReadmissionEstimator;
use super::form::FormFieldError;
use super::presets::Preset;

/// Which half of the predictor page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorView {
    Form,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Field(#[from] FormFieldError),
    #[error("the form is not editable while a result is showing")]
    NotEditing,
}

/// Form state for one predictor page: the input being edited and the last result.
///
/// Submitting switches to the result view; resetting goes back to the form
/// with the input intact.
#[derive(Debug, Clone)]
pub struct PredictorSession {
    estimator: ReadmissionEstimator,
    input: ClinicalInput,
    prediction: Option<PredictionResult>,
}

impl PredictorSession {
    /// Opens on the high-risk example, as the page does.
    pub fn new(estimator: ReadmissionEstimator, today: NaiveDate) -> Self {
        Self::with_input(estimator, Preset::HighRisk.input(today))
    }

    pub fn with_input(estimator: ReadmissionEstimator, input: ClinicalInput) -> Self {
        Self {
            estimator,
            input,
            prediction: None,
        }
    }

    pub fn view(&self) -> PredictorView {
        if self.prediction.is_some() {
            PredictorView::Result
        } else {
            PredictorView::Form
        }
    }

    pub fn input(&self) -> &ClinicalInput {
        &self.input
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    /// Swaps in a preset; the selector stays usable in either view.
    pub fn select_preset(&mut self, preset: Preset, today: NaiveDate) {
        self.input = preset.input(today);
    }

    pub fn update_field(&mut self, name: &str, raw: &str) -> Result<(), SessionError> {
        if self.view() != PredictorView::Form {
            return Err(SessionError::NotEditing);
        }
        self.input.apply_field(name, raw)?;
        Ok(())
    }

    pub fn submit(&mut self) -> &PredictionResult {
        let result = self.estimator.estimate(&self.input);
        self.prediction.insert(result)
    }

    pub fn reset(&mut self) {
        self.prediction = None;
    }
}

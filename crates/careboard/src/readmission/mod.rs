//! Rule-based 30-day readmission risk estimator.
//!
//! Scoring, classification, and explanation are pure functions of a
//! [`ClinicalInput`]; the session and router modules are the thin shell that
//! collects form input and renders the outcome.

mod classifier;
pub mod domain;
mod estimator;
mod explanation;
pub mod form;
pub mod presets;
pub mod router;
mod scores;
pub mod session;

#[cfg(test)]
mod tests;

pub use classifier::RiskPolicy;
pub use domain::{
    ClinicalInput, Gender, PredictionResult, RiskFactor, RiskFactorFinding, SeverityScores,
};
pub use estimator::ReadmissionEstimator;
pub use form::FormFieldError;
pub use presets::{Preset, UnknownPreset};
pub use router::{readmission_router, FormSubmission};
pub use session::{PredictorSession, PredictorView, SessionError};

use crate::config::ConfigError;
use crate::patients::PatientFetchError;
use crate::readmission::{FormFieldError, UnknownPreset};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    PatientFetch(PatientFetchError),
    Form(FormFieldError),
    Preset(UnknownPreset),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::PatientFetch(err) => write!(f, "patient data error: {}", err),
            AppError::Form(err) => write!(f, "form error: {}", err),
            AppError::Preset(err) => write!(f, "form error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::PatientFetch(err) => Some(err),
            AppError::Form(err) => Some(err),
            AppError::Preset(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Preset(_) => StatusCode::BAD_REQUEST,
            AppError::Form(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PatientFetch(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PatientFetchError> for AppError {
    fn from(value: PatientFetchError) -> Self {
        Self::PatientFetch(value)
    }
}

impl From<FormFieldError> for AppError {
    fn from(value: FormFieldError) -> Self {
        Self::Form(value)
    }
}

impl From<UnknownPreset> for AppError {
    fn from(value: UnknownPreset) -> Self {
        Self::Preset(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = AppError::from(PatientFetchError::Status {
            status: 503,
            reason: "Service Unavailable".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn form_failures_map_to_client_errors() {
        let form = AppError::from(FormFieldError::UnknownField("shoe_size".to_string()));
        assert_eq!(form.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let preset = AppError::from(UnknownPreset("medium".to_string()));
        assert_eq!(preset.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn listener_failures_are_internal_errors() {
        let err = AppError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address already in use",
        ));
        assert!(err.to_string().starts_with("io error"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

pub mod config;
pub mod error;
pub mod patients;
pub mod readmission;
pub mod telemetry;

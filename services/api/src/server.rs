use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_careboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use careboard::config::AppConfig;
use careboard::error::AppError;
use careboard::patients::ConfiguredPatientSource;
use careboard::readmission::ReadmissionEstimator;
use careboard::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let estimator = Arc::new(ReadmissionEstimator::standard());
    let source = Arc::new(ConfiguredPatientSource::from_config(&config.dashboard));
    info!(source = %source.describe(), focus = %config.dashboard.focus_patient, "patient source configured");

    let app = with_careboard_routes(estimator, source, config.dashboard.focus_patient.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "careboard dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}

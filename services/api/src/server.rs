use crate::cli::ServeArgs;
use crate::infra::{AppState, SharedSource};
use crate::routes::with_directory_routes;
use alumni_directory::config::AppConfig;
use alumni_directory::directory::RosterFile;
use alumni_directory::error::AppError;
use alumni_directory::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(roster) = args.roster.take() {
        config.roster.path = roster;
    }

    telemetry::init(&config.telemetry)?;

    if !config.roster.path.exists() {
        warn!(
            path = %config.roster.path.display(),
            "roster export not found; directory requests will fail until it exists"
        );
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source: SharedSource = Arc::new(RosterFile::new(config.roster.path.clone()));

    let app = with_directory_routes(source)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        roster = %config.roster.path.display(),
        "alumni directory ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

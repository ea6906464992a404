use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_wizard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use permit_wizard::config::AppConfig;
use permit_wizard::error::AppError;
use permit_wizard::telemetry;
use permit_wizard::wizard::HttpDocumentGenerator;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        sample_enabled: config.wizard.sample_enabled,
    };

    let generator = HttpDocumentGenerator::new(&config.generator)?;
    if !generator.health().await {
        warn!(base_url = generator.base_url(), "document generator is not answering health checks");
    }

    let app = with_wizard_routes(config.wizard.validation_mode)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        validation_mode = config.wizard.validation_mode.label(),
        "permit wizard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

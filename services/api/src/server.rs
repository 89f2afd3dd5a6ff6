use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySolicitudRepository};
use crate::routes::with_solicitud_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use podenza::config::AppConfig;
use podenza::error::AppError;
use podenza::telemetry;
use podenza::workflows::solicitudes::SolicitudService;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySolicitudRepository::seeded());
    let solicitud_service = Arc::new(SolicitudService::new(repository));

    let app = with_solicitud_routes(solicitud_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "solicitudes dashboard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

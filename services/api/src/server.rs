use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, CatalogSnapshot};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use rto_audit::config::AppConfig;
use rto_audit::error::AppError;
use rto_audit::telemetry;
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

    let catalog = load_catalog(config.catalog.path.as_deref())?;
    let snapshot = CatalogSnapshot::new(catalog, config.course.clone());
    info!(
        course = %snapshot.course.course_code,
        default_state = %snapshot.course.default_state(),
        providers = snapshot.catalog.len(),
        "provider catalog partitioned"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        data: Arc::new(snapshot),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rto comparison service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

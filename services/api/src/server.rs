use crate::cli::ServeArgs;
use crate::infra::{load_directory, AppState, InMemoryDirectoryStore};
use crate::routes::with_directory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use brokerage::config::AppConfig;
use brokerage::directory::DirectoryService;
use brokerage::error::AppError;
use brokerage::telemetry;
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

    let directory = load_directory(config.data_dir.as_deref())?;
    let store = Arc::new(InMemoryDirectoryStore::new(directory));
    let directory_service = Arc::new(DirectoryService::new(store, config.search.options()));

    let app = with_directory_routes(directory_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        search_limit = config.search.limit,
        "brokerage portal service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

//! Entry point for the translation HTTP server.

use std::process::ExitCode;
use std::sync::OnceLock;

use lingo_bridge::config::{
    ConfigManager,
    LoggingConfig,
    ServerSettings,
};
use lingo_bridge::{
    AppState,
    build_router,
};
use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the file writer flushing until the process exits.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn main() -> ExitCode {
    let manager = match ConfigManager::from_env() {
        Ok(manager) => manager,
        Err(e) => {
            init_tracing(&LoggingConfig::default());
            tracing::error!("Failed to load configuration:\n{e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = manager.into_settings();
    init_tracing(&settings.logging);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.server.worker_threads())
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(&settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Installs logging, keeping the file writer's guard alive for the process.
fn init_tracing(logging: &LoggingConfig) {
    if let Some(guard) = lingo_bridge::logging::init(logging) {
        let _ = LOG_GUARD.set(guard);
    }
}

/// Binds the configured address and serves until the listener fails.
async fn serve(settings: &ServerSettings) -> Result<(), String> {
    let addr = settings.server.socket_addr().map_err(|e| e.to_string())?;
    let state = AppState::from_settings(settings)
        .map_err(|e| format!("Failed to initialise translation provider: {e}"))?;
    tracing::info!(engine = state.service.engine(), "Translation service ready");

    let app = build_router(state, settings.server.allow_any_origin);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await.map_err(|e| format!("Server error: {e}"))
}

use anyhow::{Context, Result};
use report::{config::Config, handler::AppRouter, state::AppState};
use shared::utils::{Telemetry, init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init("report-service", &config.otel_endpoint)
        .context("Failed to initialize telemetry")?;

    let _log_guard = init_logger(telemetry.logger_provider(), "report-service");

    info!("Starting report service initialization...");

    let state = AppState::new().await;

    let served = AppRouter::serve(config.port, state).await;

    if let Err(e) = telemetry.shutdown() {
        error!("Failed to shutdown telemetry: {}", e);
    }

    served?;

    info!("✅ Report service shutdown complete.");

    Ok(())
}

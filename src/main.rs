//! SportsHub backend
//!
//! Main application entry point

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use SportsHub::{
    config::Settings,
    server,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SportsHub::info());

    let address = settings.bind_address();
    let ctx = AppContext::in_memory(settings)?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    server::serve(listener, ctx, server::shutdown_signal()).await?;

    info!("SportsHub has been shut down.");
    Ok(())
}

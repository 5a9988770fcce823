//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the SportsHub application.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{Result, SportsHubError};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer and must live until shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .map_err(|e| SportsHubError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "sportshub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SportsHubError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log activity lifecycle and membership changes
pub fn log_activity_action(activity_id: &str, action: &str, user_id: &str, details: Option<&str>) {
    info!(
        activity_id = activity_id,
        action = action,
        user_id = user_id,
        details = details,
        "Activity action performed"
    );
}

/// Log booking changes
pub fn log_booking_action(booking_id: &str, venue_id: &str, action: &str, user_id: &str) {
    info!(
        booking_id = booking_id,
        venue_id = venue_id,
        action = action,
        user_id = user_id,
        "Booking action performed"
    );
}

/// Log authentication outcomes
pub fn log_auth_event(username: &str, event: &str, success: bool) {
    if success {
        debug!(username = username, event = event, "Authentication event");
    } else {
        warn!(username = username, event = event, "Authentication failed");
    }
}

//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::parse_hour_slot;
use super::Settings;

/// Shortest signing secret accepted when one is configured
pub const MIN_SECRET_LENGTH: usize = 16;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_auth_config(&settings.auth)?;
    validate_cors_config(&settings.cors)?;
    validate_rate_limit_config(&settings.rate_limit)?;
    validate_logging_config(&settings.logging)?;
    validate_venue_config(&settings.venue)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(SportsHubError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(SportsHubError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate authentication configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if !config.jwt_secret.is_empty() && config.jwt_secret.len() < MIN_SECRET_LENGTH {
        return Err(SportsHubError::Config(
            format!("JWT secret must be at least {} characters", MIN_SECRET_LENGTH)
        ));
    }

    if config.token_ttl_hours == 0 {
        return Err(SportsHubError::Config(
            "Token TTL must be greater than 0".to_string()
        ));
    }

    if !(4..=31).contains(&config.bcrypt_cost) {
        return Err(SportsHubError::Config(
            format!("Invalid bcrypt cost: {}. Must be between 4 and 31", config.bcrypt_cost)
        ));
    }

    Ok(())
}

/// Validate CORS configuration
fn validate_cors_config(config: &super::CorsConfig) -> Result<()> {
    if let Some(origin) = config.allowed_origins.iter().find(|o| o.trim().is_empty()) {
        return Err(SportsHubError::Config(
            format!("Invalid CORS origin: {:?}", origin)
        ));
    }

    Ok(())
}

/// Validate rate limit configuration
fn validate_rate_limit_config(config: &super::RateLimitConfig) -> Result<()> {
    if config.requests_per_minute == 0 {
        return Err(SportsHubError::Config(
            "Requests per minute must be greater than 0".to_string()
        ));
    }

    if config.burst == 0 {
        return Err(SportsHubError::Config(
            "Rate limit burst must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SportsHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SportsHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

/// Validate venue defaults
fn validate_venue_config(config: &super::VenueConfig) -> Result<()> {
    for hour in &config.default_hours {
        if parse_hour_slot(hour).is_none() {
            return Err(SportsHubError::Config(
                format!("Invalid default venue hour: {}", hour)
            ));
        }
    }

    Ok(())
}

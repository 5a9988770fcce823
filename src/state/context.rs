//! Application context management
//! 
//! This module builds the context every handler receives as axum state:
//! settings, the wired services and the optional request limiter.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::database::DatabaseService;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Application-wide context containing services and settings
#[derive(Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub services: Arc<ServiceFactory>,
    pub rate_limiter: Option<RateLimitMiddleware>,
    pub started_at: Instant,
}

impl AppContext {
    /// Create a new AppContext from settings and a store
    pub fn new(settings: Settings, database: DatabaseService) -> Result<Self> {
        let services = ServiceFactory::new(&settings, database);
        let rate_limiter = if settings.rate_limit.enabled {
            Some(RateLimitMiddleware::new(&settings.rate_limit)?)
        } else {
            None
        };

        Ok(Self {
            settings: Arc::new(settings),
            services: Arc::new(services),
            rate_limiter,
            started_at: Instant::now(),
        })
    }

    /// Context backed by a fresh in-memory store
    pub fn in_memory(settings: Settings) -> Result<Self> {
        Self::new(settings, DatabaseService::in_memory())
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

//! Rate limiting middleware
//! 
//! This module provides per-client request throttling to prevent abuse
//! of the API.

use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use tracing::{debug, warn};

use crate::config::RateLimitConfig;
use crate::state::AppContext;
use crate::utils::errors::{SportsHubError, Result};

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// Keyed limiter, one bucket per client address
#[derive(Clone)]
pub struct RateLimitMiddleware {
    limiter: Arc<KeyedLimiter>,
}

impl RateLimitMiddleware {
    /// Create a new RateLimitMiddleware instance
    pub fn new(config: &RateLimitConfig) -> Result<Self> {
        let per_minute = NonZeroU32::new(config.requests_per_minute)
            .ok_or_else(|| SportsHubError::Config("Requests per minute must be greater than 0".to_string()))?;
        let burst = NonZeroU32::new(config.burst)
            .ok_or_else(|| SportsHubError::Config("Rate limit burst must be greater than 0".to_string()))?;

        let quota = Quota::per_minute(per_minute).allow_burst(burst);
        Ok(Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        })
    }

    /// Check if a request from `client` is allowed
    pub fn check(&self, client: &str) -> Result<()> {
        self.limiter.check_key(&client.to_string()).map_err(|_| {
            warn!(client = client, "Rate limit exceeded");
            SportsHubError::RateLimitExceeded
        })
    }

    /// Drop buckets that have fully refilled
    pub fn cleanup(&self) {
        self.limiter.retain_recent();
        debug!(tracked_clients = self.limiter.len(), "Rate limiter cleanup completed");
    }

    /// Number of live handles sharing this limiter
    #[cfg(test)]
    pub(crate) fn handle_count(&self) -> usize {
        Arc::strong_count(&self.limiter)
    }
}

/// Reject requests over the per-client quota with a 429 envelope
pub async fn rate_limit(State(ctx): State<AppContext>, request: Request, next: Next) -> Response {
    if let Some(limiter) = &ctx.rate_limiter {
        let client = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if let Err(e) = limiter.check(&client) {
            return e.into_response();
        }
    }

    next.run(request).await
}

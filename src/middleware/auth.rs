//! Authentication middleware
//! 
//! Bearer-token extractor that resolves the caller before a protected
//! handler runs.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use crate::services::{AuthContext, AuthService};
use crate::state::AppContext;
use crate::utils::errors::SportsHubError;

/// Authenticated caller. Rejects with `INVALID_TOKEN` when the header is
/// missing, malformed, expired or names a user that no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl FromRequestParts<AppContext> for AuthUser {
    type Rejection = SportsHubError;

    async fn from_request_parts(parts: &mut Parts, state: &AppContext) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());
        let token = AuthService::parse_bearer(header)?;

        match state.services.user_service.authenticate(token).await {
            Ok(ctx) => Ok(AuthUser(ctx)),
            Err(e) => {
                debug!(error = %e, "Rejected bearer token");
                Err(SportsHubError::InvalidToken)
            }
        }
    }
}

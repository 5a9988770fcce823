//! Authentication service implementation
//! 
//! This service issues and verifies the HS256 bearer tokens that identify
//! callers, and produces the per-request authentication context.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::config::settings::AuthConfig;
use crate::models::User;
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::generate_random_string;

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity of the caller, resolved once per request and passed to services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
    pub username: String,
}

impl AuthContext {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

/// Authentication service for issuing and checking tokens
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(config: &AuthConfig) -> Self {
        let secret = if config.jwt_secret.is_empty() {
            warn!("No JWT secret configured, generating an ephemeral one; tokens will not survive a restart");
            generate_random_string(48)
        } else {
            config.jwt_secret.clone()
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl: Duration::hours(config.token_ttl_hours as i64),
        }
    }

    /// Sign a token for a user
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user.id.clone(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        debug!(user_id = %user.id, "Issued token");
        Ok(token)
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Extract the token from an `Authorization: Bearer <token>` header value
    pub fn parse_bearer(header: Option<&str>) -> Result<&str> {
        let value = header.ok_or(SportsHubError::InvalidToken)?;
        let (scheme, token) = value.trim().split_once(' ').ok_or(SportsHubError::InvalidToken)?;
        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return Err(SportsHubError::InvalidToken);
        }
        Ok(token)
    }

    #[cfg(test)]
    fn with_ttl(config: &AuthConfig, ttl: Duration) -> Self {
        let mut service = Self::new(config);
        service.token_ttl = ttl;
        service
    }
}

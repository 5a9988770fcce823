//! Error handling for SportsHub
//!
//! This module defines the main error type used throughout the application
//! and how it is turned into the uniform `{success, message, code}` envelope
//! returned to API clients.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::models::api::ApiResponse;

/// Main error type for SportsHub application
#[derive(Error, Debug)]
pub enum SportsHubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Phone number is already registered")]
    DuplicatePhone,

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("User does not exist")]
    /// `identifier` is a user id or, on login, the submitted username
    UserNotFound { identifier: String },

    #[error("Incorrect password")]
    BadPassword,

    #[error("Invalid or missing token")]
    InvalidToken,

    #[error("Invalid token: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Activity does not exist")]
    ActivityNotFound { activity_id: String },

    #[error("You have already joined this activity")]
    AlreadyJoined,

    #[error("Activity is full")]
    ActivityFull,

    #[error("You have not joined this activity")]
    NotJoined,

    #[error("Venue does not exist")]
    VenueNotFound { venue_id: String },

    #[error("Venue is currently not available for booking")]
    VenueUnavailable,

    #[error("Start time {start_time} is not an available hour of this venue")]
    StartNotInTemplate { start_time: String },

    #[error("Booking times must be on the hour")]
    NotHourAligned,

    #[error("This time slot is already booked, please choose another time")]
    TimeConflict,

    #[error("Booking does not exist")]
    BookingNotFound { booking_id: String },

    #[error("Comment does not exist")]
    CommentNotFound { comment_id: String },

    #[error("{0}")]
    NotOwner(String),

    #[error("Rate limit exceeded, please slow down")]
    RateLimitExceeded,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SportsHub operations
pub type Result<T> = std::result::Result<T, SportsHubError>;

/// Coarse error taxonomy shared by every variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Authorization,
    Authentication,
    RateLimited,
    Internal,
}

impl SportsHubError {
    /// Get the taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SportsHubError::InvalidInput(_)
            | SportsHubError::VenueUnavailable
            | SportsHubError::StartNotInTemplate { .. }
            | SportsHubError::NotHourAligned
            | SportsHubError::NotJoined => ErrorKind::Validation,
            SportsHubError::UserNotFound { .. }
            | SportsHubError::ActivityNotFound { .. }
            | SportsHubError::VenueNotFound { .. }
            | SportsHubError::BookingNotFound { .. }
            | SportsHubError::CommentNotFound { .. } => ErrorKind::NotFound,
            SportsHubError::DuplicateUsername
            | SportsHubError::DuplicatePhone
            | SportsHubError::DuplicateEmail
            | SportsHubError::AlreadyJoined
            | SportsHubError::ActivityFull
            | SportsHubError::TimeConflict => ErrorKind::Conflict,
            SportsHubError::NotOwner(_) => ErrorKind::Authorization,
            SportsHubError::BadPassword
            | SportsHubError::InvalidToken
            | SportsHubError::Jwt(_) => ErrorKind::Authentication,
            SportsHubError::RateLimitExceeded => ErrorKind::RateLimited,
            SportsHubError::Config(_)
            | SportsHubError::ConfigLoad(_)
            | SportsHubError::PasswordHash(_)
            | SportsHubError::Storage(_)
            | SportsHubError::Io(_)
            | SportsHubError::Serialization(_)
            | SportsHubError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code sent alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            SportsHubError::InvalidInput(_) => "INVALID_INPUT",
            SportsHubError::DuplicateUsername => "DUPLICATE_USERNAME",
            SportsHubError::DuplicatePhone => "DUPLICATE_PHONE",
            SportsHubError::DuplicateEmail => "DUPLICATE_EMAIL",
            SportsHubError::UserNotFound { .. } => "USER_NOT_FOUND",
            SportsHubError::BadPassword => "BAD_PASSWORD",
            SportsHubError::InvalidToken | SportsHubError::Jwt(_) => "INVALID_TOKEN",
            SportsHubError::ActivityNotFound { .. } => "ACTIVITY_NOT_FOUND",
            SportsHubError::AlreadyJoined => "ALREADY_JOINED",
            SportsHubError::ActivityFull => "ACTIVITY_FULL",
            SportsHubError::NotJoined => "NOT_JOINED",
            SportsHubError::VenueNotFound { .. } => "VENUE_NOT_FOUND",
            SportsHubError::VenueUnavailable => "VENUE_UNAVAILABLE",
            SportsHubError::StartNotInTemplate { .. } => "START_NOT_IN_TEMPLATE",
            SportsHubError::NotHourAligned => "NOT_HOUR_ALIGNED",
            SportsHubError::TimeConflict => "TIME_CONFLICT",
            SportsHubError::BookingNotFound { .. } => "BOOKING_NOT_FOUND",
            SportsHubError::CommentNotFound { .. } => "COMMENT_NOT_FOUND",
            SportsHubError::NotOwner(_) => "NOT_OWNER",
            SportsHubError::RateLimitExceeded => "RATE_LIMITED",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self.kind() {
            ErrorKind::Internal => match self {
                SportsHubError::Config(_) | SportsHubError::ConfigLoad(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Error,
            },
            ErrorKind::Authorization | ErrorKind::Authentication | ErrorKind::RateLimited => {
                ErrorSeverity::Warning
            }
            _ => ErrorSeverity::Info,
        }
    }

    /// Message safe to hand to a client
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => "Internal server error, please try again later".to_string(),
            ErrorKind::Authentication if matches!(self, SportsHubError::Jwt(_)) => {
                SportsHubError::InvalidToken.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<JsonRejection> for SportsHubError {
    fn from(rejection: JsonRejection) -> Self {
        SportsHubError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for SportsHubError {
    fn from(rejection: QueryRejection) -> Self {
        SportsHubError::InvalidInput(format!("Invalid query string: {}", rejection.body_text()))
    }
}

/// Domain failures travel as `success: false` envelopes with a 200 status.
/// Only the rate limiter uses a protocol-level code.
impl IntoResponse for SportsHubError {
    fn into_response(self) -> Response {
        match self.severity() {
            ErrorSeverity::Critical | ErrorSeverity::Error => {
                error!(error = %self, code = self.code(), "Request failed")
            }
            ErrorSeverity::Warning => warn!(error = %self, code = self.code(), "Request rejected"),
            ErrorSeverity::Info => debug!(error = %self, code = self.code(), "Request declined"),
        }

        let status = match self.kind() {
            ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::OK,
        };
        let body: ApiResponse<()> = ApiResponse::failure(self.public_message(), self.code());

        (status, Json(body)).into_response()
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

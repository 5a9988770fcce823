//! HTTP handlers module
//!
//! This module contains all REST handlers organized by resource and the
//! router that mounts them under `/api`.

pub mod activities;
pub mod auth;
pub mod bookings;
pub mod comments;
pub mod extract;
pub mod history;
pub mod system;
pub mod venues;

use std::any::Any;
use std::time::Duration;

use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

use crate::config::CorsConfig;
use crate::middleware::{log_requests, rate_limit};
use crate::state::AppContext;
use crate::utils::errors::SportsHubError;

/// Build the full application router
pub fn create_router(ctx: AppContext) -> Router {
    let sports = Router::new()
        .route("/activities", post(activities::create).get(activities::list))
        .route("/activities/search", get(activities::search))
        .route(
            "/activities/{id}",
            get(activities::get).delete(activities::cancel),
        )
        .route("/activities/{id}/join", post(activities::join))
        .route("/activities/{id}/leave", post(activities::leave))
        .route("/activities/{id}/delete", delete(activities::delete))
        .route("/venues", post(venues::create).get(venues::list))
        .route("/venues/search", get(venues::search))
        .route("/venues/{id}", get(venues::get).delete(venues::delete))
        .route("/venues/{id}/status", put(venues::set_status))
        .route("/venues/{id}/bookings", get(venues::availability))
        .route("/bookings", post(bookings::create))
        .route("/bookings/{id}", delete(bookings::cancel))
        .route("/my-bookings", get(bookings::mine))
        .route("/comments", post(comments::create).get(comments::list))
        .route("/comments/{id}", delete(comments::delete))
        .route("/my-activities", get(history::my_activities))
        .route("/my-publications", get(history::my_publications));

    let auth = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/profile", get(auth::profile).put(auth::update_profile));

    let api = Router::new()
        .nest("/auth", auth)
        .nest("/sports", sports)
        .route("/status", get(system::status));

    Router::new()
        .nest("/api", api)
        .layer(from_fn_with_state(ctx.clone(), rate_limit))
        .layer(from_fn(log_requests))
        .layer(cors_layer(&ctx.settings.cors))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(ctx)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "Handler panicked");

    SportsHubError::Internal(detail).into_response()
}

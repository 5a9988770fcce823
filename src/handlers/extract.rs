//! Body and query extractors whose rejections use the failure envelope

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::SportsHubError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(SportsHubError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(SportsHubError))]
pub struct ApiQuery<T>(pub T);

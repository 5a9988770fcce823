//! Service status endpoint

use axum::extract::State;
use serde::Serialize;

use crate::models::ApiResponse;
use crate::state::AppContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub records: serde_json::Value,
}

pub async fn status(State(ctx): State<AppContext>) -> ApiResponse<ServiceStatus> {
    let status = ServiceStatus {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: ctx.uptime_seconds(),
        records: ctx.services.database.stats().await,
    };
    ApiResponse::ok("Service is running", status)
}

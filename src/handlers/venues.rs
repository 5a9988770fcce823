//! Venue handlers

use axum::extract::{Path, State};

use crate::handlers::extract::{ApiJson, ApiQuery};
use crate::middleware::AuthUser;
use crate::models::{ApiResponse, CreateVenueRequest, DateQuery, SearchQuery, UpdateVenueStatusRequest, VenueAvailability, VenueView};
use crate::state::AppContext;
use crate::utils::errors::{SportsHubError, Result};

pub async fn create(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<CreateVenueRequest>,
) -> Result<ApiResponse<VenueView>> {
    let service = &ctx.services.venue_service;
    let venue = service.create(&auth, request).await?;
    Ok(ApiResponse::ok("Venue created", service.view(venue).await?))
}

pub async fn list(State(ctx): State<AppContext>) -> Result<ApiResponse<Vec<VenueView>>> {
    let venues = ctx.services.venue_service.list().await?;
    Ok(ApiResponse::ok("Venues loaded", venues))
}

pub async fn search(
    State(ctx): State<AppContext>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<ApiResponse<Vec<VenueView>>> {
    let venues = ctx.services.venue_service.search(&query.keyword).await?;
    Ok(ApiResponse::ok("Search completed", venues))
}

pub async fn get(State(ctx): State<AppContext>, Path(id): Path<String>) -> Result<ApiResponse<VenueView>> {
    let venue = ctx
        .services
        .venue_service
        .get_by_id(&id)
        .await?
        .ok_or(SportsHubError::VenueNotFound { venue_id: id })?;
    Ok(ApiResponse::ok("Venue loaded", venue))
}

pub async fn delete(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    ctx.services.venue_service.delete(&id, &auth.user_id).await?;
    Ok(ApiResponse::done("Venue deleted"))
}

pub async fn set_status(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateVenueStatusRequest>,
) -> Result<ApiResponse<VenueView>> {
    let service = &ctx.services.venue_service;
    let venue = service.set_status(&id, &auth.user_id, request.status).await?;
    Ok(ApiResponse::ok("Venue status updated", service.view(venue).await?))
}

pub async fn availability(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<DateQuery>,
) -> Result<ApiResponse<VenueAvailability>> {
    let availability = ctx
        .services
        .booking_service
        .get_availability(&id, query.date.as_deref())
        .await?;
    Ok(ApiResponse::ok("Availability loaded", availability))
}

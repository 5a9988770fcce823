//! Activity handlers

use axum::extract::{Path, State};

use crate::handlers::extract::{ApiJson, ApiQuery};
use crate::middleware::AuthUser;
use crate::models::{ActivityView, ApiResponse, CreateActivityRequest, SearchQuery};
use crate::state::AppContext;
use crate::utils::errors::{SportsHubError, Result};

pub async fn create(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<CreateActivityRequest>,
) -> Result<ApiResponse<ActivityView>> {
    let service = &ctx.services.activity_service;
    let activity = service.create(&auth, request).await?;
    Ok(ApiResponse::ok("Activity created", service.view(activity).await?))
}

pub async fn list(State(ctx): State<AppContext>) -> Result<ApiResponse<Vec<ActivityView>>> {
    let activities = ctx.services.activity_service.list().await?;
    Ok(ApiResponse::ok("Activities loaded", activities))
}

pub async fn search(
    State(ctx): State<AppContext>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<ApiResponse<Vec<ActivityView>>> {
    let activities = ctx.services.activity_service.search(&query.keyword).await?;
    Ok(ApiResponse::ok("Search completed", activities))
}

pub async fn get(State(ctx): State<AppContext>, Path(id): Path<String>) -> Result<ApiResponse<ActivityView>> {
    let activity = ctx
        .services
        .activity_service
        .get_by_id(&id)
        .await?
        .ok_or(SportsHubError::ActivityNotFound { activity_id: id })?;
    Ok(ApiResponse::ok("Activity loaded", activity))
}

pub async fn join(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<ActivityView>> {
    let service = &ctx.services.activity_service;
    let activity = service.join(&id, &auth.user_id).await?;
    Ok(ApiResponse::ok("Joined activity", service.view(activity).await?))
}

pub async fn leave(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<ActivityView>> {
    let service = &ctx.services.activity_service;
    let activity = service.leave(&id, &auth.user_id).await?;
    Ok(ApiResponse::ok("Left activity", service.view(activity).await?))
}

pub async fn cancel(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    ctx.services.activity_service.cancel(&id, &auth.user_id).await?;
    Ok(ApiResponse::done("Activity cancelled"))
}

pub async fn delete(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    ctx.services.activity_service.delete(&id, &auth.user_id).await?;
    Ok(ApiResponse::done("Activity deleted"))
}

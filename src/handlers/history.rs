//! Per-user history: joined activities and publications

use axum::extract::State;

use crate::middleware::AuthUser;
use crate::models::{ActivityView, ApiResponse, Publications};
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn my_activities(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
) -> Result<ApiResponse<Vec<ActivityView>>> {
    let activities = ctx.services.activity_service.list_for_user(&auth.user_id).await?;
    Ok(ApiResponse::ok("Activities loaded", activities))
}

pub async fn my_publications(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
) -> Result<ApiResponse<Publications>> {
    let activities = ctx.services.activity_service.list_published_by(&auth.user_id).await?;
    let venues = ctx.services.venue_service.list_published_by(&auth.user_id).await?;
    Ok(ApiResponse::ok("Publications loaded", Publications { activities, venues }))
}

//! Comment handlers

use axum::extract::{Path, State};

use crate::handlers::extract::{ApiJson, ApiQuery};
use crate::middleware::AuthUser;
use crate::models::{ApiResponse, Comment, CommentQuery, CreateCommentRequest};
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn create(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> Result<ApiResponse<Comment>> {
    let comment = ctx.services.comment_service.create(&auth, request).await?;
    Ok(ApiResponse::ok("Comment posted", comment))
}

pub async fn list(
    State(ctx): State<AppContext>,
    ApiQuery(query): ApiQuery<CommentQuery>,
) -> Result<ApiResponse<Vec<Comment>>> {
    let comments = ctx
        .services
        .comment_service
        .list_for(&query.target_id, query.target_type)
        .await?;
    Ok(ApiResponse::ok("Comments loaded", comments))
}

pub async fn delete(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    ctx.services.comment_service.delete(&id, &auth.user_id).await?;
    Ok(ApiResponse::done("Comment deleted"))
}

//! Account handlers: registration, login and profile

use axum::extract::State;

use crate::handlers::extract::ApiJson;
use crate::middleware::AuthUser;
use crate::models::{ApiResponse, LoginResponse, LoginUserRequest, RegisterUserRequest, UpdateUserRequest, User};
use crate::state::AppContext;
use crate::utils::errors::{SportsHubError, Result};

pub async fn register(
    State(ctx): State<AppContext>,
    ApiJson(request): ApiJson<RegisterUserRequest>,
) -> Result<ApiResponse<User>> {
    let user = ctx.services.user_service.register(request).await?;
    Ok(ApiResponse::ok("Registration successful", user))
}

pub async fn login(
    State(ctx): State<AppContext>,
    ApiJson(request): ApiJson<LoginUserRequest>,
) -> Result<ApiResponse<LoginResponse>> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(SportsHubError::InvalidInput("Username and password are required".to_string()));
    }
    let login = ctx.services.user_service.login(&request.username, &request.password).await?;
    Ok(ApiResponse::ok("Login successful", login))
}

/// Tokens are stateless, so there is nothing to revoke
pub async fn logout() -> ApiResponse<()> {
    ApiResponse::done("Logged out")
}

pub async fn profile(State(ctx): State<AppContext>, AuthUser(auth): AuthUser) -> Result<ApiResponse<User>> {
    let user = ctx
        .services
        .user_service
        .get_by_id(&auth.user_id)
        .await?
        .ok_or(SportsHubError::UserNotFound { identifier: auth.user_id })?;
    Ok(ApiResponse::ok("Profile loaded", user))
}

pub async fn update_profile(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<ApiResponse<User>> {
    let user = ctx.services.user_service.update_profile(&auth, request).await?;
    Ok(ApiResponse::ok("Profile updated", user))
}

//! Booking handlers

use axum::extract::{Path, State};

use crate::handlers::extract::ApiJson;
use crate::middleware::AuthUser;
use crate::models::{ApiResponse, Booking, BookingView, CreateBookingRequest};
use crate::state::AppContext;
use crate::utils::errors::Result;

pub async fn create(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    ApiJson(request): ApiJson<CreateBookingRequest>,
) -> Result<ApiResponse<Booking>> {
    let booking = ctx.services.booking_service.create(&auth, request).await?;
    Ok(ApiResponse::ok("Booking confirmed", booking))
}

pub async fn cancel(
    State(ctx): State<AppContext>,
    AuthUser(auth): AuthUser,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>> {
    ctx.services.booking_service.cancel(&id, &auth.user_id).await?;
    Ok(ApiResponse::done("Booking cancelled"))
}

pub async fn mine(State(ctx): State<AppContext>, AuthUser(auth): AuthUser) -> Result<ApiResponse<Vec<BookingView>>> {
    let bookings = ctx.services.booking_service.list_for_user(&auth.user_id).await?;
    Ok(ApiResponse::ok("Bookings loaded", bookings))
}

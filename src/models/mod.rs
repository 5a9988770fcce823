//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod api;
pub mod activity;
pub mod booking;
pub mod comment;
pub mod status;
pub mod user;
pub mod venue;

// Re-export commonly used models
pub use api::{ApiResponse, DateQuery, SearchQuery};
pub use activity::{Activity, ActivityView, CreateActivityRequest, Publications};
pub use booking::{Booking, BookingView, CreateBookingRequest, VenueAvailability};
pub use comment::{Comment, CommentQuery, CreateCommentRequest, TargetType};
pub use status::{ActivityStatus, BookingStatus, DisplayStatus, VenueStatus};
pub use user::{LoginResponse, LoginUserRequest, ParticipantDetail, RegisterUserRequest, UpdateUserRequest, User};
pub use venue::{CreateVenueRequest, UpdateVenueStatusRequest, Venue, VenueSummary, VenueView};

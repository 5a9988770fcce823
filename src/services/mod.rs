//! Services module
//!
//! This module contains business logic services

pub mod activity;
pub mod auth;
pub mod booking;
pub mod comment;
pub mod status;
pub mod user;
pub mod venue;

// Re-export commonly used services
pub use activity::ActivityService;
pub use auth::{AuthContext, AuthService, Claims};
pub use booking::BookingService;
pub use comment::CommentService;
pub use user::UserService;
pub use venue::VenueService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub activity_service: ActivityService,
    pub venue_service: VenueService,
    pub booking_service: BookingService,
    pub comment_service: CommentService,
    pub database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services wired to one store
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        let auth_service = AuthService::new(&settings.auth);
        let user_service = UserService::new(database.users.clone(), auth_service.clone(), settings.auth.bcrypt_cost);
        let activity_service = ActivityService::new(database.activities.clone(), user_service.clone());
        let venue_service = VenueService::new(
            database.venues.clone(),
            database.bookings.clone(),
            settings.venue.default_hours.clone(),
        );
        let booking_service = BookingService::new(database.venues.clone(), database.bookings.clone());
        let comment_service = CommentService::new(database.comments.clone());

        Self {
            auth_service,
            user_service,
            activity_service,
            venue_service,
            booking_service,
            comment_service,
            database,
        }
    }
}

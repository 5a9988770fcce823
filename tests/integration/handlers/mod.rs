//! Handler integration tests
//!
//! One module per resource.

pub mod activities_test;
pub mod auth_test;
pub mod bookings_test;
pub mod comments_test;
pub mod venues_test;

//! Booking model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

use crate::database::Entity;
use crate::models::status::BookingStatus;
use crate::models::venue::VenueSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub user_id: String,
    pub user_name: String,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub total_price: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Whether the booking still holds its time window
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

impl Entity for Booking {
    const KIND: &'static str = "booking";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub venue_id: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub booking_date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

/// A user's booking together with the venue it points at
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub venue: Option<VenueSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAvailability {
    pub venue: VenueSummary,
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
    pub available_slots: Vec<String>,
}

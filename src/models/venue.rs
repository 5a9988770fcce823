//! Venue model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::database::Entity;
use crate::models::status::{DisplayStatus, VenueStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub sport_type: String,
    pub capacity: Option<u32>,
    /// Daily template of bookable one-hour start slots, "HH:00", sorted
    pub available_hours: Vec<String>,
    /// Price per hour
    pub price: Option<f64>,
    pub image: Option<String>,
    pub publisher_id: String,
    pub publisher_name: String,
    pub status: VenueStatus,
    pub bookings: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Venue {
    pub fn offers_hour(&self, hour: &str) -> bool {
        self.available_hours.iter().any(|h| h == hour)
    }

    pub fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.name.to_lowercase().contains(keyword_lower)
            || self.location.to_lowercase().contains(keyword_lower)
            || self.sport_type.to_lowercase().contains(keyword_lower)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(keyword_lower))
    }

    pub fn summary(&self) -> VenueSummary {
        VenueSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            sport_type: self.sport_type.clone(),
            available_hours: self.available_hours.clone(),
            price: self.price,
            status: self.status,
        }
    }
}

impl Entity for Venue {
    const KIND: &'static str = "venue";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sport_type: String,
    pub capacity: Option<i64>,
    pub available_hours: Option<Vec<String>>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVenueStatusRequest {
    pub status: VenueStatus,
}

/// Snapshot of a venue embedded in availability and booking listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSummary {
    pub id: String,
    pub name: String,
    pub location: String,
    pub sport_type: String,
    pub available_hours: Vec<String>,
    pub price: Option<f64>,
    pub status: VenueStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueView {
    #[serde(flatten)]
    pub venue: Venue,
    pub dynamic_status: DisplayStatus,
}

//! Venue service implementation
//! 
//! Owns venue records and their daily hour templates.

use chrono::Utc;
use tracing::{debug, info};
use crate::database::{newest_first, SharedRepository};
use crate::models::{Booking, CreateVenueRequest, Venue, VenueStatus, VenueView};
use crate::services::auth::AuthContext;
use crate::services::status::{venue_status, LocalClock};
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::{format_hour_slot, generate_prefixed_id, parse_hour_slot};

#[derive(Clone)]
pub struct VenueService {
    venues: SharedRepository<Venue>,
    bookings: SharedRepository<Booking>,
    default_hours: Vec<String>,
}

impl VenueService {
    pub fn new(venues: SharedRepository<Venue>, bookings: SharedRepository<Booking>, default_hours: Vec<String>) -> Self {
        Self {
            venues,
            bookings,
            default_hours,
        }
    }

    /// Publish a new venue with the caller as owner
    pub async fn create(&self, auth: &AuthContext, request: CreateVenueRequest) -> Result<Venue> {
        if request.name.trim().is_empty()
            || request.location.trim().is_empty()
            || request.sport_type.trim().is_empty()
        {
            return Err(SportsHubError::InvalidInput(
                "Venue name, location and sport type are required".to_string(),
            ));
        }
        let price = match request.price {
            Some(price) if !price.is_finite() || price < 0.0 => {
                return Err(SportsHubError::InvalidInput("Price must be a non-negative number".to_string()))
            }
            other => other,
        };
        let capacity = match request.capacity {
            Some(capacity) if capacity < 1 || capacity > u32::MAX as i64 => {
                return Err(SportsHubError::InvalidInput("Capacity must be at least 1".to_string()))
            }
            other => other.map(|c| c as u32),
        };
        let available_hours = normalize_hours(request.available_hours.as_deref().unwrap_or(&self.default_hours))?;

        let now = Utc::now();
        let venue = Venue {
            id: generate_prefixed_id("venue"),
            name: request.name,
            description: request.description,
            location: request.location,
            sport_type: request.sport_type,
            capacity,
            available_hours,
            price,
            image: request.image,
            publisher_id: auth.user_id.clone(),
            publisher_name: auth.username.clone(),
            status: VenueStatus::Available,
            bookings: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.venues.write().await.save(venue.clone())?;
        info!(venue_id = %venue.id, user_id = %auth.user_id, "Venue created");
        Ok(venue)
    }

    /// All non-deleted venues, newest first
    pub async fn list(&self) -> Result<Vec<VenueView>> {
        let venues: Vec<Venue> = self
            .venues
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|v| v.status != VenueStatus::Deleted)
            .collect();
        self.views(newest_first(venues)).await
    }

    /// Lookup by id, deleted records included
    pub async fn get_by_id(&self, venue_id: &str) -> Result<Option<VenueView>> {
        let venue = self.venues.read().await.get(venue_id)?;
        match venue {
            Some(venue) => Ok(self.views(vec![venue]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<VenueView>> {
        let all = self.list().await?;
        if keyword.is_empty() {
            return Ok(all);
        }
        let keyword = keyword.to_lowercase();
        debug!(keyword = %keyword, "Searching venues");
        Ok(all.into_iter().filter(|v| v.venue.matches_keyword(&keyword)).collect())
    }

    /// Soft delete, owner only
    pub async fn delete(&self, venue_id: &str, user_id: &str) -> Result<()> {
        let mut venues = self.venues.write().await;
        let mut venue = venues
            .get(venue_id)?
            .ok_or_else(|| SportsHubError::VenueNotFound { venue_id: venue_id.to_string() })?;
        if venue.publisher_id != user_id {
            return Err(SportsHubError::NotOwner("Only the publisher can delete this venue".to_string()));
        }

        venue.status = VenueStatus::Deleted;
        venue.updated_at = Utc::now();
        venues.save(venue)?;
        drop(venues);

        info!(venue_id = %venue_id, user_id = %user_id, "Venue deleted");
        Ok(())
    }

    /// Owner-driven switch between available, maintenance and closed
    pub async fn set_status(&self, venue_id: &str, user_id: &str, status: VenueStatus) -> Result<Venue> {
        if status == VenueStatus::Deleted {
            return Err(SportsHubError::InvalidInput("Use the delete operation to remove a venue".to_string()));
        }

        let mut venues = self.venues.write().await;
        let mut venue = venues
            .get(venue_id)?
            .ok_or_else(|| SportsHubError::VenueNotFound { venue_id: venue_id.to_string() })?;
        if venue.publisher_id != user_id {
            return Err(SportsHubError::NotOwner("Only the publisher can change this venue".to_string()));
        }
        if venue.status == VenueStatus::Deleted {
            return Err(SportsHubError::InvalidInput("A deleted venue cannot be changed".to_string()));
        }

        venue.status = status;
        venue.updated_at = Utc::now();
        venues.save(venue.clone())?;
        drop(venues);

        info!(venue_id = %venue_id, status = ?status, "Venue status changed");
        Ok(venue)
    }

    pub async fn list_published_by(&self, user_id: &str) -> Result<Vec<VenueView>> {
        let venues: Vec<Venue> = self
            .venues
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|v| v.publisher_id == user_id)
            .collect();
        self.views(newest_first(venues)).await
    }

    pub async fn view(&self, venue: Venue) -> Result<VenueView> {
        let clock = LocalClock::now();
        let bookings = self.bookings_on(clock).await?;
        Ok(VenueView {
            dynamic_status: venue_status(&venue, &bookings, clock),
            venue,
        })
    }

    async fn views(&self, venues: Vec<Venue>) -> Result<Vec<VenueView>> {
        let clock = LocalClock::now();
        let bookings = self.bookings_on(clock).await?;
        Ok(venues
            .into_iter()
            .map(|venue| VenueView {
                dynamic_status: venue_status(&venue, &bookings, clock),
                venue,
            })
            .collect())
    }

    async fn bookings_on(&self, clock: LocalClock) -> Result<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .list()?
            .into_iter()
            .filter(|b| b.booking_date == clock.date)
            .collect())
    }
}

/// Validate an hour template, returning it de-duplicated and sorted
pub fn normalize_hours(hours: &[String]) -> Result<Vec<String>> {
    let mut parsed = hours
        .iter()
        .map(|h| {
            parse_hour_slot(h).ok_or_else(|| {
                SportsHubError::InvalidInput(format!("Invalid available hour: {}. Expected HH:00", h))
            })
        })
        .collect::<Result<Vec<u32>>>()?;
    parsed.sort_unstable();
    parsed.dedup();
    Ok(parsed.into_iter().map(format_hour_slot).collect())
}

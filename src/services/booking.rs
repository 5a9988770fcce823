//! Booking service implementation
//! 
//! Conflict-free reservation of venue hours, availability and pricing.

use chrono::{NaiveDate, Utc};
use tracing::debug;
use crate::database::{newest_first, SharedRepository};
use crate::models::{Booking, BookingStatus, BookingView, CreateBookingRequest, Venue, VenueAvailability, VenueStatus};
use crate::services::auth::AuthContext;
use crate::services::status::LocalClock;
use crate::utils::errors::{SportsHubError, Result};
use crate::utils::helpers::{generate_prefixed_id, parse_booking_date, parse_clock};
use crate::utils::logging::log_booking_action;

#[derive(Clone)]
pub struct BookingService {
    venues: SharedRepository<Venue>,
    bookings: SharedRepository<Booking>,
}

/// Half-open interval overlap on minutes since midnight
pub fn overlaps(start: u32, end: u32, other_start: u32, other_end: u32) -> bool {
    start < other_end && end > other_start
}

fn window(booking: &Booking) -> Option<(u32, u32)> {
    Some((parse_clock(&booking.start_time)?, parse_clock(&booking.end_time)?))
}

impl BookingService {
    pub fn new(venues: SharedRepository<Venue>, bookings: SharedRepository<Booking>) -> Self {
        Self { venues, bookings }
    }

    /// Reserve a window at a venue.
    ///
    /// The conflict check, the insert and the venue back-reference happen
    /// under the same pair of write guards.
    pub async fn create(&self, auth: &AuthContext, request: CreateBookingRequest) -> Result<Booking> {
        let mut bookings = self.bookings.write().await;
        let mut venues = self.venues.write().await;

        let mut venue = venues
            .get(&request.venue_id)?
            .ok_or_else(|| SportsHubError::VenueNotFound { venue_id: request.venue_id.clone() })?;
        if venue.status != VenueStatus::Available {
            return Err(SportsHubError::VenueUnavailable);
        }
        if !venue.offers_hour(&request.start_time) {
            return Err(SportsHubError::StartNotInTemplate { start_time: request.start_time });
        }

        let start = parse_clock(&request.start_time)
            .ok_or_else(|| SportsHubError::InvalidInput(format!("Invalid start time: {}", request.start_time)))?;
        let end = parse_clock(&request.end_time)
            .ok_or_else(|| SportsHubError::InvalidInput(format!("Invalid end time: {}", request.end_time)))?;
        if start % 60 != 0 || end % 60 != 0 {
            return Err(SportsHubError::NotHourAligned);
        }
        if end <= start {
            return Err(SportsHubError::InvalidInput("End time must be after start time".to_string()));
        }
        let booking_date = parse_booking_date(&request.booking_date)
            .ok_or_else(|| SportsHubError::InvalidInput(format!("Invalid booking date: {}", request.booking_date)))?;

        let conflict = bookings.list()?.iter().any(|b| {
            b.venue_id == venue.id
                && b.booking_date == booking_date
                && b.is_active()
                && window(b).is_some_and(|(s, e)| overlaps(start, end, s, e))
        });
        if conflict {
            return Err(SportsHubError::TimeConflict);
        }

        let now = Utc::now();
        let booking = Booking {
            id: generate_prefixed_id("booking"),
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            user_id: auth.user_id.clone(),
            user_name: auth.username.clone(),
            booking_date,
            start_time: request.start_time,
            end_time: request.end_time,
            status: BookingStatus::Confirmed,
            total_price: venue.price.map(|price| price * f64::from(end - start) / 60.0),
            created_at: now,
            updated_at: now,
        };

        bookings.save(booking.clone())?;
        venue.bookings.push(booking.id.clone());
        venue.updated_at = now;
        venues.save(venue)?;
        drop(venues);
        drop(bookings);

        log_booking_action(&booking.id, &booking.venue_id, "create", &auth.user_id);
        Ok(booking)
    }

    /// Cancel one of the caller's bookings, freeing its window
    pub async fn cancel(&self, booking_id: &str, user_id: &str) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        let mut booking = bookings
            .get(booking_id)?
            .ok_or_else(|| SportsHubError::BookingNotFound { booking_id: booking_id.to_string() })?;
        if booking.user_id != user_id {
            return Err(SportsHubError::NotOwner("You can only cancel your own bookings".to_string()));
        }

        booking.status = BookingStatus::Cancelled;
        booking.updated_at = Utc::now();
        let venue_id = booking.venue_id.clone();
        bookings.save(booking)?;
        drop(bookings);

        log_booking_action(booking_id, &venue_id, "cancel", user_id);
        Ok(())
    }

    /// Bookings and free template hours of a venue on a date (today when omitted)
    pub async fn get_availability(&self, venue_id: &str, date: Option<&str>) -> Result<VenueAvailability> {
        let date = match date.map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => parse_booking_date(raw)
                .ok_or_else(|| SportsHubError::InvalidInput(format!("Invalid date: {}", raw)))?,
            None => LocalClock::now().date,
        };
        self.availability_on(venue_id, date).await
    }

    async fn availability_on(&self, venue_id: &str, date: NaiveDate) -> Result<VenueAvailability> {
        let bookings = self.bookings.read().await;
        let venues = self.venues.read().await;
        let venue = venues
            .get(venue_id)?
            .ok_or_else(|| SportsHubError::VenueNotFound { venue_id: venue_id.to_string() })?;

        let mut day: Vec<(u32, Booking)> = bookings
            .list()?
            .into_iter()
            .filter(|b| b.venue_id == venue_id && b.booking_date == date && b.is_active())
            .filter_map(|b| Some((parse_clock(&b.start_time)?, b)))
            .collect();
        drop(venues);
        drop(bookings);
        day.sort_by_key(|(start, _)| *start);

        let windows: Vec<(u32, u32)> = day.iter().filter_map(|(_, b)| window(b)).collect();
        let available_slots = venue
            .available_hours
            .iter()
            .filter(|slot| {
                parse_clock(slot).is_some_and(|m| !windows.iter().any(|&(s, e)| m >= s && m < e))
            })
            .cloned()
            .collect();

        debug!(venue_id = %venue_id, date = %date, booked = day.len(), "Computed availability");
        Ok(VenueAvailability {
            venue: venue.summary(),
            date,
            bookings: day.into_iter().map(|(_, b)| b).collect(),
            available_slots,
        })
    }

    /// The user's bookings, newest first, each with a snapshot of its venue
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<BookingView>> {
        let bookings = self.bookings.read().await;
        let venues = self.venues.read().await;

        let mine: Vec<Booking> = bookings.list()?.into_iter().filter(|b| b.user_id == user_id).collect();
        newest_first(mine)
            .into_iter()
            .map(|booking| {
                let venue = venues.get(&booking.venue_id)?.map(|v| v.summary());
                Ok(BookingView { booking, venue })
            })
            .collect()
    }
}

//! Read-time status derivation for activities and venues.
//!
//! Nothing computed here is ever written back to storage.

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};

use crate::models::{Activity, Booking, BookingStatus, DisplayStatus, Venue};
use crate::utils::helpers::parse_clock;

/// Wall-clock view used for venue derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    pub date: NaiveDate,
    /// Minutes since local midnight
    pub minute_of_day: u32,
}

impl LocalClock {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            minute_of_day: now.hour() * 60 + now.minute(),
        }
    }
}

pub fn activity_status(activity: &Activity, now: DateTime<Utc>) -> DisplayStatus {
    if activity.status.is_terminal() {
        return activity.status.into();
    }
    if now > activity.end_time {
        return DisplayStatus::Expired;
    }
    activity.status.into()
}

/// Derive a venue's status for `clock.date` from its template and that day's bookings.
///
/// `bookings` may contain records for any venue or date; only confirmed
/// bookings for this venue on the clock's date count.
pub fn venue_status(venue: &Venue, bookings: &[Booking], clock: LocalClock) -> DisplayStatus {
    if venue.status.is_terminal() {
        return venue.status.into();
    }
    if venue.available_hours.is_empty() {
        return DisplayStatus::Available;
    }

    let booked: Vec<(u32, u32)> = bookings
        .iter()
        .filter(|b| {
            b.venue_id == venue.id
                && b.booking_date == clock.date
                && b.status == BookingStatus::Confirmed
        })
        .filter_map(|b| Some((parse_clock(&b.start_time)?, parse_clock(&b.end_time)?)))
        .collect();

    let mut any_open = false;
    let mut booked_upcoming = false;
    for slot in venue.available_hours.iter().filter_map(|h| parse_clock(h)) {
        let passed = slot <= clock.minute_of_day;
        let is_booked = booked.iter().any(|&(start, end)| slot >= start && slot < end);
        if !passed && !is_booked {
            any_open = true;
            break;
        }
        if is_booked && !passed {
            booked_upcoming = true;
        }
    }

    if any_open {
        DisplayStatus::Available
    } else if booked_upcoming {
        DisplayStatus::FullyBooked
    } else {
        DisplayStatus::Expired
    }
}

//! Stored lifecycle statuses and the read-time display status

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Recruiting,
    Full,
    Ongoing,
    Completed,
    Cancelled,
    Deleted,
}

impl ActivityStatus {
    /// Statuses no membership change or clock tick can move away from
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActivityStatus::Completed | ActivityStatus::Cancelled | ActivityStatus::Deleted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    Available,
    Maintenance,
    Closed,
    Deleted,
}

impl VenueStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VenueStatus::Available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Presentation status computed from stored status and the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    Recruiting,
    Full,
    Ongoing,
    Completed,
    Cancelled,
    Deleted,
    Available,
    Maintenance,
    Closed,
    FullyBooked,
    Expired,
}

impl From<ActivityStatus> for DisplayStatus {
    fn from(status: ActivityStatus) -> Self {
        match status {
            ActivityStatus::Recruiting => DisplayStatus::Recruiting,
            ActivityStatus::Full => DisplayStatus::Full,
            ActivityStatus::Ongoing => DisplayStatus::Ongoing,
            ActivityStatus::Completed => DisplayStatus::Completed,
            ActivityStatus::Cancelled => DisplayStatus::Cancelled,
            ActivityStatus::Deleted => DisplayStatus::Deleted,
        }
    }
}

impl From<VenueStatus> for DisplayStatus {
    fn from(status: VenueStatus) -> Self {
        match status {
            VenueStatus::Available => DisplayStatus::Available,
            VenueStatus::Maintenance => DisplayStatus::Maintenance,
            VenueStatus::Closed => DisplayStatus::Closed,
            VenueStatus::Deleted => DisplayStatus::Deleted,
        }
    }
}

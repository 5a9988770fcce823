//! Test data helpers for building request payloads

use chrono::{Duration, Utc};
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use serde_json::{json, Value};

/// A username that is unique enough for one test run and within length limits
pub fn unique_username() -> String {
    format!("u{}", (100_000u32..999_999).fake::<u32>())
}

pub fn register_body(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

/// Activity starting tomorrow and lasting two hours
pub fn activity_body(name: &str, max_participants: i64) -> Value {
    let start = Utc::now() + Duration::days(1);
    json!({
        "name": name,
        "description": Sentence(3..6).fake::<String>(),
        "location": format!("{} park", Word().fake::<String>()),
        "startTime": start.to_rfc3339(),
        "endTime": (start + Duration::hours(2)).to_rfc3339(),
        "maxParticipants": max_participants,
    })
}

pub fn venue_body(name: &str, hours: &[&str], price: f64) -> Value {
    json!({
        "name": name,
        "description": Sentence(3..6).fake::<String>(),
        "location": "Sports centre",
        "sportType": "badminton",
        "availableHours": hours,
        "price": price,
    })
}

pub fn booking_body(venue_id: &str, date: &str, start: &str, end: &str) -> Value {
    json!({
        "venueId": venue_id,
        "bookingDate": date,
        "startTime": start,
        "endTime": end,
    })
}

pub fn comment_body(target_id: &str, target_type: &str, content: &str) -> Value {
    json!({
        "targetId": target_id,
        "targetType": target_type,
        "content": content,
    })
}

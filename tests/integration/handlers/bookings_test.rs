//! Booking and availability endpoint tests

use crate::helpers::{booking_body, venue_body};
use crate::integration::{assert_failure, assert_success, setup_integration_test};

const DAY: &str = "2030-05-20";

#[tokio::test]
async fn test_pricing_conflict_and_availability() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;
    let (_, alice) = ctx.signed_in_user("alice").await;
    let (_, bruno) = ctx.signed_in_user("bruno").await;

    let venue = assert_success(&ctx.post("/sports/venues", &venue_body("Court A", &["14:00", "15:00"], 20.0), Some(&owner)).await);
    let venue_id = venue["id"].as_str().unwrap().to_string();

    let first = assert_success(&ctx.post("/sports/bookings", &booking_body(&venue_id, DAY, "14:00", "15:00"), Some(&alice)).await);
    assert_eq!(first["totalPrice"], 20.0);
    assert_eq!(first["status"], "confirmed");
    assert_eq!(first["bookingDate"], DAY);

    let conflict = ctx.post("/sports/bookings", &booking_body(&venue_id, DAY, "14:00", "15:00"), Some(&bruno)).await;
    assert_failure(&conflict, "TIME_CONFLICT");

    let second = assert_success(&ctx.post("/sports/bookings", &booking_body(&venue_id, DAY, "15:00", "16:00"), Some(&bruno)).await);
    assert_eq!(second["totalPrice"], 20.0);

    let availability = assert_success(&ctx.get(&format!("/sports/venues/{}/bookings?date={}", venue_id, DAY), None).await);
    assert_eq!(availability["bookings"].as_array().unwrap().len(), 2);
    assert!(availability["availableSlots"].as_array().unwrap().is_empty());
    assert_eq!(availability["venue"]["name"], "Court A");

    // Cancelling frees the slot again
    let booking_id = first["id"].as_str().unwrap();
    assert_failure(&ctx.delete(&format!("/sports/bookings/{}", booking_id), Some(&bruno)).await, "NOT_OWNER");
    assert_success(&ctx.delete(&format!("/sports/bookings/{}", booking_id), Some(&alice)).await);

    let availability = assert_success(&ctx.get(&format!("/sports/venues/{}/bookings?date={}", venue_id, DAY), None).await);
    assert_eq!(availability["availableSlots"], serde_json::json!(["14:00"]));
}

#[tokio::test]
async fn test_rejected_bookings_create_nothing() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;
    let (_, alice) = ctx.signed_in_user("alice").await;

    let venue = assert_success(&ctx.post("/sports/venues", &venue_body("Court C", &["10:00"], 12.0), Some(&owner)).await);
    let venue_id = venue["id"].as_str().unwrap().to_string();

    let off_template = ctx.post("/sports/bookings", &booking_body(&venue_id, DAY, "11:00", "12:00"), Some(&alice)).await;
    assert_failure(&off_template, "START_NOT_IN_TEMPLATE");

    let misaligned = ctx.post("/sports/bookings", &booking_body(&venue_id, DAY, "10:00", "10:30"), Some(&alice)).await;
    assert_failure(&misaligned, "NOT_HOUR_ALIGNED");

    let missing = ctx.post("/sports/bookings", &booking_body("venue_missing", DAY, "10:00", "11:00"), Some(&alice)).await;
    assert_failure(&missing, "VENUE_NOT_FOUND");

    let mine = assert_success(&ctx.get("/sports/my-bookings", Some(&alice)).await);
    assert!(mine.as_array().unwrap().is_empty());
    let availability = assert_success(&ctx.get(&format!("/sports/venues/{}/bookings?date={}", venue_id, DAY), None).await);
    assert!(availability["bookings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_my_bookings_carry_venue_snapshot() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;
    let (_, alice) = ctx.signed_in_user("alice").await;

    let venue = assert_success(&ctx.post("/sports/venues", &venue_body("Court D", &["08:00"], 8.0), Some(&owner)).await);
    let venue_id = venue["id"].as_str().unwrap().to_string();
    ctx.post("/sports/bookings", &booking_body(&venue_id, "2030-05-20T08:00:00+08:00", "08:00", "10:00"), Some(&alice))
        .await;

    let mine = assert_success(&ctx.get("/sports/my-bookings", Some(&alice)).await);
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["totalPrice"], 16.0);
    assert_eq!(mine[0]["bookingDate"], DAY);
    assert_eq!(mine[0]["venue"]["id"], venue_id.as_str());
    assert_eq!(mine[0]["venue"]["sportType"], "badminton");
}

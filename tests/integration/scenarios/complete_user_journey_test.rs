//! A user's journey across publishing, joining, booking and history

use serde_json::json;

use crate::helpers::{activity_body, booking_body, comment_body, unique_username, venue_body};
use crate::integration::{assert_success, setup_integration_test};

#[tokio::test]
async fn test_complete_user_journey() {
    let ctx = setup_integration_test().await;
    let organiser_name = unique_username();
    let (organiser_id, organiser) = ctx.signed_in_user(&organiser_name).await;
    let (_, player) = ctx.signed_in_user("player").await;

    let activity = assert_success(&ctx.post("/sports/activities", &activity_body("Sunday football", 10), Some(&organiser)).await);
    let activity_id = activity["id"].as_str().unwrap().to_string();
    assert_eq!(activity["publisherId"], organiser_id.as_str());
    assert_eq!(activity["publisherName"], organiser_name.as_str());

    let venue = assert_success(&ctx.post("/sports/venues", &venue_body("Field 3", &["09:00", "10:00"], 50.0), Some(&organiser)).await);
    let venue_id = venue["id"].as_str().unwrap().to_string();

    assert_success(&ctx.post(&format!("/sports/activities/{}/join", activity_id), &json!({}), Some(&player)).await);
    assert_success(&ctx.post("/sports/bookings", &booking_body(&venue_id, "2030-01-05", "09:00", "11:00"), Some(&player)).await);
    assert_success(&ctx.post("/sports/comments", &comment_body(&activity_id, "activity", "Count me in"), Some(&player)).await);

    let joined = assert_success(&ctx.get("/sports/my-activities", Some(&player)).await);
    assert_eq!(joined.as_array().unwrap().len(), 1);
    assert_eq!(joined[0]["id"], activity_id.as_str());

    let published = assert_success(&ctx.get("/sports/my-publications", Some(&organiser)).await);
    assert_eq!(published["activities"].as_array().unwrap().len(), 1);
    assert_eq!(published["venues"].as_array().unwrap().len(), 1);

    let venue = assert_success(&ctx.get(&format!("/sports/venues/{}", venue_id), None).await);
    assert_eq!(venue["bookings"].as_array().unwrap().len(), 1);

    let detail = assert_success(&ctx.get(&format!("/sports/activities/{}", activity_id), None).await);
    assert_eq!(detail["currentParticipants"], 1);
    assert_eq!(detail["participantDetails"][0]["username"], "player");
}

//! Venue endpoint tests

use serde_json::json;

use crate::helpers::venue_body;
use crate::integration::{assert_failure, assert_success, setup_integration_test};

#[tokio::test]
async fn test_create_with_default_hours() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;

    let body = json!({"name": "Pool", "location": "Aquatics", "sportType": "swimming"});
    let venue = assert_success(&ctx.post("/sports/venues", &body, Some(&owner)).await);
    assert_eq!(venue["availableHours"].as_array().unwrap().len(), 9);
    assert_eq!(venue["availableHours"][0], "09:00");
    assert_eq!(venue["status"], "available");

    let bad = ctx.post("/sports/venues", &venue_body("Court", &["9:30"], 10.0), Some(&owner)).await;
    assert_failure(&bad, "INVALID_INPUT");
}

#[tokio::test]
async fn test_owner_status_changes_and_delete() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;
    let (_, other) = ctx.signed_in_user("other").await;

    let venue = assert_success(&ctx.post("/sports/venues", &venue_body("Court B", &["10:00"], 15.0), Some(&owner)).await);
    let id = venue["id"].as_str().unwrap().to_string();

    let denied = ctx.put(&format!("/sports/venues/{}/status", id), &json!({"status": "closed"}), Some(&other)).await;
    assert_failure(&denied, "NOT_OWNER");

    let closed = assert_success(
        &ctx.put(&format!("/sports/venues/{}/status", id), &json!({"status": "maintenance"}), Some(&owner)).await,
    );
    assert_eq!(closed["dynamicStatus"], "maintenance");

    assert_failure(&ctx.delete(&format!("/sports/venues/{}", id), Some(&other)).await, "NOT_OWNER");
    assert_success(&ctx.delete(&format!("/sports/venues/{}", id), Some(&owner)).await);

    let listed = assert_success(&ctx.get("/sports/venues", None).await);
    assert!(listed.as_array().unwrap().is_empty());
    let fetched = assert_success(&ctx.get(&format!("/sports/venues/{}", id), None).await);
    assert_eq!(fetched["status"], "deleted");
}

#[tokio::test]
async fn test_search_by_sport_type() {
    let ctx = setup_integration_test().await;
    let (_, owner) = ctx.signed_in_user("owner").await;
    ctx.post("/sports/venues", &venue_body("Hall 1", &["10:00"], 15.0), Some(&owner)).await;

    let found = assert_success(&ctx.get("/sports/venues/search?keyword=BADMINTON", None).await);
    assert_eq!(found.as_array().unwrap().len(), 1);
    let none = assert_success(&ctx.get("/sports/venues/search?keyword=curling", None).await);
    assert!(none.as_array().unwrap().is_empty());
}

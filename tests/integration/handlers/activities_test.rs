//! Activity endpoint tests

use serde_json::json;

use crate::helpers::activity_body;
use crate::integration::{assert_failure, assert_success, setup_integration_test};

#[tokio::test]
async fn test_single_seat_activity() {
    let ctx = setup_integration_test().await;
    let (_, publisher) = ctx.signed_in_user("publisher").await;
    let (a_id, a) = ctx.signed_in_user("alice").await;
    let (b_id, b) = ctx.signed_in_user("bruno").await;

    let created = assert_success(&ctx.post("/sports/activities", &activity_body("Squash", 1), Some(&publisher)).await);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("activity_"));
    assert_eq!(created["status"], "recruiting");
    assert_eq!(created["currentParticipants"], 0);

    let joined = assert_success(&ctx.post(&format!("/sports/activities/{}/join", id), &json!({}), Some(&a)).await);
    assert_eq!(joined["status"], "full");
    assert_eq!(joined["participantDetails"][0]["username"], "alice");

    let full = ctx.post(&format!("/sports/activities/{}/join", id), &json!({}), Some(&b)).await;
    assert_failure(&full, "ACTIVITY_FULL");

    let left = assert_success(&ctx.post(&format!("/sports/activities/{}/leave", id), &json!({}), Some(&a)).await);
    assert_eq!(left["status"], "recruiting");

    let joined = assert_success(&ctx.post(&format!("/sports/activities/{}/join", id), &json!({}), Some(&b)).await);
    assert_eq!(joined["participants"], json!([b_id]));
    assert_ne!(joined["participants"], json!([a_id]));
}

#[tokio::test]
async fn test_cancel_and_delete_are_publisher_only() {
    let ctx = setup_integration_test().await;
    let (_, publisher) = ctx.signed_in_user("publisher").await;
    let (_, other) = ctx.signed_in_user("other").await;

    let created = assert_success(&ctx.post("/sports/activities", &activity_body("Yoga", 5), Some(&publisher)).await);
    let id = created["id"].as_str().unwrap().to_string();

    assert_failure(&ctx.delete(&format!("/sports/activities/{}", id), Some(&other)).await, "NOT_OWNER");
    assert_failure(&ctx.delete(&format!("/sports/activities/{}/delete", id), Some(&other)).await, "NOT_OWNER");

    assert_success(&ctx.delete(&format!("/sports/activities/{}/delete", id), Some(&publisher)).await);
    let listed = assert_success(&ctx.get("/sports/activities", None).await);
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let fetched = assert_success(&ctx.get(&format!("/sports/activities/{}", id), None).await);
    assert_eq!(fetched["status"], "deleted");
    assert_eq!(fetched["dynamicStatus"], "deleted");
}

#[tokio::test]
async fn test_search_and_missing() {
    let ctx = setup_integration_test().await;
    let (_, publisher) = ctx.signed_in_user("publisher").await;
    ctx.post("/sports/activities", &activity_body("Evening Tennis", 4), Some(&publisher)).await;
    ctx.post("/sports/activities", &activity_body("Chess club", 4), Some(&publisher)).await;

    let found = assert_success(&ctx.get("/sports/activities/search?keyword=tennis", None).await);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["name"], "Evening Tennis");

    let all = assert_success(&ctx.get("/sports/activities/search?keyword=", None).await);
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["name"], "Chess club");

    assert_failure(&ctx.get("/sports/activities/activity_missing", None).await, "ACTIVITY_NOT_FOUND");
}

#[tokio::test]
async fn test_create_with_datetime_local_times() {
    let ctx = setup_integration_test().await;
    let (_, token) = ctx.signed_in_user("publisher").await;

    let body = json!({
        "name": "Morning run",
        "location": "Riverside park",
        "startTime": "2030-06-01T10:00",
        "endTime": "2030-06-01T12:00",
        "maxParticipants": 5,
    });
    let created = assert_success(&ctx.post("/sports/activities", &body, Some(&token)).await);
    assert_eq!(created["status"], "recruiting");

    let start = chrono::DateTime::parse_from_rfc3339(created["startTime"].as_str().unwrap()).unwrap();
    let end = chrono::DateTime::parse_from_rfc3339(created["endTime"].as_str().unwrap()).unwrap();
    assert_eq!(end - start, chrono::Duration::hours(2));
    assert_eq!(
        start.with_timezone(&chrono::Local).format("%Y-%m-%dT%H:%M").to_string(),
        "2030-06-01T10:00"
    );
}

#[tokio::test]
async fn test_malformed_body_uses_envelope() {
    let ctx = setup_integration_test().await;
    let (_, token) = ctx.signed_in_user("publisher").await;

    let response = ctx
        .client
        .post(ctx.url("/sports/activities"))
        .bearer_auth(&token)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_failure(&body, "INVALID_INPUT");

    let zero = ctx.post("/sports/activities", &activity_body("Nobody", 0), Some(&token)).await;
    assert_failure(&zero, "INVALID_INPUT");
}

//! Comment endpoint tests

use crate::helpers::comment_body;
use crate::integration::{assert_failure, assert_success, setup_integration_test};

#[tokio::test]
async fn test_comment_ownership() {
    let ctx = setup_integration_test().await;
    let (_, u1) = ctx.signed_in_user("writer").await;
    let (_, u2) = ctx.signed_in_user("reader").await;

    let comment = assert_success(&ctx.post("/sports/comments", &comment_body("activity_x", "activity", "See you there"), Some(&u1)).await);
    let id = comment["id"].as_str().unwrap().to_string();
    assert_eq!(comment["userName"], "writer");

    assert_failure(&ctx.delete(&format!("/sports/comments/{}", id), Some(&u2)).await, "NOT_OWNER");
    let listed = assert_success(&ctx.get("/sports/comments?targetId=activity_x&targetType=activity", None).await);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    assert_success(&ctx.delete(&format!("/sports/comments/{}", id), Some(&u1)).await);
    let listed = assert_success(&ctx.get("/sports/comments?targetId=activity_x&targetType=activity", None).await);
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_validation() {
    let ctx = setup_integration_test().await;
    let (_, token) = ctx.signed_in_user("writer").await;

    let empty = ctx.post("/sports/comments", &comment_body("venue_x", "venue", "  "), Some(&token)).await;
    assert_failure(&empty, "INVALID_INPUT");

    let missing_query = ctx.get("/sports/comments?targetId=venue_x", None).await;
    assert_failure(&missing_query, "INVALID_INPUT");
}

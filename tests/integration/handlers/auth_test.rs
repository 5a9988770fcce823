//! Account endpoint tests

use serde_json::json;

use crate::integration::{assert_failure, assert_success, setup_integration_test};

#[tokio::test]
async fn test_register_login_profile() {
    let ctx = setup_integration_test().await;

    let user = ctx.register("bob", "secret1").await;
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password").is_none());

    let duplicate = ctx.post("/auth/register", &json!({"username": "bob", "password": "other12"}), None).await;
    assert_failure(&duplicate, "DUPLICATE_USERNAME");

    let wrong = ctx.post("/auth/login", &json!({"username": "bob", "password": "wrong"}), None).await;
    assert_failure(&wrong, "BAD_PASSWORD");

    let token = ctx.login("bob", "secret1").await;
    let profile = assert_success(&ctx.get("/auth/profile", Some(&token)).await);
    assert_eq!(profile["username"], "bob");
    assert_eq!(profile["id"], user["id"]);
}

#[tokio::test]
async fn test_registration_validation() {
    let ctx = setup_integration_test().await;

    let short = ctx.post("/auth/register", &json!({"username": "al", "password": "secret1"}), None).await;
    assert_failure(&short, "INVALID_INPUT");

    let phone = ctx
        .post(
            "/auth/register",
            &json!({"username": "alice", "password": "secret1", "phone": "10000000000"}),
            None,
        )
        .await;
    assert_failure(&phone, "INVALID_INPUT");

    let ok = ctx
        .post(
            "/auth/register",
            &json!({"username": "alice", "password": "secret1", "phone": "13912345678", "email": "alice@example.com"}),
            None,
        )
        .await;
    assert_success(&ok);

    let same_phone = ctx
        .post(
            "/auth/register",
            &json!({"username": "alicia", "password": "secret1", "phone": "13912345678"}),
            None,
        )
        .await;
    assert_failure(&same_phone, "DUPLICATE_PHONE");
}

#[tokio::test]
async fn test_protected_routes_need_valid_token() {
    let ctx = setup_integration_test().await;

    assert_failure(&ctx.get("/auth/profile", None).await, "INVALID_TOKEN");
    assert_failure(&ctx.get("/auth/profile", Some("garbage")).await, "INVALID_TOKEN");

    let response = ctx
        .client
        .get(ctx.url("/auth/profile"))
        .header("Authorization", "Token abc")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_failure(&body, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_update_profile() {
    let ctx = setup_integration_test().await;
    let (_, token) = ctx.signed_in_user("carol").await;
    ctx.register("dave", "secret1").await;

    let taken = ctx.put("/auth/profile", &json!({"username": "dave"}), Some(&token)).await;
    assert_failure(&taken, "DUPLICATE_USERNAME");

    let updated = assert_success(
        &ctx.put("/auth/profile", &json!({"bio": "likes tennis", "gender": "female"}), Some(&token)).await,
    );
    assert_eq!(updated["bio"], "likes tennis");
    assert_eq!(updated["username"], "carol");
}

#[tokio::test]
async fn test_logout_is_stateless() {
    let ctx = setup_integration_test().await;
    let (_, token) = ctx.signed_in_user("erin").await;

    assert_success(&ctx.post("/auth/logout", &json!({}), Some(&token)).await);
    // The token keeps working until it expires
    assert_success(&ctx.get("/auth/profile", Some(&token)).await);
}

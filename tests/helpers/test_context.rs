//! Test context for unified test setup
//! 
//! Starts the real router on `127.0.0.1:0` backed by a fresh in-memory store
//! and exposes a small JSON client for it.

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use SportsHub::config::Settings;
use SportsHub::server;
use SportsHub::state::AppContext;

/// Settings tuned for fast, isolated tests
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.server.host = "127.0.0.1".to_string();
    settings.auth.jwt_secret = "integration-test-signing-secret".to_string();
    settings.auth.bcrypt_cost = 4;
    settings.rate_limit.enabled = false;
    settings.logging.level = "debug".to_string();
    settings
}

/// A running server plus an HTTP client pointed at it
pub struct TestContext {
    pub base_url: String,
    pub client: reqwest::Client,
    pub settings: Settings,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestContext {
    /// Create a new test context with default test settings
    pub async fn new() -> Self {
        Self::with_settings(test_settings()).await
    }

    /// Create a new test context with custom settings
    pub async fn with_settings(settings: Settings) -> Self {
        let _ = tracing_subscriber::fmt().with_env_filter("debug").with_test_writer().try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        let ctx = AppContext::in_memory(settings.clone()).expect("build app context");

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            server::serve(listener, ctx, shutdown).await.expect("server error");
        });

        Self {
            base_url: format!("http://{}", address),
            client: reqwest::Client::new(),
            settings,
            shutdown: Some(tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn authorize(builder: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn json(response: reqwest::Response) -> Value {
        response.json::<Value>().await.expect("JSON response body")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Value {
        let request = Self::authorize(self.client.get(self.url(path)), token);
        Self::json(request.send().await.expect("GET request")).await
    }

    pub async fn post(&self, path: &str, body: &Value, token: Option<&str>) -> Value {
        let request = Self::authorize(self.client.post(self.url(path)).json(body), token);
        Self::json(request.send().await.expect("POST request")).await
    }

    pub async fn put(&self, path: &str, body: &Value, token: Option<&str>) -> Value {
        let request = Self::authorize(self.client.put(self.url(path)).json(body), token);
        Self::json(request.send().await.expect("PUT request")).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Value {
        let request = Self::authorize(self.client.delete(self.url(path)), token);
        Self::json(request.send().await.expect("DELETE request")).await
    }

    /// Register an account and return the created user
    pub async fn register(&self, username: &str, password: &str) -> Value {
        let body = crate::helpers::register_body(username, password);
        let response = self.post("/auth/register", &body, None).await;
        assert_eq!(response["success"], true, "registration failed: {}", response);
        response["data"].clone()
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.post("/auth/login", &body, None).await;
        assert_eq!(response["success"], true, "login failed: {}", response);
        response["data"]["token"].as_str().expect("token").to_string()
    }

    /// Register and log in a user in one go, returning `(user_id, token)`
    pub async fn signed_in_user(&self, username: &str) -> (String, String) {
        let user = self.register(username, "secret1").await;
        let token = self.login(username, "secret1").await;
        (user["id"].as_str().expect("user id").to_string(), token)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

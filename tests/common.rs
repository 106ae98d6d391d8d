use race_calendar::{
    api::router::create_router,
    config::Config,
    infra::factory::{run_sqlite_migrations, state_from_pool},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header, StatusCode},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_PASSWORD: &str = "0000";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool).await;

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            site_timezone: chrono_tz::UTC,
            default_admin_password: ADMIN_PASSWORD.to_string(),
            session_ttl_hours: 1,
            cookie_secure: false,
            log_dir: "./logs".to_string(),
        };

        let state = Arc::new(state_from_pool(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub fn today(&self) -> String {
        self.state.config.today()
    }

    /// Signs in and returns the `Cookie` header value to send on admin calls.
    pub async fn login(&self, password: &str) -> String {
        let response = self.post_json("/api/v1/auth/login", None, serde_json::json!({ "password": password })).await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let set_cookie = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .find(|c| c.starts_with("admin_session="))
            .expect("No admin_session cookie returned");

        set_cookie.split(';').next().unwrap().to_string()
    }

    pub async fn admin(&self) -> String {
        self.login(ADMIN_PASSWORD).await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, cookie: Option<&str>, body: Value) -> Response {
        self.send_json("POST", uri, cookie, body).await
    }

    pub async fn send_json(&self, method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.router.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(c) = cookie {
            builder = builder.header(header::COOKIE, c);
        }
        self.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
    }

    /// Creates an event through the admin API and returns its id.
    pub async fn create_event(&self, cookie: &str, body: Value) -> String {
        let response = self.post_json("/api/v1/events", Some(cookie), body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = parse_body(response).await;
        created["id"].as_str().unwrap().to_string()
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

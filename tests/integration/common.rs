//! Shared test setup

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use bookcase_server::{
    api,
    config::{AppConfig, SecurityConfig},
    models::dto::BookDto,
    AppState,
};

pub fn test_config(security_enabled: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.host = ":memory:".to_string();
    config.database.migration = true;
    config.extension.master_generator = true;
    config.extension.security_enabled = security_enabled;
    config.security = SecurityConfig {
        auth_path: vec!["/api/*".to_string()],
        exclude_path: vec!["/api/auth/*".to_string(), "/api/health".to_string()],
        user_path: vec!["/api/books*".to_string()],
        admin_path: vec!["/api/*".to_string()],
    };
    config
}

pub async fn test_state(security_enabled: bool) -> AppState {
    AppState::init(test_config(security_enabled))
        .await
        .expect("Failed to initialize test state")
}

pub fn book_dto(title: &str, isbn: &str, category_id: i64, format_id: i64) -> BookDto {
    BookDto {
        title: title.to_string(),
        isbn: isbn.to_string(),
        category_id,
        format_id,
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookie: Option<String>,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::build(false).await
    }

    pub async fn with_security() -> Self {
        Self::build(true).await
    }

    async fn build(security_enabled: bool) -> Self {
        let state = test_state(security_enabled).await;
        let router = api::create_router(state.clone()).expect("Failed to build router");
        Self { state, router }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        // "id=...; HttpOnly; ..." -> "id=..."
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            set_cookie,
            body,
        }
    }
}

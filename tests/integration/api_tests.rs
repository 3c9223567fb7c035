//! API integration tests

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use crate::common::TestApp;

fn book_json(title: &str, isbn: &str) -> String {
    json!({
        "title": title,
        "isbn": isbn,
        "categoryId": 1,
        "formatId": 1
    })
    .to_string()
}

async fn create_book(app: &TestApp, title: &str) -> Value {
    let response = app
        .send(Method::POST, "/api/books", Some(book_json(title, "9781492052593")), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");

    let response = app.get("/api/ready").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ready");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let response = app.get("/api/nothing-here").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({"code": 404, "message": "Not Found"}));
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = TestApp::new().await;

    let created = create_book(&app, "Programming Rust").await;
    assert_eq!(created["title"], "Programming Rust");
    assert_eq!(created["categoryId"], 1);
    assert_eq!(created["category"]["name"], "Technical Book");
    assert_eq!(created["format"]["name"], "Book");

    let response = app.get(&format!("/api/books/{}", created["id"])).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), created);
}

#[tokio::test]
async fn test_get_book_with_bad_id() {
    let app = TestApp::new().await;

    let response = app.get("/api/books/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json().is_string());

    let response = app.get("/api/books/999").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json().is_string());
}

#[tokio::test]
async fn test_create_book_validation() {
    let app = TestApp::new().await;

    let response = app
        .send(Method::POST, "/api/books", Some(book_json("Go", "123")), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body = response.json();
    assert_eq!(body["title"], "Please enter the title with 3 to 50 characters.");
    assert_eq!(body["isbn"], "Please enter the ISBN with 10 to 20 characters.");

    let list = app.get("/api/books").await.json();
    assert_eq!(list["totalElements"], 0);
}

#[tokio::test]
async fn test_create_book_with_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .send(Method::POST, "/api/books", Some(r#"{"title":"Programming Rust"}"#.to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["isbn"].is_string());
}

#[tokio::test]
async fn test_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .send(Method::POST, "/api/books", Some("{not json".to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json().is_string());
}

#[tokio::test]
async fn test_update_and_delete_book() {
    let app = TestApp::new().await;
    let created = create_book(&app, "Programming Rust").await;
    let uri = format!("/api/books/{}", created["id"]);

    let response = app
        .send(Method::PUT, &uri, Some(book_json("Rust for Rustaceans", "9781718501850")), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["title"], "Rust for Rustaceans");

    let response = app
        .send(Method::PUT, "/api/books/999", Some(book_json("Rust for Rustaceans", "9781718501850")), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Failed to the update"}));

    let response = app.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["title"], "Rust for Rustaceans");

    let response = app.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Failed to the delete"}));
}

#[tokio::test]
async fn test_book_list() {
    let app = TestApp::new().await;
    for title in ["Programming Rust", "Rust in Action", "Learning Go"] {
        create_book(&app, title).await;
    }

    let page = app.get("/api/books?page=0&size=2").await.json();
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["content"].as_array().unwrap().len(), 2);

    let page = app.get("/api/books?query=Rust").await.json();
    assert_eq!(page["totalElements"], 2);

    // Unparseable paging falls back to the defaults
    let page = app.get("/api/books?page=x&size=y").await.json();
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 10);
}

#[tokio::test]
async fn test_master_lists() {
    let app = TestApp::new().await;

    let categories = app.get("/api/categories").await.json();
    assert_eq!(categories.as_array().unwrap().len(), 3);

    let formats = app.get("/api/formats").await.json();
    assert_eq!(formats[1]["name"], "E-Book");
}

#[tokio::test]
async fn test_auth_without_security() {
    let app = TestApp::new().await;

    let response = app.get("/api/auth/loginStatus").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!(true));

    let response = app.get("/api/auth/loginAccount").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "test");
    assert_eq!(response.json()["authority"]["name"], "Admin");
}

#[tokio::test]
async fn test_protected_route_requires_login() {
    let app = TestApp::with_security().await;

    let response = app.get("/api/books").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!(false));

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::with_security().await;

    let body = json!({"userName": "test", "password": "wrong"}).to_string();
    let response = app.send(Method::POST, "/api/auth/login", Some(body), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.is_empty());
    assert!(response.set_cookie.is_none());

    let response = app.get("/api/auth/loginStatus").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!(false));
}

#[tokio::test]
async fn test_login_session_lifecycle() {
    let app = TestApp::with_security().await;

    let body = json!({"userName": "test", "password": "test"}).to_string();
    let response = app.send(Method::POST, "/api/auth/login", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "test");
    assert!(response.json().get("password").is_none());

    let cookie = response.set_cookie.expect("Login did not set a session cookie");
    let cookie = Some(cookie.as_str());

    let response = app.send(Method::GET, "/api/auth/loginStatus", None, cookie).await;
    assert_eq!(response.json(), json!(true));

    let response = app.send(Method::GET, "/api/auth/loginAccount", None, cookie).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["authority"]["name"], "Admin");

    let response = app.send(Method::GET, "/api/categories", None, cookie).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.send(Method::POST, "/api/auth/logout", None, cookie).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());

    let response = app.send(Method::GET, "/api/auth/loginStatus", None, cookie).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Logging out twice is harmless
    let response = app.send(Method::POST, "/api/auth/logout", None, cookie).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_role_paths() {
    let app = TestApp::with_security().await;

    let body = json!({"userName": "test2", "password": "test2"}).to_string();
    let response = app.send(Method::POST, "/api/auth/login", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie.expect("Login did not set a session cookie");

    let response = app.send(Method::GET, "/api/books", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.send(Method::GET, "/api/categories", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_login_returns_session_account() {
    let app = TestApp::with_security().await;

    let body = json!({"userName": "test", "password": "test"}).to_string();
    let response = app.send(Method::POST, "/api/auth/login", Some(body), None).await;
    let cookie = response.set_cookie.expect("Login did not set a session cookie");

    // Already logged in: credentials are not checked again
    let body = json!({"userName": "test2", "password": "whatever"}).to_string();
    let response = app
        .send(Method::POST, "/api/auth/login", Some(body), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["name"], "test");
}

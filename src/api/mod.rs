//! API handlers and router for the Bookcase REST endpoints

pub mod auth;
pub mod books;
pub mod health;
pub mod masters;
pub mod openapi;

use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{
    error::{self, AppError, AppResult},
    middleware::{log_request, require_authorization, AuthGuard},
    AppState,
};

/// Create the application router with all routes and layers
pub fn create_router(state: AppState) -> AppResult<Router> {
    let guard = AuthGuard::new(&state.config)
        .map_err(|e| AppError::Internal(format!("Invalid security path pattern: {}", e)))?;

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::get_book_list).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Masters
        .route("/categories", get(masters::get_category_list))
        .route("/formats", get(masters::get_format_list))
        // Authentication
        .route("/auth/loginStatus", get(auth::login_status))
        .route("/auth/loginAccount", get(auth::login_account))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .with_state(state.clone());

    let mut app = Router::new().nest("/api", api);

    if state.config.swagger.enabled {
        app = app.merge(openapi::create_openapi_router(&state.config.swagger.path));
    }

    let mut app = app
        .fallback(error::fallback)
        .layer(from_fn_with_state(Arc::new(guard), require_authorization))
        .layer(from_fn(log_request))
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http());

    if state.config.extension.cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    Ok(app)
}

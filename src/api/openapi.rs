//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, masters};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookcase API",
        version = "1.0.0",
        description = "Book catalog REST API",
        license(name = "GPL-3.0", url = "https://www.gnu.org/licenses/gpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_book,
        books::get_book_list,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Masters
        masters::get_category_list,
        masters::get_format_list,
        // Auth
        auth::login_status,
        auth::login_account,
        auth::login,
        auth::logout,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::Category,
            crate::models::Format,
            crate::models::Page,
            crate::models::Account,
            crate::models::Authority,
            crate::models::dto::BookDto,
            crate::models::dto::LoginDto,
            health::HealthResponse,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "masters", description = "Category and format lookups"),
        (name = "auth", description = "Session login")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router, serving the UI at `path`
pub fn create_openapi_router(path: &str) -> Router {
    Router::new()
        .merge(SwaggerUi::new(path.to_string()).url("/api-docs/openapi.json", ApiDoc::openapi()))
}

//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{category::Category, format::Format};

/// Book record, with its category and format resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub category_id: i64,
    pub category: Category,
    pub format_id: i64,
    pub format: Format,
}

/// Book fields before insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub isbn: String,
    pub category_id: i64,
    pub format_id: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, isbn: impl Into<String>, category_id: i64, format_id: i64) -> Self {
        Self {
            title: title.into(),
            isbn: isbn.into(),
            category_id,
            format_id,
        }
    }
}

impl Book {
    /// Builds the persisted book from its insert fields and resolved references
    pub fn from_new(id: i64, book: NewBook, category: Category, format: Format) -> Self {
        Self {
            id,
            title: book.title,
            isbn: book.isbn,
            category_id: category.id,
            category,
            format_id: format.id,
            format,
        }
    }
}

/// Internal row structure for joined book queries
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    id: i64,
    title: String,
    isbn: String,
    category_id: i64,
    category_name: String,
    format_id: i64,
    format_name: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            isbn: row.isbn,
            category_id: row.category_id,
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
            format_id: row.format_id,
            format: Format {
                id: row.format_id,
                name: row.format_name,
            },
        }
    }
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct BookQuery {
    /// Keyword matched against the title
    pub query: Option<String>,
    /// Zero-based page number
    pub page: Option<String>,
    /// Items per page
    pub size: Option<String>,
}

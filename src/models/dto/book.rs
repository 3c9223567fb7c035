//! Book request DTO and its validation rules

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::FieldErrors;
use crate::{config::MessagesConfig, models::book::NewBook};

/// Book data sent to create or update a book.
///
/// Missing fields deserialize to their defaults, so an absent title or ISBN
/// fails the length rules like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDto {
    #[validate(length(min = 3, max = 50))]
    pub title: String,
    #[validate(length(min = 10, max = 20))]
    pub isbn: String,
    pub category_id: i64,
    pub format_id: i64,
}

impl BookDto {
    /// Check the field rules.
    ///
    /// Returns `None` when valid, otherwise one localized message per failing field.
    pub fn validate_with(&self, messages: &MessagesConfig) -> Option<FieldErrors> {
        let errors = match Validate::validate(self) {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        let fields = errors.field_errors();
        let mut result = FieldErrors::new();
        if fields.contains_key("title") {
            result.insert("title".to_string(), messages.validation_book_title.clone());
        }
        if fields.contains_key("isbn") {
            result.insert("isbn".to_string(), messages.validation_book_isbn.clone());
        }

        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    /// Materialize the insert fields of a book
    pub fn create(&self) -> NewBook {
        NewBook::new(self.title.clone(), self.isbn.clone(), self.category_id, self.format_id)
    }
}

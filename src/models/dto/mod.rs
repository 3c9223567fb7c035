//! Request-shaped data transfer objects

pub mod book;
pub mod login;

use std::collections::HashMap;

pub use book::BookDto;
pub use login::LoginDto;

/// Field name (or `"error"`) to user-facing message
pub type FieldErrors = HashMap<String, String>;

/// Single-entry error map used for failed write operations
pub fn error_map(message: &str) -> FieldErrors {
    HashMap::from([("error".to_string(), message.to_string())])
}

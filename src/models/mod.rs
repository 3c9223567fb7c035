//! Data models for the book catalog

pub mod account;
pub mod book;
pub mod category;
pub mod dto;
pub mod format;
pub mod page;

// Re-export commonly used types
pub use account::{Account, Authority};
pub use book::{Book, BookQuery, NewBook};
pub use category::Category;
pub use format::Format;
pub use page::{Page, PageRequest};

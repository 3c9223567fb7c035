//! Request middleware: session access, authorization and request logging

pub mod auth;
pub mod request_log;
pub mod session;

pub use auth::{require_authorization, AuthGuard};
pub use request_log::log_request;
pub use session::AccountSession;

//! Path-based authorization guard
//!
//! When security is enabled, a request whose path matches `security.auth_path`
//! (and not `security.exclude_path`) needs a logged-in account. Admins are
//! admitted on `security.admin_path`, users on `security.user_path`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use regex::RegexSet;
use tower_sessions::Session;

use super::AccountSession;
use crate::{config::AppConfig, models::Account};

/// Compiled path rules
#[derive(Debug, Clone)]
pub struct AuthGuard {
    enabled: bool,
    auth: RegexSet,
    exclude: RegexSet,
    user: RegexSet,
    admin: RegexSet,
}

impl AuthGuard {
    pub fn new(config: &AppConfig) -> Result<Self, regex::Error> {
        let security = &config.security;
        Ok(Self {
            enabled: config.extension.security_enabled,
            auth: compile(&security.auth_path)?,
            exclude: compile(&security.exclude_path)?,
            user: compile(&security.user_path)?,
            admin: compile(&security.admin_path)?,
        })
    }

    pub fn is_authorized(&self, path: &str, account: Option<&Account>) -> bool {
        if !self.enabled || !self.auth.is_match(path) || self.exclude.is_match(path) {
            return true;
        }

        match account {
            Some(account) if account.is_admin() => self.admin.is_match(path),
            Some(account) if account.is_user() => self.user.is_match(path),
            _ => false,
        }
    }
}

/// `*` matches any run of characters, everything else is literal
fn compile(patterns: &[String]) -> Result<RegexSet, regex::Error> {
    RegexSet::new(
        patterns
            .iter()
            .map(|p| format!("^{}$", regex::escape(p).replace(r"\*", ".*"))),
    )
}

pub async fn require_authorization(
    State(guard): State<Arc<AuthGuard>>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    if !guard.enabled {
        return next.run(request).await;
    }

    let account = match AccountSession::new(&session).account().await {
        Ok(account) => account,
        Err(e) => return e.into_response(),
    };

    if guard.is_authorized(request.uri().path(), account.as_ref()) {
        next.run(request).await
    } else {
        tracing::debug!(path = request.uri().path(), "Unauthorized request");
        (StatusCode::UNAUTHORIZED, Json(false)).into_response()
    }
}

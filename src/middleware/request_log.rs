//! Access log for every request

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use super::AccountSession;

/// Logs remote address, account name, URI, method and status of each request
pub async fn log_request(session: Session, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(request).await;

    let account_name = match AccountSession::new(&session).account().await {
        Ok(Some(account)) => account.name,
        _ => "-".to_string(),
    };

    tracing::info!(
        remote_ip = %remote_ip,
        account_name = %account_name,
        uri = %uri,
        method = %method,
        status = response.status().as_u16(),
        "request"
    );

    response
}

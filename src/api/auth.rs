//! Session login endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppResult,
    middleware::AccountSession,
    models::{dto::LoginDto, Account},
    AppState,
};

/// Whether the current session is logged in
#[utoipa::path(
    get,
    path = "/auth/loginStatus",
    tag = "auth",
    responses(
        (status = 200, description = "Logged in, or security disabled", body = bool),
        (status = 401, description = "Not logged in", body = bool)
    )
)]
pub async fn login_status(State(state): State<AppState>, session: Session) -> AppResult<Response> {
    if !state.config.extension.security_enabled {
        return Ok(Json(true).into_response());
    }

    let logged_in = AccountSession::new(&session).account().await?.is_some();
    Ok(if logged_in {
        Json(true).into_response()
    } else {
        unauthorized()
    })
}

/// Account of the current session.
///
/// With security disabled a fixed dummy account is returned.
#[utoipa::path(
    get,
    path = "/auth/loginAccount",
    tag = "auth",
    responses(
        (status = 200, description = "Logged-in account", body = Account),
        (status = 401, description = "Not logged in", body = bool)
    )
)]
pub async fn login_account(State(state): State<AppState>, session: Session) -> AppResult<Response> {
    if !state.config.extension.security_enabled {
        return Ok(Json(Account::dummy()).into_response());
    }

    Ok(match AccountSession::new(&session).account().await? {
        Some(account) => Json(account).into_response(),
        None => unauthorized(),
    })
}

/// Log in with user name and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = Account),
        (status = 400, description = "Malformed body", body = String),
        (status = 401, description = "Wrong user name or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> AppResult<Response> {
    let Json(dto) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return Ok((StatusCode::BAD_REQUEST, Json(rejection.body_text())).into_response())
        }
    };

    let account_session = AccountSession::new(&session);
    if let Some(account) = account_session.account().await? {
        return Ok(Json(account).into_response());
    }

    let Some(account) = state
        .services
        .accounts
        .authenticate(&dto.user_name, &dto.password)
        .await?
    else {
        return Ok(StatusCode::UNAUTHORIZED.into_response());
    };

    account_session.set_account(&account).await?;
    account_session.save().await?;
    tracing::info!(account = %account.name, "Logged in");

    Ok(Json(account).into_response())
}

/// Log out and discard the session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out")
    )
)]
pub async fn logout(session: Session) -> AppResult<StatusCode> {
    AccountSession::new(&session).clear().await?;
    Ok(StatusCode::OK)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(false)).into_response()
}

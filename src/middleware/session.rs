//! Typed access to the account stored in the session

use tower_sessions::Session;

use crate::{error::AppResult, models::Account};

const SESSION_ACCOUNT: &str = "auth:account";

/// Wraps a tower-sessions `Session` and exposes only the logged-in account
pub struct AccountSession<'a> {
    session: &'a Session,
}

impl<'a> AccountSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Account of the current session, if logged in
    pub async fn account(&self) -> AppResult<Option<Account>> {
        Ok(self.session.get::<Account>(SESSION_ACCOUNT).await?)
    }

    pub async fn set_account(&self, account: &Account) -> AppResult<()> {
        self.session.insert(SESSION_ACCOUNT, account).await?;
        Ok(())
    }

    /// Persist the session to the store right away
    pub async fn save(&self) -> AppResult<()> {
        self.session.save().await?;
        Ok(())
    }

    /// Forget the account and delete the session
    pub async fn clear(&self) -> AppResult<()> {
        self.session.remove::<Account>(SESSION_ACCOUNT).await?;
        self.session.flush().await?;
        Ok(())
    }
}

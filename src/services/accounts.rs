//! Account authentication service

use crate::{error::AppResult, models::Account, repository::Repository};

#[derive(Clone)]
pub struct AccountService {
    repository: Repository,
}

impl AccountService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Authenticate by login name and password.
    /// Returns `None` when the account is unknown or the password does not match.
    pub async fn authenticate(&self, name: &str, password: &str) -> AppResult<Option<Account>> {
        let Some(account) = self.repository.accounts_get_by_name(name).await? else {
            tracing::debug!(account = name, "Unknown account");
            return Ok(None);
        };

        if !account.verify_password(password)? {
            tracing::debug!(account = name, "Password mismatch");
            return Ok(None);
        }

        Ok(Some(account))
    }
}

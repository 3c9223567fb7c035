//! Account domain methods on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::account::{Account, AccountRow},
};

impl Repository {
    /// Get account by login name
    pub async fn accounts_get_by_name(&self, name: &str) -> AppResult<Option<Account>> {
        let query = self.dialect.sql(
            r#"
            SELECT a.id, a.name, a.password, a.authority_id, au.name AS authority_name
            FROM account_master a
            INNER JOIN authority_master au ON au.id = a.authority_id
            WHERE a.name = ?
            "#,
        );
        let row = sqlx::query_as::<_, AccountRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Account::from))
    }
}

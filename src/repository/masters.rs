//! Category and format lookups on Repository

use sqlx::{Any, Executor};

use super::{Dialect, Repository, TxRepository};
use crate::{
    error::{AppError, AppResult},
    models::{Category, Format},
};

async fn fetch_category<'c, E>(executor: E, dialect: Dialect, id: i64) -> AppResult<Category>
where
    E: Executor<'c, Database = Any>,
{
    let query = dialect.sql("SELECT id, name FROM category_master WHERE id = ?");
    sqlx::query_as::<_, Category>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
}

async fn fetch_format<'c, E>(executor: E, dialect: Dialect, id: i64) -> AppResult<Format>
where
    E: Executor<'c, Database = Any>,
{
    let query = dialect.sql("SELECT id, name FROM format_master WHERE id = ?");
    sqlx::query_as::<_, Format>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Format {} not found", id)))
}

impl Repository {
    /// List all categories
    pub async fn categories_list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM category_master ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List all formats
    pub async fn formats_list(&self) -> AppResult<Vec<Format>> {
        let rows = sqlx::query_as::<_, Format>("SELECT id, name FROM format_master ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

impl TxRepository {
    /// Resolve a category reference inside the transaction
    pub async fn categories_get_by_id(&mut self, id: i64) -> AppResult<Category> {
        let dialect = self.dialect;
        fetch_category(self.conn(), dialect, id).await
    }

    /// Resolve a format reference inside the transaction
    pub async fn formats_get_by_id(&mut self, id: i64) -> AppResult<Format> {
        let dialect = self.dialect;
        fetch_format(self.conn(), dialect, id).await
    }
}

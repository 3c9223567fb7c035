//! Schema creation and master data seeding

use super::{Dialect, Repository, TxRepository};
use crate::{
    error::{AppError, AppResult},
    models::account::{hash_password, Authority},
};

const CATEGORIES: [&str; 3] = ["Technical Book", "Magazine", "Novel"];
const FORMATS: [&str; 2] = ["Book", "E-Book"];
const ACCOUNTS: [(&str, &str, i64); 2] = [
    ("test", "test", Authority::ADMIN_ID),
    ("test2", "test2", Authority::USER_ID),
];

fn schema(dialect: Dialect) -> Vec<String> {
    let pk = dialect.serial_primary_key();
    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS category_master (id {}, name VARCHAR(50) NOT NULL)",
            pk
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS format_master (id {}, name VARCHAR(50) NOT NULL)",
            pk
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS authority_master (id {}, name VARCHAR(50) NOT NULL)",
            pk
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS account_master (
                id {},
                name VARCHAR(50) NOT NULL UNIQUE,
                password VARCHAR(255) NOT NULL,
                authority_id BIGINT NOT NULL,
                FOREIGN KEY (authority_id) REFERENCES authority_master (id)
            )"#,
            pk
        ),
        format!(
            r#"CREATE TABLE IF NOT EXISTS book (
                id {},
                title VARCHAR(50) NOT NULL,
                isbn VARCHAR(20) NOT NULL,
                category_id BIGINT NOT NULL,
                format_id BIGINT NOT NULL,
                FOREIGN KEY (category_id) REFERENCES category_master (id),
                FOREIGN KEY (format_id) REFERENCES format_master (id)
            )"#,
            pk
        ),
    ]
}

impl Repository {
    /// Create all tables that do not exist yet
    pub async fn create_schema(&self) -> AppResult<()> {
        for statement in schema(self.dialect) {
            sqlx::query(&statement).execute(&self.pool).await?;
        }
        tracing::info!(dialect = ?self.dialect, "Database schema ready");
        Ok(())
    }

    /// Seed lookup tables and demo accounts when they are empty
    pub async fn seed_master_data(&self) -> AppResult<()> {
        let mut accounts = Vec::with_capacity(ACCOUNTS.len());
        for (name, password, authority_id) in ACCOUNTS {
            accounts.push((name, hash_password(password)?, authority_id));
        }

        self.transaction(move |tx| {
            Box::pin(async move {
                if tx.is_empty("category_master").await? {
                    for name in CATEGORIES {
                        tx.insert_name("category_master", name).await?;
                    }
                }
                if tx.is_empty("format_master").await? {
                    for name in FORMATS {
                        tx.insert_name("format_master", name).await?;
                    }
                }
                if tx.is_empty("authority_master").await? {
                    for authority in [Authority::admin(), Authority::user()] {
                        let query = tx
                            .dialect
                            .sql("INSERT INTO authority_master (id, name) VALUES (?, ?)");
                        sqlx::query(&query)
                            .bind(authority.id)
                            .bind(authority.name)
                            .execute(tx.conn())
                            .await?;
                    }
                }
                if tx.is_empty("account_master").await? {
                    for (name, hash, authority_id) in accounts {
                        let query = tx.dialect.sql(
                            "INSERT INTO account_master (name, password, authority_id) VALUES (?, ?, ?)",
                        );
                        sqlx::query(&query)
                            .bind(name)
                            .bind(hash)
                            .bind(authority_id)
                            .execute(tx.conn())
                            .await?;
                    }
                }
                Ok::<(), AppError>(())
            })
        })
        .await?;

        tracing::info!("Master data ready");
        Ok(())
    }
}

impl TxRepository {
    async fn is_empty(&mut self, table: &str) -> AppResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.conn())
            .await?;
        Ok(count == 0)
    }

    async fn insert_name(&mut self, table: &str, name: &str) -> AppResult<()> {
        let query = self
            .dialect
            .sql(&format!("INSERT INTO {} (name) VALUES (?)", table));
        sqlx::query(&query).bind(name).execute(self.conn()).await?;
        Ok(())
    }
}

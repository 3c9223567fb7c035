//! Repository layer for database operations
//!
//! Queries are written once with `?` placeholders and rewritten for the
//! configured dialect. Reads go through [`Repository`]; writes go through a
//! [`TxRepository`] handed out by [`Repository::transaction`].

pub mod accounts;
pub mod books;
pub mod masters;
pub mod migration;

use std::panic::AssertUnwindSafe;

use futures::{future::BoxFuture, FutureExt};
use serde::Deserialize;
use sqlx::{any::AnyPoolOptions, Any, AnyConnection, Pool, Transaction};

use crate::{config::DatabaseConfig, error::AppResult};

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Dialect {
    #[serde(rename = "sqlite3", alias = "sqlite")]
    Sqlite,
    #[serde(rename = "postgres", alias = "postgresql")]
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    /// Rewrite `?` placeholders into the dialect's bind syntax
    pub fn sql(&self, query: &str) -> String {
        match self {
            Dialect::Postgres => {
                let mut out = String::with_capacity(query.len() + 8);
                let mut index = 0;
                let mut in_literal = false;
                for c in query.chars() {
                    match c {
                        '\'' => {
                            in_literal = !in_literal;
                            out.push(c);
                        }
                        '?' if !in_literal => {
                            index += 1;
                            out.push('$');
                            out.push_str(&index.to_string());
                        }
                        _ => out.push(c),
                    }
                }
                out
            }
            Dialect::Sqlite | Dialect::MySql => query.to_string(),
        }
    }

    /// Whether `INSERT ... RETURNING` is used to read generated ids.
    /// The any driver never reports `last_insert_id` for sqlite.
    pub fn supports_returning(&self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Sqlite)
    }

    /// Column definition for an auto-generated primary key
    pub fn serial_primary_key(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
            Dialect::MySql => "BIGINT AUTO_INCREMENT PRIMARY KEY",
        }
    }
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pool: Pool<Any>,
    dialect: Dialect,
}

/// Transaction-scoped repository handle.
///
/// Only reachable as a borrow inside [`Repository::transaction`].
pub struct TxRepository {
    inner: Transaction<'static, Any>,
    dialect: Dialect,
}

impl TxRepository {
    fn conn(&mut self) -> &mut AnyConnection {
        &mut self.inner
    }
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Any>, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    /// Open a connection pool for the configured dialect
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        sqlx::any::install_default_drivers();

        let mut options = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);

        // Each connection to sqlite::memory: is a separate database
        if config.is_in_memory() {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options.connect(&config.connection_url()).await?;
        Ok(Self::new(pool, config.dialect))
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Run `f` inside one database transaction.
    ///
    /// Commits when `f` returns `Ok`, rolls back when it returns `Err`. If `f`
    /// panics the transaction is rolled back and the panic resumed.
    pub async fn transaction<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut TxRepository) -> BoxFuture<'c, AppResult<T>> + Send,
    {
        let mut tx = TxRepository {
            inner: self.pool.begin().await?,
            dialect: self.dialect,
        };

        let outcome = AssertUnwindSafe(f(&mut tx)).catch_unwind().await;

        match outcome {
            Ok(Ok(value)) => {
                tx.inner.commit().await?;
                Ok(value)
            }
            Ok(Err(err)) => {
                if let Err(rollback_err) = tx.inner.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
            Err(panic) => {
                tracing::error!("Transaction aborted by panic, rolling back");
                if let Err(rollback_err) = tx.inner.rollback().await {
                    tracing::error!(error = %rollback_err, "Rollback failed");
                }
                std::panic::resume_unwind(panic)
            }
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Release the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connections closed");
    }
}

//! Bookcase book catalog server
//!
//! A REST JSON API for managing a catalog of books, with session-based
//! login and a relational store selected at startup (sqlite, postgres or mysql).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Connect to the database, prepare the schema when configured and build the services
    pub async fn init(config: AppConfig) -> AppResult<Self> {
        let repository = Repository::connect(&config.database).await?;
        tracing::info!(dialect = ?repository.dialect(), "Connected to database");

        if config.database.migration {
            repository.create_schema().await?;
        }
        if config.extension.master_generator {
            repository.seed_master_data().await?;
        }

        let services = Services::new(repository, config.messages.clone());

        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services),
        })
    }
}

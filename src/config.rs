//! Configuration management for the Bookcase server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::repository::Dialect;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dialect: Dialect,
    /// Host name, or the database file for sqlite (`:memory:` for an in-memory database)
    pub host: String,
    pub port: Option<u16>,
    pub dbname: String,
    pub username: String,
    pub password: String,
    /// Full connection URL; takes precedence over the individual fields
    pub url: Option<String>,
    /// Create the schema at startup
    pub migration: bool,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Seed master data (categories, formats, accounts) into empty tables
    pub master_generator: bool,
    pub cors_enabled: bool,
    pub security_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SwaggerConfig {
    pub enabled: bool,
    pub path: String,
}

/// Path patterns for the authorization guard. `*` matches any suffix.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SecurityConfig {
    pub auth_path: Vec<String>,
    pub exclude_path: Vec<String>,
    pub user_path: Vec<String>,
    pub admin_path: Vec<String>,
}

/// Localized validation messages
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MessagesConfig {
    pub validation_book_title: String,
    pub validation_book_isbn: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub extension: ExtensionConfig,
    pub logging: LoggingConfig,
    pub swagger: SwaggerConfig,
    pub security: SecurityConfig,
    pub messages: MessagesConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(File::with_name("config/messages").required(false))
            // BOOKCASE__DATABASE__HOST=... style overrides
            .add_source(
                Environment::with_prefix("BOOKCASE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Sqlite,
            host: "book.db".to_string(),
            port: None,
            dbname: String::new(),
            username: String::new(),
            password: String::new(),
            url: None,
            migration: false,
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "/swagger-ui".to_string(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            validation_book_title: "Please enter the title with 3 to 50 characters.".to_string(),
            validation_book_isbn: "Please enter the ISBN with 10 to 20 characters.".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL for the configured dialect
    pub fn connection_url(&self) -> String {
        if let Some(ref url) = self.url {
            return url.clone();
        }

        match self.dialect {
            Dialect::Sqlite if self.host == ":memory:" => "sqlite::memory:".to_string(),
            Dialect::Sqlite => format!("sqlite://{}?mode=rwc", self.host),
            Dialect::Postgres => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username,
                self.password,
                self.host,
                self.port.unwrap_or(5432),
                self.dbname
            ),
            Dialect::MySql => format!(
                "mysql://{}:{}@{}:{}/{}",
                self.username,
                self.password,
                self.host,
                self.port.unwrap_or(3306),
                self.dbname
            ),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.dialect == Dialect::Sqlite && self.url.is_none() && self.host == ":memory:"
    }
}

//! Account and authority models

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Role lookup record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Authority {
    pub id: i64,
    pub name: String,
}

impl Authority {
    pub const ADMIN_ID: i64 = 1;
    pub const USER_ID: i64 = 2;
    pub const ADMIN: &'static str = "Admin";
    pub const USER: &'static str = "User";

    pub fn admin() -> Self {
        Self {
            id: Self::ADMIN_ID,
            name: Self::ADMIN.to_string(),
        }
    }

    pub fn user() -> Self {
        Self {
            id: Self::USER_ID,
            name: Self::USER.to_string(),
        }
    }
}

/// Login account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    /// Login name
    pub name: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing, default)]
    pub password: String,
    pub authority_id: i64,
    pub authority: Authority,
}

impl Account {
    /// Account handed out when security is disabled
    pub fn dummy() -> Self {
        Self {
            id: 0,
            name: "test".to_string(),
            password: String::new(),
            authority_id: Authority::ADMIN_ID,
            authority: Authority::admin(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authority.name == Authority::ADMIN
    }

    pub fn is_user(&self) -> bool {
        self.authority.name == Authority::USER
    }

    /// Check a plain password against the stored hash
    pub fn verify_password(&self, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&self.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Internal row structure for account queries joined with their authority
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    id: i64,
    name: String,
    password: String,
    authority_id: i64,
    authority_name: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            password: row.password,
            authority_id: row.authority_id,
            authority: Authority {
                id: row.authority_id,
                name: row.authority_name,
            },
        }
    }
}

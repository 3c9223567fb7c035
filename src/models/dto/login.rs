//! Login request

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Username and password sent to `/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginDto {
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password: String,
}

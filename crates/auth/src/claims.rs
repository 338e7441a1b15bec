//! JWT claims types

use serde::{Deserialize, Serialize};

/// JWT claims issued to Jobly users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoblyClaims {
    /// Username of the token holder
    pub username: String,
    /// Whether the holder may mutate jobs
    #[serde(default)]
    pub is_admin: bool,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}

use serde::{Deserialize, Serialize};

pub const ADMIN_AUTHORITY: &str = "ROLE_ADMIN";

/// Claims carried by the bearer tokens accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    /// Login of the user
    pub sub: String,
    pub user_id: i64,
    /// Comma separated list of authorities, e.g. `ROLE_ADMIN,ROLE_USER`
    #[serde(default)]
    pub auth: String,
    pub exp: i64,
}

impl JwtClaim {
    pub fn authorities(&self) -> Vec<String> {
        self.auth
            .split(',')
            .map(str::trim)
            .filter(|authority| !authority.is_empty())
            .map(str::to_string)
            .collect()
    }
}

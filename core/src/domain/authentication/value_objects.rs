use serde::{Deserialize, Serialize};

use super::entities::{ADMIN_AUTHORITY, JwtClaim};

/// The acting user of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub login: String,
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.authorities
            .iter()
            .any(|authority| authority == ADMIN_AUTHORITY)
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Self {
            user_id: claims.user_id,
            authorities: claims.authorities(),
            login: claims.sub,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}

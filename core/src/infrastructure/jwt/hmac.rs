use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenDecoder},
    common::entities::app_errors::CoreError,
};

/// HS256 bearer token verification with a shared secret.
///
/// Without a secret every token is rejected.
#[derive(Clone)]
pub struct HmacTokenDecoder {
    key: Option<DecodingKey>,
    validation: Validation,
}

impl HmacTokenDecoder {
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            key: secret.map(|secret| DecodingKey::from_secret(secret.as_bytes())),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl std::fmt::Debug for HmacTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacTokenDecoder")
            .field("configured", &self.key.is_some())
            .finish()
    }
}

impl TokenDecoder for HmacTokenDecoder {
    fn decode(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let key = self.key.as_ref().ok_or_else(|| {
            debug!("Bearer token received but no JWT secret is configured");
            CoreError::InvalidToken
        })?;

        decode::<JwtClaim>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Failed to verify bearer token: {}", e);
                CoreError::InvalidToken
            })
    }
}

use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

use super::{
    entities::JwtClaim,
    value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput},
};

/// Verifies a bearer token and extracts its claims
pub trait TokenDecoder: Send + Sync {
    fn decode(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}

use crate::domain::common::entities::app_errors::CoreError;

/// Turn a policy decision into a `Forbidden` error when it denies access.
pub fn ensure_policy(decision: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match decision {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

use tracing::{debug, instrument};

use crate::domain::{
    authentication::{
        ports::{AuthService, TokenDecoder},
        value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput, Identity},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    storage::ports::{AssetStoragePort, StoredFileRepository},
};

impl<SF, AS, TD, HC> AuthService for Service<SF, AS, TD, HC>
where
    SF: StoredFileRepository,
    AS: AssetStoragePort,
    TD: TokenDecoder,
    HC: HealthCheckRepository,
{
    #[instrument(skip_all)]
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_decoder.decode(&input.token)?;
        let identity = Identity::from(claims);

        debug!(user_id = identity.user_id, login = %identity.login, "Request authorized");

        Ok(AuthorizeRequestOutput { identity })
    }
}

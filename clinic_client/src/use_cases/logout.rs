use crate::domain::entities::SESSION_KEY;
use crate::domain::errors::ClientError;
use crate::domain::ports::SessionStore;

// Response returned by the logout use case.
pub struct LogoutResponse {
    // False when there was no session to clear.
    pub cleared: bool,
}

// Logout use case with injected dependencies. Local only, no network call.
pub struct LogoutUseCase<S> {
    pub store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<LogoutResponse, ClientError> {
        let cleared = self
            .store
            .remove(SESSION_KEY)
            .await
            .map_err(|err| ClientError::storage(format!("failed to clear session: {err}")))?;

        tracing::info!(cleared, "signed out.");
        Ok(LogoutResponse { cleared })
    }
}

use crate::domain::entities::{SESSION_KEY, SessionRecord};
use crate::domain::errors::ClientError;
use crate::domain::ports::SessionStore;

// Reads the signed-in user back from the session store.
pub struct CurrentUserUseCase<S> {
    pub store: S,
}

impl<S> CurrentUserUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self) -> Result<Option<SessionRecord>, ClientError> {
        let Some(raw) = self
            .store
            .get(SESSION_KEY)
            .await
            .map_err(|err| ClientError::storage(format!("failed to read session: {err}")))?
        else {
            return Ok(None);
        };

        // A corrupt record is reported, not silently treated as signed out.
        serde_json::from_str(&raw).map(Some).map_err(|err| {
            tracing::warn!(error = %err, "stored session is corrupt.");
            ClientError::storage(format!("stored session is corrupt: {err}"))
        })
    }
}

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{SESSION_KEY, SessionRecord};
use crate::domain::errors::{ClientError, ErrorKind, GatewayError};
use crate::domain::ports::SessionStore;

// Turn an auth reply into a stored session, or explain why it is not one.
pub(crate) async fn persist_session<S>(
    store: &S,
    reply: Value,
    fallback: &str,
) -> Result<SessionRecord, ClientError>
where
    S: SessionStore + ?Sized,
{
    let has_token = reply
        .get("token")
        .and_then(Value::as_str)
        .is_some_and(|token| !token.is_empty());
    if !has_token {
        let message = reply
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback);
        return Err(ClientError::new(ErrorKind::Rejected, message));
    }

    let record = SessionRecord::deserialize(&reply).map_err(|err| {
        tracing::error!(error = %err, "auth reply is not a session record.");
        ClientError::new(ErrorKind::Transport, fallback)
    })?;

    // Store the reply exactly as the backend sent it, overwriting any previous session.
    store
        .set(SESSION_KEY, reply.to_string())
        .await
        .map_err(|err| ClientError::storage(format!("failed to store session: {err}")))?;

    Ok(record)
}

// Auth failures only surface the backend's own message.
pub(crate) fn auth_failure(err: GatewayError, fallback: &str) -> ClientError {
    tracing::warn!(error = %err, "auth request failed.");
    let message = err.upstream_message().unwrap_or(fallback).to_string();
    ClientError::new(ErrorKind::Transport, message)
}

use crate::domain::entities::{Credentials, SessionRecord};
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthGateway, LoginRequest, SessionStore};
use crate::use_cases::session::{auth_failure, persist_session};
use crate::use_cases::validation::validate_login_data;

pub const LOGIN_FALLBACK: &str = "An error occurred during login";

// Login use case with injected dependencies.
pub struct LoginUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> LoginUseCase<A, S>
where
    A: AuthGateway,
    S: SessionStore,
{
    #[tracing::instrument(name = "login", skip_all)]
    pub async fn execute(&self, data: Credentials) -> Result<SessionRecord, ClientError> {
        if let Some(errors) = validate_login_data(&data) {
            let message = errors.first_message().unwrap_or(LOGIN_FALLBACK);
            return Err(ClientError::validation(message));
        }

        let reply = self
            .auth
            .login(LoginRequest {
                email: data.email,
                password: data.password,
            })
            .await
            .map_err(|err| auth_failure(err, LOGIN_FALLBACK))?;

        let record = persist_session(&self.store, reply, LOGIN_FALLBACK).await?;
        tracing::info!(user_id = %record.id, role = ?record.role, "signed in.");
        Ok(record)
    }
}

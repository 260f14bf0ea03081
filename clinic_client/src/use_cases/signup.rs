use crate::domain::entities::{Credentials, SessionRecord};
use crate::domain::errors::ClientError;
use crate::domain::ports::{AuthGateway, SessionStore, SignupRequest};
use crate::use_cases::session::{auth_failure, persist_session};
use crate::use_cases::validation::validate_signup_data;

pub const SIGNUP_FALLBACK: &str = "An error occurred during signup";

// Signup use case with injected dependencies.
pub struct SignupUseCase<A, S> {
    pub auth: A,
    pub store: S,
}

impl<A, S> SignupUseCase<A, S>
where
    A: AuthGateway,
    S: SessionStore,
{
    #[tracing::instrument(name = "signup", skip_all)]
    pub async fn execute(&self, data: Credentials) -> Result<SessionRecord, ClientError> {
        if let Some(errors) = validate_signup_data(&data) {
            let message = errors.first_message().unwrap_or(SIGNUP_FALLBACK);
            return Err(ClientError::validation(message));
        }

        let reply = self
            .auth
            .signup(SignupRequest {
                email: data.email,
                password: data.password,
                name: data.name.unwrap_or_default(),
            })
            .await
            .map_err(|err| auth_failure(err, SIGNUP_FALLBACK))?;

        let record = persist_session(&self.store, reply, SIGNUP_FALLBACK).await?;
        tracing::info!(user_id = %record.id, role = ?record.role, "account created.");
        Ok(record)
    }
}

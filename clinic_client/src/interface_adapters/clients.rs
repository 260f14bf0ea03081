use crate::domain::entities::{AppointmentFormData, ContactFormData, SubscriptionData};
use crate::domain::errors::GatewayError;
use crate::domain::ports::{AuthGateway, FormGateway, FormReply, LoginRequest, SignupRequest};
use crate::interface_adapters::protocol::{
    APPOINTMENT_PATH, CONTACT_PATH, ErrorResponse, LOGIN_PATH, SIGNUP_PATH, SUBSCRIBE_PATH,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

// Thin wrapper around reqwest for the clinic REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<Response, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "posting to api.");
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let status = res.status();

        // Keep the upstream status/message so callers can show the backend's reason.
        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|payload| payload.message);
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res)
    }

    async fn post_auth<B>(&self, path: &str, body: &B) -> Result<Value, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        self.post(path, body)
            .await?
            .json::<Value>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }

    async fn post_form<B>(&self, path: &str, body: &B) -> Result<FormReply, GatewayError>
    where
        B: Serialize + ?Sized,
    {
        let bytes = self
            .post(path, body)
            .await?
            .bytes()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        // A body that is not JSON counts as a failed submission without a message.
        let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
        Ok(FormReply::from_body(&body))
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, req: LoginRequest) -> Result<Value, GatewayError> {
        self.post_auth(LOGIN_PATH, &req).await
    }

    async fn signup(&self, req: SignupRequest) -> Result<Value, GatewayError> {
        self.post_auth(SIGNUP_PATH, &req).await
    }
}

#[async_trait]
impl FormGateway for ApiClient {
    async fn send_contact(&self, form: &ContactFormData) -> Result<FormReply, GatewayError> {
        self.post_form(CONTACT_PATH, form).await
    }

    async fn send_appointment(
        &self,
        form: &AppointmentFormData,
    ) -> Result<FormReply, GatewayError> {
        self.post_form(APPOINTMENT_PATH, form).await
    }

    async fn send_subscription(
        &self,
        form: &SubscriptionData,
    ) -> Result<FormReply, GatewayError> {
        self.post_form(SUBSCRIBE_PATH, form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_base_url_has_trailing_slash_then_it_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");

        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::{AppointmentFormData, ContactFormData, SubscriptionData};
use crate::domain::errors::GatewayError;

// Serde derives in this layer leak the wire format inwards; accepted to avoid
// a second set of mirror types.
// Payload sent to the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Payload sent to the signup endpoint.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

// Business result returned by every form endpoint.
#[derive(Debug, Default, PartialEq)]
pub struct FormReply {
    pub success: bool,
    pub message: Option<String>,
}

impl FormReply {
    // Fields are read one by one so a badly typed success flag does not hide
    // the message. Anything but a literal `true` is a failure.
    pub fn from_body(body: &Value) -> Self {
        Self {
            success: body.get("success").and_then(Value::as_bool) == Some(true),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

// Port for the browser-style key-value storage that holds the session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    async fn set(&self, key: &str, value: String) -> Result<(), String>;
    async fn remove(&self, key: &str) -> Result<bool, String>;
}

// Port for the auth endpoints. Replies are returned raw so the use case can
// decide what counts as a session.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, req: LoginRequest) -> Result<Value, GatewayError>;
    async fn signup(&self, req: SignupRequest) -> Result<Value, GatewayError>;
}

// Port for the public form endpoints.
#[async_trait]
pub trait FormGateway: Send + Sync {
    async fn send_contact(&self, form: &ContactFormData) -> Result<FormReply, GatewayError>;
    async fn send_appointment(
        &self,
        form: &AppointmentFormData,
    ) -> Result<FormReply, GatewayError>;
    async fn send_subscription(&self, form: &SubscriptionData)
    -> Result<FormReply, GatewayError>;
}

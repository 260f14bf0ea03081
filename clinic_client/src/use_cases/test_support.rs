use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::entities::{AppointmentFormData, ContactFormData, SubscriptionData};
use crate::domain::errors::GatewayError;
use crate::domain::ports::{
    AuthGateway, FormGateway, FormReply, LoginRequest, SessionStore, SignupRequest,
};

// Auth reply shaped like the backend's successful login/signup response.
pub(crate) fn session_reply(role: &str) -> Value {
    json!({
        "id": "user-1",
        "name": "Alice",
        "email": "a@b.co",
        "role": role,
        "token": "token-1",
        "message": "Login successful"
    })
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
    pub remove: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_value(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.values.lock().expect("values mutex poisoned");
        guard.insert(key.into(), value.into());
    }

    pub(crate) fn get_test_value(&self, key: &str) -> Option<String> {
        let guard = self.values.lock().expect("values mutex poisoned");
        guard.get(key).cloned()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.values.lock().expect("values mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        if self.failures.set {
            return Err("set failed".to_string());
        }

        let mut guard = self.values.lock().expect("values mutex poisoned");
        guard.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.values.lock().expect("values mutex poisoned");
        Ok(guard.remove(key).is_some())
    }
}

// Auth gateway answering every call with the same scripted reply.
#[derive(Clone)]
pub(crate) struct FakeAuthGateway {
    reply: Result<Value, GatewayError>,
    calls: Arc<AtomicUsize>,
    // Last request body as JSON, for payload assertions.
    last_body: Arc<Mutex<Option<Value>>>,
}

impl FakeAuthGateway {
    pub(crate) fn replying(reply: Result<Value, GatewayError>) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_body: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_body(&self) -> Option<Value> {
        self.last_body.lock().expect("body mutex poisoned").clone()
    }

    fn record(&self, body: Value) -> Result<Value, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().expect("body mutex poisoned") = Some(body);
        self.reply.clone()
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn login(&self, req: LoginRequest) -> Result<Value, GatewayError> {
        self.record(serde_json::to_value(&req).expect("login request encodes"))
    }

    async fn signup(&self, req: SignupRequest) -> Result<Value, GatewayError> {
        self.record(serde_json::to_value(&req).expect("signup request encodes"))
    }
}

// Form gateway answering every call with the same scripted reply.
#[derive(Clone)]
pub(crate) struct FakeFormGateway {
    reply: Result<Value, GatewayError>,
    calls: Arc<AtomicUsize>,
}

impl FakeFormGateway {
    pub(crate) fn replying(reply: Result<Value, GatewayError>) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<FormReply, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let body = self.reply.clone()?;
        Ok(FormReply::from_body(&body))
    }
}

#[async_trait]
impl FormGateway for FakeFormGateway {
    async fn send_contact(&self, _form: &ContactFormData) -> Result<FormReply, GatewayError> {
        self.record()
    }

    async fn send_appointment(
        &self,
        _form: &AppointmentFormData,
    ) -> Result<FormReply, GatewayError> {
        self.record()
    }

    async fn send_subscription(
        &self,
        _form: &SubscriptionData,
    ) -> Result<FormReply, GatewayError> {
        self.record()
    }
}

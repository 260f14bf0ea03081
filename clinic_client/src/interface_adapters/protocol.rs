use serde::Deserialize;

pub const CONTACT_PATH: &str = "/api/contact";
pub const APPOINTMENT_PATH: &str = "/api/appointment";
pub const SUBSCRIBE_PATH: &str = "/api/sub";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";

// Error envelope returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::{Credentials, ValidationErrors};

// Something, an @, something, a dot, something. No whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("EMAIL_REGEX: invalid regex pattern"));

const MIN_PASSWORD_LEN: usize = 6;
const MIN_NAME_LEN: usize = 2;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const PASSWORD_REQUIRED: &str = "Password is required";

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

// Every field is checked, so the caller can show all problems at once.
pub fn validate_signup_data(data: &Credentials) -> Option<ValidationErrors> {
    let name = data.name.as_deref().unwrap_or_default();

    ValidationErrors {
        name: (name.trim().chars().count() < MIN_NAME_LEN).then(|| NAME_TOO_SHORT.to_string()),
        email: (!validate_email(&data.email)).then(|| INVALID_EMAIL.to_string()),
        password: (!validate_password(&data.password)).then(|| PASSWORD_TOO_SHORT.to_string()),
    }
    .into_option()
}

// Login only checks shape; the password rules are enforced at signup.
pub fn validate_login_data(data: &Credentials) -> Option<ValidationErrors> {
    ValidationErrors {
        name: None,
        email: (!validate_email(&data.email)).then(|| INVALID_EMAIL.to_string()),
        password: data
            .password
            .is_empty()
            .then(|| PASSWORD_REQUIRED.to_string()),
    }
    .into_option()
}

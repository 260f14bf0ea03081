use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// Fixed storage key for the signed-in user's session record.
pub const SESSION_KEY: &str = "user";

// Credentials collected by the sign-in and sign-up forms.
#[derive(Clone, Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    // Only the sign-up form collects a name.
    pub name: Option<String>,
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    pub fn signup(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: Some(name.into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Patient,
}

// Backends disagree on whether user ids are strings or numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

// Session record returned by the auth endpoints. The token and role are what
// the client relies on; display fields may be absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    pub token: String,
    #[serde(default)]
    pub message: String,
    // Anything else the backend sent; kept so the stored record round-trips unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    // Only doctors get the analytics dashboard.
    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
}

/// Per-field validation messages.
///
/// Fields are kept in a fixed order (name, email, password) so the first
/// reported message is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        [Field::Name, Field::Email, Field::Password]
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    pub fn first_message(&self) -> Option<&str> {
        self.iter().next().map(|(_, message)| message)
    }

    // None when every field passed.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppointmentFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub datetime: String,
    pub department: String,
    pub doctor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AppointmentFormData {
    pub fn has_required_fields(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.datetime,
            &self.department,
            &self.doctor,
        ]
        .iter()
        .all(|value| !value.is_empty())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubscriptionData {
    pub email: String,
}

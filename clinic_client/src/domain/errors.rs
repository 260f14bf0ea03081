use std::fmt;

// Where a client-side failure came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    // Rejected locally before any request was sent.
    Validation,
    // The request went through but the backend reported a negative result.
    Rejected,
    // Network failure or non-2xx response.
    Transport,
    // Session store failure or an unreadable stored record.
    Storage,
}

// Error surfaced to the form layer; the message is always human readable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ClientError {}

// Failure reported by a gateway adapter before use cases normalize it.
#[derive(Clone, Debug)]
pub enum GatewayError {
    // The request never produced a response.
    Transport(String),
    // Non-2xx response, with the body's message when it had one.
    Upstream { status: u16, message: Option<String> },
    // 2xx response whose body could not be read.
    Decode(String),
}

impl GatewayError {
    // Message supplied by the backend itself, if any.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            GatewayError::Upstream {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    // Message of the underlying transport failure, if any.
    pub fn transport_message(&self) -> Option<String> {
        match self {
            GatewayError::Transport(message) | GatewayError::Decode(message)
                if !message.is_empty() =>
            {
                Some(message.clone())
            }
            GatewayError::Upstream { status, .. } => {
                Some(format!("Request failed with status code {status}"))
            }
            _ => None,
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(err) => write!(f, "api transport error: {err}"),
            GatewayError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "api upstream error {status}: {message}")
                } else {
                    write!(f, "api upstream error {status}")
                }
            }
            GatewayError::Decode(err) => write!(f, "api response decode error: {err}"),
        }
    }
}

impl std::error::Error for GatewayError {}

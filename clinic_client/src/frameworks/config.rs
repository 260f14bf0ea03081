use std::{env, fmt, path::PathBuf};
use url::Url;

// Runtime configuration read from the environment (.env is loaded first).

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const STORAGE_DIR_NAME: &str = "clinic_client";

pub fn api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

pub fn storage_dir() -> PathBuf {
    if let Ok(dir) = env::var("CLINIC_STORAGE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_DIR_NAME)
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBaseUrl { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { value, reason } => {
                write!(f, "invalid API base URL {value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// The base URL must be absolute http(s); paths are appended verbatim.
pub fn parse_base_url(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(value.trim_end_matches('/').to_string())
}

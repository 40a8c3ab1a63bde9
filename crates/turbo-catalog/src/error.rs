//! Storefront error types.

use http::StatusCode;
use thiserror::Error;

/// Why the catalog could not be loaded.
///
/// A load error is terminal for the page: there is no retry and no partial
/// catalog is shown.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("Catalog request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Catalog request returned status {0}")]
    Status(StatusCode),

    /// The body is not a catalog document.
    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Message shown to shoppers, whatever the cause.
    pub fn user_message(&self) -> &'static str {
        "Failed to load products."
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}

/// Errors reading the page configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_generic() {
        let errors = [
            LoadError::Transport("offline".into()),
            LoadError::Status(StatusCode::NOT_FOUND),
            LoadError::Malformed("missing field `products`".into()),
        ];
        for e in errors {
            assert_eq!(e.user_message(), "Failed to load products.");
        }
    }

    #[test]
    fn test_status_display() {
        let e = LoadError::Status(StatusCode::NOT_FOUND);
        assert_eq!(e.to_string(), "Catalog request returned status 404 Not Found");
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to connect to backend: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text suitable for a viewer-facing notification.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to write '{key}' to session storage")]
    Write { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_is_the_server_text() {
        let err = ApiError::Http {
            status: 400,
            message: "Display name is too long".to_string(),
        };
        assert_eq!(err.message(), "Display name is too long");
        assert_eq!(err.to_string(), "HTTP 400: Display name is too long");
    }

    #[test]
    fn other_errors_use_their_display() {
        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.message(), "Failed to connect to backend: offline");
    }
}

use thiserror::Error;

/// Failure of a backend call. Cloneable so screens can keep it in state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },
}

impl ApiError {
    pub fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("Registration failed: {0}")]
    RegistrationFailed(String),

    #[error("Unable to reach the server. {0}")]
    Network(#[from] ApiError),
}

impl AuthError {
    pub fn registration(reason: impl Into<String>) -> Self {
        Self::RegistrationFailed(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password. Please try again."
        );
        let e = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(e.to_string(), "Server responded with 500: boom");
        let auth: AuthError = ApiError::Network("connection refused".into()).into();
        assert!(matches!(auth, AuthError::Network(_)));
        assert_eq!(
            ApiError::not_found("users", "u9").to_string(),
            "users record not found: u9"
        );
    }
}

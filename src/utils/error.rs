use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned unexpected status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Unexpected {resource} response: {message}")]
    Parse {
        resource: &'static str,
        message: String,
    },

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not build the HTTP client: {source}")]
    ClientSetup {
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    NotFound,
    Parse,
    Validation,
    Config,
    Io,
}

impl IntegrationError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } | Self::UnexpectedStatus { .. } => ErrorCategory::Network,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Parse { .. } => ErrorCategory::Parse,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Config { .. } | Self::ClientSetup { .. } => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Network { source, .. } if source.is_timeout() => {
                "The remote service did not answer in time.".to_string()
            }
            Self::Network { url, .. } => format!("Could not reach {url}."),
            Self::UnexpectedStatus { status, .. } => {
                format!("The remote service answered with HTTP {status}.")
            }
            Self::NotFound { resource, id } => format!("No {resource} exists with id {id}."),
            Self::Parse { resource, .. } => {
                format!("The {resource} service returned data in an unexpected shape.")
            }
            Self::Validation { field, message } => {
                format!("Fetched data is inconsistent: {field} {message}.")
            }
            Self::Config { field, reason, .. } => format!("Option --{field} is invalid: {reason}."),
            Self::ClientSetup { source } => {
                format!("The HTTP client could not be initialised locally: {source}.")
            }
            Self::Io(e) => format!("Terminal input/output failed: {e}."),
        }
    }

    /// Process exit code for a run aborted by this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntegrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let not_found = IntegrationError::NotFound {
            resource: "user",
            id: 999,
        };
        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(not_found.to_string(), "user 999 not found");

        let status = IntegrationError::UnexpectedStatus {
            url: "http://localhost/users/1".to_string(),
            status: 503,
        };
        assert_eq!(status.category(), ErrorCategory::Network);

        let config = IntegrationError::Config {
            field: "timeout-seconds".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
    }

    #[test]
    fn test_client_setup_is_not_reported_as_unreachable_service() {
        let source = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err = IntegrationError::ClientSetup { source };

        assert_eq!(err.category(), ErrorCategory::Config);
        let message = err.user_friendly_message();
        assert!(message.starts_with("The HTTP client could not be initialised locally"));
        assert!(!message.contains("Could not reach"));
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = IntegrationError::validation("user.email", "must not be empty");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.user_friendly_message().contains("user.email"));
    }
}

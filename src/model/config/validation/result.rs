use serde::Serialize;

use super::ValidationError;

/// Outcome of validating one configuration.
///
/// `message` is set exactly when the configuration is invalid; the only way to
/// build one is through `ok`, `invalid` or a `ValidationError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(err: ValidationError) -> Self {
        Self::invalid(err.error)
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => err.into(),
        }
    }
}

use crate::model::{ConfigValidator, ValidationError};

impl ConfigValidator {
    /// Present value of a required field, or the error carrying `message`
    pub(crate) fn require<'a>(
        value: Option<&'a str>,
        field: &str,
        message: &str,
    ) -> Result<&'a str, ValidationError> {
        value.ok_or_else(|| ValidationError::new(field, message))
    }
}

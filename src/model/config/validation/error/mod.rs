mod trait_display;
mod trait_error;

/// First failed check of a configuration; `error` is the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

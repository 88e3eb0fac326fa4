use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelConfigError {
    #[error("Document error: {0}")]
    DocumentError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl From<&str> for ModelConfigError {
    fn from(error: &str) -> Self {
        ModelConfigError::DocumentError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelConfigError>;

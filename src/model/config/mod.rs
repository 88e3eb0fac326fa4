mod configuration_record;
mod field;
mod typed_model_config;
mod validation;

pub use crate::model::strategies::{
    embedding::{EmbeddingConfig, EmbeddingProvider},
    llm::{LlmConfig, LlmProvider},
    multi_modal::MultiModalConfig,
    ocr::OcrConfig,
    provider_model::ProviderModelConfig,
};

pub use configuration_record::ConfigurationRecord;
pub use field::{field_text, is_present};
pub use typed_model_config::TypedModelConfig;
pub use validation::{
    validate_model_configuration,
    ConfigValidator,
    ValidationError,
    ValidationResult,
};

/// Field names recognized in a configuration record
pub mod fields {
    pub const API_KEY: &str = "apiKey";
    pub const MODEL: &str = "model";
    pub const MODEL_TYPE: &str = "modelType";
    pub const ENDPOINT: &str = "endpoint";
    pub const DEPLOYMENT_NAME: &str = "deploymentName";
    pub const NAME: &str = "name";
}

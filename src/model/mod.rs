pub mod config;
pub mod strategies;

mod model_type;
mod ai_model;
mod document;

pub use ai_model::{has_configuration, validate_model_has_configuration, AiModel};
pub use config::*;
pub use document::{AiModelsDocument, ConfigurationReport, ValidationReport};
pub use model_type::ModelType;

/// Supported model type tags, in the order the settings screen lists them
pub fn get_supported_model_types() -> Vec<&'static str> {
    ModelType::ALL.iter().map(|t| t.as_str()).collect()
}

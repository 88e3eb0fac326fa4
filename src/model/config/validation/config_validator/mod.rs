mod require;
mod validate;
mod validate_typed;

pub use validate::validate_model_configuration;

/// Field checks for model configuration forms, one entry point per model type
pub struct ConfigValidator;

use crate::model::{config::fields, ConfigValidator, ProviderModelConfig, ValidationError};

impl ConfigValidator {
    pub fn validate_provider_model(cfg: &ProviderModelConfig) -> Result<(), ValidationError> {
        Self::require(cfg.api_key.as_deref(), fields::API_KEY, "API Key is required")?;
        Self::require(cfg.name.as_deref(), fields::NAME, "Provider name is required")?;
        Self::require(cfg.model.as_deref(), fields::MODEL, "Model name is required")?;
        Ok(())
    }
}

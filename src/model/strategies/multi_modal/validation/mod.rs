use crate::model::{config::fields, ConfigValidator, MultiModalConfig, ValidationError};

impl ConfigValidator {
    pub fn validate_multi_modal(cfg: &MultiModalConfig) -> Result<(), ValidationError> {
        Self::require(cfg.api_key.as_deref(), fields::API_KEY, "API Key is required")?;
        let name = Self::require(cfg.name.as_deref(), fields::NAME, "Provider name is required")?;
        Self::require(cfg.model.as_deref(), fields::MODEL, "Model name is required")?;

        if cfg.requires_endpoint() {
            let message = format!("Endpoint is required for {}", name);
            Self::require(cfg.endpoint.as_deref(), fields::ENDPOINT, &message)?;
        }

        Ok(())
    }
}

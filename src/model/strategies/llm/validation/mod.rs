use crate::model::{
    config::fields,
    strategies::llm::LlmProvider,
    ConfigValidator,
    LlmConfig,
    ValidationError,
};

impl ConfigValidator {
    pub fn validate_llm(cfg: &LlmConfig) -> Result<(), ValidationError> {
        Self::require(cfg.api_key.as_deref(), fields::API_KEY, "API Key is required")?;
        Self::require(cfg.model.as_deref(), fields::MODEL, "Model name is required")?;

        match cfg.provider {
            // Client ID is optional for OpenAI, nothing else to check
            Some(LlmProvider::OpenAi) => Ok(()),
            Some(LlmProvider::Azure) => {
                Self::require(
                    cfg.endpoint.as_deref(),
                    fields::ENDPOINT,
                    "Endpoint is required for Azure OpenAI",
                )?;
                Self::require(
                    cfg.deployment_name.as_deref(),
                    fields::DEPLOYMENT_NAME,
                    "Deployment Name is required for Azure OpenAI",
                )?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

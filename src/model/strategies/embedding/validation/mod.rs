use crate::model::{
    config::fields,
    strategies::embedding::EmbeddingProvider,
    ConfigValidator,
    EmbeddingConfig,
    ValidationError,
};

impl ConfigValidator {
    pub fn validate_embedding(cfg: &EmbeddingConfig) -> Result<(), ValidationError> {
        if cfg.provider == Some(EmbeddingProvider::Default) {
            return Ok(());
        }

        Self::require(cfg.api_key.as_deref(), fields::API_KEY, "API Key is required")?;
        Self::require(cfg.model.as_deref(), fields::MODEL, "Model name is required")?;

        if cfg.provider == Some(EmbeddingProvider::AzureOpenAi) {
            Self::require(
                cfg.endpoint.as_deref(),
                fields::ENDPOINT,
                "Endpoint is required for Azure OpenAI",
            )?;
        }

        Ok(())
    }
}

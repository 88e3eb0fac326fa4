use crate::model::{ConfigValidator, TypedModelConfig, ValidationError};

impl ConfigValidator {
    /// Type-specific validation; stops at the first missing field
    pub fn validate_typed(config: &TypedModelConfig) -> Result<(), ValidationError> {
        match config {
            TypedModelConfig::Llm(cfg) => Self::validate_llm(cfg),
            TypedModelConfig::Ocr(cfg) => Self::validate_ocr(cfg),
            TypedModelConfig::Embedding(cfg) => Self::validate_embedding(cfg),
            TypedModelConfig::Slm(cfg) | TypedModelConfig::Reasoning(cfg) => {
                Self::validate_provider_model(cfg)
            }
            TypedModelConfig::MultiModal(cfg) => Self::validate_multi_modal(cfg),
        }
    }
}

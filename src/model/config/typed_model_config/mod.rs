mod from_record;
mod model_type;

use crate::model::config::{
    EmbeddingConfig,
    LlmConfig,
    MultiModalConfig,
    OcrConfig,
    ProviderModelConfig,
};

/// Enum wrapping the configuration shape of every model type
#[derive(Debug, Clone, PartialEq)]
pub enum TypedModelConfig {
    Llm(LlmConfig),
    Ocr(OcrConfig),
    Embedding(EmbeddingConfig),
    Slm(ProviderModelConfig),
    Reasoning(ProviderModelConfig),
    MultiModal(MultiModalConfig),
}

use crate::model::{
    config::{
        ConfigurationRecord,
        EmbeddingConfig,
        LlmConfig,
        MultiModalConfig,
        OcrConfig,
        ProviderModelConfig,
        TypedModelConfig,
    },
    ModelType,
};

impl TypedModelConfig {
    /// Read a record as the configuration of `model_type`
    pub fn from_record(model_type: ModelType, record: &ConfigurationRecord) -> Self {
        match model_type {
            ModelType::Llm => Self::Llm(LlmConfig::from_record(record)),
            ModelType::Ocr => Self::Ocr(OcrConfig::from_record(record)),
            ModelType::Embedding => Self::Embedding(EmbeddingConfig::from_record(record)),
            ModelType::Slm => Self::Slm(ProviderModelConfig::from_record(record)),
            ModelType::Reasoning => Self::Reasoning(ProviderModelConfig::from_record(record)),
            ModelType::MultiModal => Self::MultiModal(MultiModalConfig::from_record(record)),
        }
    }
}

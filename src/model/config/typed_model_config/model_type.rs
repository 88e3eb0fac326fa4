use super::TypedModelConfig;
use crate::model::ModelType;

impl TypedModelConfig {
    pub fn model_type(&self) -> ModelType {
        match self {
            Self::Llm(_) => ModelType::Llm,
            Self::Ocr(_) => ModelType::Ocr,
            Self::Embedding(_) => ModelType::Embedding,
            Self::Slm(_) => ModelType::Slm,
            Self::Reasoning(_) => ModelType::Reasoning,
            Self::MultiModal(_) => ModelType::MultiModal,
        }
    }
}

use crate::model::{AiModel, ModelType};

/// Whether the first model of `model_type` has at least one saved configuration.
///
/// Later models with the same type are not consulted.
pub fn has_configuration(models: &[AiModel], model_type: ModelType) -> bool {
    models
        .iter()
        .find(|m| m.model_type == model_type)
        .is_some_and(|m| !m.configurations.is_empty())
}

/// String-typed form of [`has_configuration`]; an unknown type never has configurations.
pub fn validate_model_has_configuration(ai_models: &[AiModel], model_type: &str) -> bool {
    model_type
        .parse::<ModelType>()
        .is_ok_and(|t| has_configuration(ai_models, t))
}

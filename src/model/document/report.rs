use serde::Serialize;

use super::AiModelsDocument;
use crate::{
    log_warn,
    model::{has_configuration, ConfigValidator, ModelType, ValidationResult},
};

/// Result for one saved configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationReport {
    pub model_type: ModelType,
    /// Position within the model's configurations
    pub index: usize,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub configurations: Vec<ConfigurationReport>,
    /// Required model types with no saved configuration
    pub missing_types: Vec<ModelType>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing_types.is_empty() && self.configurations.iter().all(|c| c.result.is_valid())
    }

    pub fn invalid(&self) -> impl Iterator<Item = &ConfigurationReport> {
        self.configurations.iter().filter(|c| !c.result.is_valid())
    }
}

impl AiModelsDocument {
    /// Validate every saved configuration and check that each `required` type is configured
    pub fn validate(&self, required: &[ModelType]) -> ValidationReport {
        let configurations = self
            .models
            .iter()
            .flat_map(|model| {
                model
                    .configurations
                    .iter()
                    .enumerate()
                    .map(move |(index, config)| ConfigurationReport {
                        model_type: model.model_type,
                        index,
                        result: ConfigValidator::validate(model.model_type.as_str(), config),
                    })
            })
            .collect();

        let mut missing_types = Vec::new();
        for &model_type in required {
            if missing_types.contains(&model_type) {
                continue;
            }
            if !has_configuration(&self.models, model_type) {
                log_warn!("no saved configuration for required model type '{}'", model_type);
                missing_types.push(model_type);
            }
        }

        ValidationReport {
            configurations,
            missing_types,
        }
    }
}

mod has_configuration;

use serde::{Deserialize, Serialize};

use crate::model::{ConfigurationRecord, ModelType};

pub use has_configuration::{has_configuration, validate_model_has_configuration};

/// A model type together with the configurations saved for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiModel {
    #[serde(rename = "type")]
    pub model_type: ModelType,

    #[serde(default)]
    pub configurations: Vec<ConfigurationRecord>,
}

impl AiModel {
    pub fn new(model_type: ModelType) -> Self {
        Self {
            model_type,
            configurations: Vec::new(),
        }
    }

    pub fn with_configuration(mut self, config: ConfigurationRecord) -> Self {
        self.configurations.push(config);
        self
    }
}

mod load_from_path;
mod report;

use serde::{Deserialize, Serialize};

use crate::{error::Result, model::AiModel};

pub use report::{ConfigurationReport, ValidationReport};

/// Saved model configurations for one account, as exported from the settings screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiModelsDocument {
    #[serde(default)]
    pub models: Vec<AiModel>,
}

impl AiModelsDocument {
    pub fn new(models: Vec<AiModel>) -> Self {
        Self { models }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

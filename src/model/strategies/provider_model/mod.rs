//! Named-provider model configuration shared by small language models and
//! reasoning models

mod validation;

use crate::model::{config::fields, ConfigurationRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderModelConfig {
    pub api_key: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
}

impl ProviderModelConfig {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            api_key: record.text(fields::API_KEY),
            name: record.text(fields::NAME),
            model: record.text(fields::MODEL),
        }
    }
}

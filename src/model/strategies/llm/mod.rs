//! LLM provider configuration (OpenAI or Azure OpenAI deployments)

mod validation;

use crate::model::{config::fields, ConfigurationRecord};

/// Which LLM backend the form was filled in for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Azure,
    Other(String),
}

impl LlmProvider {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "openai" => Self::OpenAi,
            "azure" => Self::Azure,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    /// From the `modelType` field
    pub provider: Option<LlmProvider>,
    pub endpoint: Option<String>,
    pub deployment_name: Option<String>,
}

impl LlmConfig {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            api_key: record.text(fields::API_KEY),
            model: record.text(fields::MODEL),
            provider: record.text(fields::MODEL_TYPE).map(|t| LlmProvider::parse(&t)),
            endpoint: record.text(fields::ENDPOINT),
            deployment_name: record.text(fields::DEPLOYMENT_NAME),
        }
    }
}

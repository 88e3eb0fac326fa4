//! Embedding provider configuration

mod validation;

use crate::model::{config::fields, ConfigurationRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbeddingProvider {
    /// Built-in embeddings, nothing to configure
    Default,
    OpenAi,
    AzureOpenAi,
    Other(String),
}

impl EmbeddingProvider {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "default" => Self::Default,
            "openai" => Self::OpenAi,
            "azureOpenAI" => Self::AzureOpenAi,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    /// From the `modelType` field
    pub provider: Option<EmbeddingProvider>,
    pub endpoint: Option<String>,
}

impl EmbeddingConfig {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            api_key: record.text(fields::API_KEY),
            model: record.text(fields::MODEL),
            provider: record
                .text(fields::MODEL_TYPE)
                .map(|t| EmbeddingProvider::parse(&t)),
            endpoint: record.text(fields::ENDPOINT),
        }
    }
}

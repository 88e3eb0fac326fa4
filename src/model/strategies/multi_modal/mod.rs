//! Multi-modal provider configuration

mod validation;

use crate::model::{config::fields, ConfigurationRecord};

/// Multi-modal providers whose form also asks for an endpoint, matched by display name
pub const ENDPOINT_REQUIRED_PROVIDERS: [&str; 2] = ["Azure OpenAI", "Google AI"];

#[derive(Debug, Clone, PartialEq)]
pub struct MultiModalConfig {
    pub api_key: Option<String>,
    pub name: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

impl MultiModalConfig {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            api_key: record.text(fields::API_KEY),
            name: record.text(fields::NAME),
            model: record.text(fields::MODEL),
            endpoint: record.text(fields::ENDPOINT),
        }
    }

    pub fn requires_endpoint(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| ENDPOINT_REQUIRED_PROVIDERS.contains(&name))
    }
}

//! OCR provider configuration

mod validation;

use crate::model::{config::fields, ConfigurationRecord};

/// OCR providers whose form also asks for an endpoint, matched by display name
pub const ENDPOINT_REQUIRED_PROVIDERS: [&str; 2] =
    ["Azure Document Intelligence", "Google Document AI"];

#[derive(Debug, Clone, PartialEq)]
pub struct OcrConfig {
    pub api_key: Option<String>,
    pub name: Option<String>,
    pub endpoint: Option<String>,
}

impl OcrConfig {
    pub fn from_record(record: &ConfigurationRecord) -> Self {
        Self {
            api_key: record.text(fields::API_KEY),
            name: record.text(fields::NAME),
            endpoint: record.text(fields::ENDPOINT),
        }
    }

    pub fn requires_endpoint(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| ENDPOINT_REQUIRED_PROVIDERS.contains(&name))
    }
}

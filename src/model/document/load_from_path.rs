use std::{fs, path::Path};

use super::AiModelsDocument;
use crate::{error::Result, log_info};

impl AiModelsDocument {
    /// Load a document from disk; `.json` files are read as JSON, anything else as YAML
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let doc = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        log_info!("loaded {} model(s) from {}", doc.models.len(), path.display());
        Ok(doc)
    }
}

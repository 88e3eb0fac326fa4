use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of AI model a set of configurations belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    #[serde(rename = "llm")]
    Llm,

    #[serde(rename = "ocr")]
    Ocr,

    #[serde(rename = "embedding")]
    Embedding,

    #[serde(rename = "slm")]
    Slm,

    #[serde(rename = "reasoning")]
    Reasoning,

    #[serde(rename = "multiModal")]
    MultiModal,
}

impl ModelType {
    pub const ALL: [ModelType; 6] = [
        ModelType::Llm,
        ModelType::Ocr,
        ModelType::Embedding,
        ModelType::Slm,
        ModelType::Reasoning,
        ModelType::MultiModal,
    ];

    /// Wire tag, as stored with saved models
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Llm => "llm",
            Self::Ocr => "ocr",
            Self::Embedding => "embedding",
            Self::Slm => "slm",
            Self::Reasoning => "reasoning",
            Self::MultiModal => "multiModal",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown model type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("multiModal".parse::<ModelType>(), Ok(ModelType::MultiModal));
        assert!("multimodal".parse::<ModelType>().is_err());
        assert!("LLM".parse::<ModelType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&ModelType::MultiModal).unwrap();
        assert_eq!(json, "\"multiModal\"");

        let parsed: ModelType = serde_json::from_str("\"reasoning\"").unwrap();
        assert_eq!(parsed, ModelType::Reasoning);
    }

    #[test]
    fn test_tags_round_trip_through_display() {
        for t in ModelType::ALL {
            assert_eq!(t.to_string().parse::<ModelType>(), Ok(t));
        }
    }
}

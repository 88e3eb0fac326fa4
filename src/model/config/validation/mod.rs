mod error;
mod result;
mod config_validator;

pub use config_validator::{validate_model_configuration, ConfigValidator};
pub use error::ValidationError;
pub use result::ValidationResult;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigurationRecord, ModelType, TypedModelConfig};
    use serde_json::{json, Value};

    fn record(value: Value) -> ConfigurationRecord {
        ConfigurationRecord::from(value)
    }

    fn message(model_type: &str, value: Value) -> Option<String> {
        ConfigValidator::validate(model_type, &record(value))
            .message()
            .map(str::to_string)
    }

    fn is_valid(model_type: &str, value: Value) -> bool {
        ConfigValidator::validate(model_type, &record(value)).is_valid()
    }

    #[test]
    fn test_llm_openai_is_valid() {
        let result = validate_model_configuration(
            "llm",
            &record(json!({"apiKey": "k", "model": "m", "modelType": "openai"})),
        );
        assert_eq!(result, ValidationResult::ok());
    }

    #[test]
    fn test_llm_azure_requires_endpoint_then_deployment() {
        let base = json!({"apiKey": "k", "model": "m", "modelType": "azure"});
        assert_eq!(
            message("llm", base.clone()).as_deref(),
            Some("Endpoint is required for Azure OpenAI")
        );

        let mut with_endpoint = base;
        with_endpoint["endpoint"] = json!("https://example.openai.azure.com");
        assert_eq!(
            message("llm", with_endpoint.clone()).as_deref(),
            Some("Deployment Name is required for Azure OpenAI")
        );

        with_endpoint["deploymentName"] = json!("gpt-4o");
        assert!(is_valid("llm", with_endpoint));
    }

    #[test]
    fn test_llm_without_provider_only_needs_common_fields() {
        assert!(is_valid("llm", json!({"apiKey": "k", "model": "m"})));
        assert!(is_valid(
            "llm",
            json!({"apiKey": "k", "model": "m", "modelType": "anthropic"})
        ));
    }

    #[test]
    fn test_first_missing_field_wins() {
        // Everything missing: the first declared field is reported.
        for model_type in ["llm", "ocr", "embedding", "slm", "reasoning", "multiModal"] {
            assert_eq!(
                message(model_type, json!({})).as_deref(),
                Some("API Key is required"),
                "{}",
                model_type
            );
        }

        assert_eq!(
            message("llm", json!({"apiKey": "k", "modelType": "azure"})).as_deref(),
            Some("Model name is required")
        );
        assert_eq!(
            message("ocr", json!({"apiKey": "k"})).as_deref(),
            Some("Provider name is required")
        );
        assert_eq!(
            message("embedding", json!({"apiKey": "k"})).as_deref(),
            Some("Model name is required")
        );
        assert_eq!(
            message("slm", json!({"apiKey": "k", "model": "m"})).as_deref(),
            Some("Provider name is required")
        );
        assert_eq!(
            message("reasoning", json!({"apiKey": "k", "name": "DeepSeek"})).as_deref(),
            Some("Model name is required")
        );
        assert_eq!(
            message("multiModal", json!({"apiKey": "k", "name": "Azure OpenAI"})).as_deref(),
            Some("Model name is required")
        );
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        assert_eq!(
            message("slm", json!({"apiKey": "", "name": "n", "model": "m"})).as_deref(),
            Some("API Key is required")
        );
        assert_eq!(
            message("slm", json!({"apiKey": null, "name": "n", "model": "m"})).as_deref(),
            Some("API Key is required")
        );
        assert_eq!(
            message("slm", json!({"apiKey": "k", "name": 0, "model": "m"})).as_deref(),
            Some("Provider name is required")
        );
        assert_eq!(
            message("slm", json!({"apiKey": "k", "name": "n", "model": false})).as_deref(),
            Some("Model name is required")
        );
    }

    #[test]
    fn test_ocr_endpoint_by_provider_name() {
        assert_eq!(
            message("ocr", json!({"apiKey": "k", "name": "Azure Document Intelligence"}))
                .as_deref(),
            Some("Endpoint is required for Azure Document Intelligence")
        );
        assert_eq!(
            message("ocr", json!({"apiKey": "k", "name": "Google Document AI"})).as_deref(),
            Some("Endpoint is required for Google Document AI")
        );
        assert!(is_valid(
            "ocr",
            json!({"apiKey": "k", "name": "Google Document AI", "endpoint": "https://x"})
        ));
        assert!(is_valid("ocr", json!({"apiKey": "k", "name": "Tesseract"})));
    }

    #[test]
    fn test_provider_name_match_is_exact() {
        assert!(is_valid(
            "ocr",
            json!({"apiKey": "k", "name": "azure document intelligence"})
        ));
        assert!(is_valid(
            "multiModal",
            json!({"apiKey": "k", "name": "Google AI ", "model": "m"})
        ));
    }

    #[test]
    fn test_embedding_default_short_circuits() {
        assert_eq!(
            validate_model_configuration("embedding", &record(json!({"modelType": "default"}))),
            ValidationResult::ok()
        );
        assert!(is_valid("embedding", json!({"modelType": "default", "apiKey": ""})));
    }

    #[test]
    fn test_embedding_azure_requires_endpoint() {
        assert_eq!(
            message(
                "embedding",
                json!({"apiKey": "k", "model": "m", "modelType": "azureOpenAI"})
            )
            .as_deref(),
            Some("Endpoint is required for Azure OpenAI")
        );
        assert!(is_valid(
            "embedding",
            json!({"apiKey": "k", "model": "m", "modelType": "openai"})
        ));
    }

    #[test]
    fn test_multi_modal_endpoint_by_provider_name() {
        assert_eq!(
            message(
                "multiModal",
                json!({"apiKey": "k", "name": "Google AI", "model": "gemini"})
            )
            .as_deref(),
            Some("Endpoint is required for Google AI")
        );
        assert_eq!(
            message(
                "multiModal",
                json!({"apiKey": "k", "name": "Azure OpenAI", "model": "gpt-4o"})
            )
            .as_deref(),
            Some("Endpoint is required for Azure OpenAI")
        );
        assert!(is_valid(
            "multiModal",
            json!({"apiKey": "k", "name": "OpenAI", "model": "gpt-4o"})
        ));
    }

    #[test]
    fn test_unknown_model_type() {
        let result = ConfigValidator::validate("unknown", &ConfigurationRecord::new());
        assert_eq!(result, ValidationResult::invalid("Unknown model type: unknown"));

        assert_eq!(message("LLM", json!({})).as_deref(), Some("Unknown model type: LLM"));
        assert_eq!(message("", json!({})).as_deref(), Some("Unknown model type: "));
    }

    #[test]
    fn test_non_object_config_is_handled() {
        assert_eq!(message("llm", json!("apiKey")).as_deref(), Some("API Key is required"));
        assert_eq!(message("embedding", json!(null)).as_deref(), Some("API Key is required"));
    }

    #[test]
    fn test_message_present_iff_invalid() {
        let samples = [
            ("llm", json!({"apiKey": "k", "model": "m"})),
            ("llm", json!({})),
            ("embedding", json!({"modelType": "default"})),
            ("nope", json!({})),
        ];

        for (model_type, value) in samples {
            let result = ConfigValidator::validate(model_type, &record(value));
            assert_eq!(result.is_valid(), result.message().is_none());
        }

        let err = ValidationError::new("apiKey", "API Key is required");
        let from_error: ValidationResult = err.into();
        assert!(!from_error.is_valid());
        assert_eq!(from_error.message(), Some("API Key is required"));

        let from_ok: ValidationResult = Ok::<(), ValidationError>(()).into();
        assert!(from_ok.is_valid());
        assert_eq!(from_ok.message(), None);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let config = record(json!({"apiKey": "k", "name": "Azure OpenAI", "model": "m"}));
        let first = ConfigValidator::validate("multiModal", &config);
        let second = ConfigValidator::validate("multiModal", &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_typed_reports_field() {
        let typed = TypedModelConfig::from_record(
            ModelType::Llm,
            &record(json!({
                "apiKey": "k",
                "model": "m",
                "modelType": "azure",
                "endpoint": "https://x"
            })),
        );
        let err = ConfigValidator::validate_typed(&typed).unwrap_err();
        assert_eq!(err.field, "deploymentName");
        assert_eq!(
            err.to_string(),
            "deploymentName: Deployment Name is required for Azure OpenAI"
        );
    }

    #[test]
    fn test_result_serialization() {
        assert_eq!(
            serde_json::to_value(ValidationResult::ok()).unwrap(),
            json!({"valid": true})
        );
        assert_eq!(
            serde_json::to_value(ValidationResult::invalid("API Key is required")).unwrap(),
            json!({"valid": false, "message": "API Key is required"})
        );
    }
}

use crate::{
    log_debug,
    model::{ConfigValidator, ConfigurationRecord, ModelType, TypedModelConfig, ValidationResult},
};

impl ConfigValidator {
    /// Validate a configuration record against the model type it was entered for
    pub fn validate(model_type: &str, config: &ConfigurationRecord) -> ValidationResult {
        let Ok(parsed) = model_type.parse::<ModelType>() else {
            log_debug!("rejecting configuration for unknown model type '{}'", model_type);
            return ValidationResult::invalid(format!("Unknown model type: {}", model_type));
        };

        let typed = TypedModelConfig::from_record(parsed, config);
        let result: ValidationResult = Self::validate_typed(&typed).into();

        log_debug!(
            "{} configuration: valid={} message={:?}",
            parsed,
            result.is_valid(),
            result.message()
        );

        result
    }
}

/// Free-function form of [`ConfigValidator::validate`]
pub fn validate_model_configuration(
    model_type: &str,
    config: &ConfigurationRecord,
) -> ValidationResult {
    ConfigValidator::validate(model_type, config)
}

pub mod error;
pub mod model;
pub mod util;

pub use error::{ModelConfigError, Result};
pub use model::{
    has_configuration,
    validate_model_configuration,
    validate_model_has_configuration,
    AiModel,
    AiModelsDocument,
    ConfigValidator,
    ConfigurationRecord,
    ConfigurationReport,
    ModelType,
    TypedModelConfig,
    ValidationError,
    ValidationReport,
    ValidationResult,
};

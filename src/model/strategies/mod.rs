pub mod llm;
pub mod ocr;
pub mod embedding;
pub mod provider_model;
pub mod multi_modal;

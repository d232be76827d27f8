// ABOUTME: AI settings module
// ABOUTME: Credential, model and instruction settings persisted as a single document

pub mod masking;
pub mod storage;
pub mod types;
pub mod validation;


pub use masking::{is_masked_placeholder, mask_api_key, MASKED_PLACEHOLDER_MARKER, MASK_PREFIX};
pub use storage::{AiSettingsStorage, SaveOutcome, SETTINGS_DOC};
pub use types::*;
pub use validation::{truncate_chars, validate_model, ValidationError, MAX_CUSTOM_INSTRUCTIONS_CHARS};

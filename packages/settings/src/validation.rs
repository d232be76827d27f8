// ABOUTME: Input validation for AI settings writes
// ABOUTME: Turns a raw save request into a typed patch, checking the model against the catalog

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::masking::is_masked_placeholder;
use crate::types::{ApiKeyUpdate, SaveSettingsRequest, SettingsPatch};
use linkdesk_models::REGISTRY;

/// Longer instructions are cut, not rejected
pub const MAX_CUSTOM_INSTRUCTIONS_CHARS: usize = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

/// Check a model id against the catalog
pub fn validate_model(model_id: &str) -> Result<(), ValidationError> {
    if REGISTRY.model_exists(model_id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidModel(model_id.to_string()))
    }
}

/// Keep at most `max` characters (Unicode scalar values) of `value`
pub fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_index, _)) => value[..byte_index].to_string(),
        None => value.to_string(),
    }
}

impl ApiKeyUpdate {
    /// Interpret a submitted key.
    ///
    /// Absent keeps the stored key, an empty (or all-whitespace) value clears
    /// it, the masked preview echoed back keeps it, anything else is trimmed
    /// and stored.
    pub fn from_input(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return ApiKeyUpdate::Keep;
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            ApiKeyUpdate::Clear
        } else if is_masked_placeholder(trimmed) {
            ApiKeyUpdate::Keep
        } else {
            ApiKeyUpdate::Set(trimmed.to_string())
        }
    }
}

impl SettingsPatch {
    /// Validate a save request and build the patch it describes.
    ///
    /// An empty model is treated as not sent. Instructions sent as `null`
    /// are stored as an empty string.
    pub fn from_request(
        request: SaveSettingsRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let model = match request.model.filter(|m| !m.is_empty()) {
            Some(model) => {
                validate_model(&model)?;
                Some(model)
            }
            None => None,
        };

        let custom_instructions = request.custom_instructions.map(|value| {
            truncate_chars(
                value.as_deref().unwrap_or_default(),
                MAX_CUSTOM_INSTRUCTIONS_CHARS,
            )
        });

        Ok(Self {
            api_key: ApiKeyUpdate::from_input(request.api_key.as_deref()),
            model,
            custom_instructions,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::MASK_PREFIX;
    use pretty_assertions::assert_eq;

    fn request(json: &str) -> SaveSettingsRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_every_catalog_model_is_valid() {
        for model in REGISTRY.list_models() {
            assert!(validate_model(&model.id).is_ok(), "{} should validate", model.id);
        }
    }

    #[test]
    fn test_unknown_model_names_the_id() {
        for bad in ["gpt-4o", "gemini-2.0-flash ", "GEMINI-1.5-PRO", "gemini"] {
            let err = validate_model(bad).unwrap_err();
            assert_eq!(err, ValidationError::InvalidModel(bad.to_string()));
            assert!(err.to_string().contains(bad));
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("", 3), "");
        assert_eq!(truncate_chars("नमस्ते दुनिया", 2).chars().count(), 2);
    }

    #[test]
    fn test_api_key_update_rules() {
        assert_eq!(ApiKeyUpdate::from_input(None), ApiKeyUpdate::Keep);
        assert_eq!(ApiKeyUpdate::from_input(Some("")), ApiKeyUpdate::Clear);
        assert_eq!(ApiKeyUpdate::from_input(Some("   ")), ApiKeyUpdate::Clear);
        assert_eq!(
            ApiKeyUpdate::from_input(Some("  AIza-new-key \n")),
            ApiKeyUpdate::Set("AIza-new-key".to_string())
        );
        assert_eq!(
            ApiKeyUpdate::from_input(Some(&format!("{}12345678", MASK_PREFIX))),
            ApiKeyUpdate::Keep
        );
        assert_eq!(ApiKeyUpdate::from_input(Some("••••")), ApiKeyUpdate::Keep);
    }

    #[test]
    fn test_marker_is_checked_after_trimming() {
        assert_eq!(ApiKeyUpdate::from_input(Some("  ••••x")), ApiKeyUpdate::Keep);
        assert_eq!(
            ApiKeyUpdate::from_input(Some("\t••••••••12345678\n")),
            ApiKeyUpdate::Keep
        );
    }

    #[test]
    fn test_empty_request_only_touches_timestamp() {
        let now = Utc::now();
        let patch = SettingsPatch::from_request(request("{}"), now).unwrap();
        assert_eq!(patch, SettingsPatch::touch(now));

        let fields = patch.to_fields();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("updatedAt"));
    }

    #[test]
    fn test_null_and_empty_fields() {
        let patch = SettingsPatch::from_request(
            request(r#"{"apiKey": null, "model": "", "customInstructions": null}"#),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(patch.api_key, ApiKeyUpdate::Keep);
        assert_eq!(patch.model, None);
        assert_eq!(patch.custom_instructions, Some(String::new()));
    }

    #[test]
    fn test_model_null_is_ignored() {
        let patch =
            SettingsPatch::from_request(request(r#"{"model": null}"#), Utc::now()).unwrap();
        assert_eq!(patch.model, None);
    }

    #[test]
    fn test_invalid_model_rejects_whole_request() {
        let result = SettingsPatch::from_request(
            request(r#"{"apiKey": "AIza-key", "model": "gpt-4o"}"#),
            Utc::now(),
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidModel("gpt-4o".to_string())
        );
    }

    #[test]
    fn test_long_instructions_are_truncated() {
        let long = "x".repeat(MAX_CUSTOM_INSTRUCTIONS_CHARS + 500);
        let body = serde_json::json!({ "customInstructions": long }).to_string();

        let patch = SettingsPatch::from_request(request(&body), Utc::now()).unwrap();

        assert_eq!(
            patch.custom_instructions.unwrap().chars().count(),
            MAX_CUSTOM_INSTRUCTIONS_CHARS
        );
    }

    #[test]
    fn test_patch_fields_use_stored_names() {
        let patch = SettingsPatch::from_request(
            request(r#"{"apiKey": "AIza-key", "model": "gemini-1.5-pro", "customInstructions": "Be brief"}"#),
            Utc::now(),
        )
        .unwrap();

        let fields = patch.to_fields();
        assert_eq!(fields["apiKey"], "AIza-key");
        assert_eq!(fields["model"], "gemini-1.5-pro");
        assert_eq!(fields["customInstructions"], "Be brief");
        assert!(fields["updatedAt"].is_string());
    }

    #[test]
    fn test_clear_writes_empty_key() {
        let patch =
            SettingsPatch::from_request(request(r#"{"apiKey": ""}"#), Utc::now()).unwrap();
        assert_eq!(patch.to_fields()["apiKey"], "");
    }
}

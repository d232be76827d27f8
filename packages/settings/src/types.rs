// ABOUTME: Type definitions for AI settings
// ABOUTME: Stored record, masked view, wire request and the typed partial-update patch

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::masking::mask_api_key;
use linkdesk_models::{Model, REGISTRY};

/// The persisted settings document. Missing fields read as defaults.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSettings {
    pub api_key: String,
    pub model: String,
    pub custom_instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AiSettings {
    /// Built-in defaults stamped with `now`
    pub fn defaults_at(now: DateTime<Utc>) -> Self {
        Self {
            api_key: String::new(),
            model: REGISTRY.default_model_id().to_string(),
            custom_instructions: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self::defaults_at(Utc::now())
    }
}

impl fmt::Debug for AiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSettings")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("model", &self.model)
            .field("custom_instructions", &self.custom_instructions)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Settings as readers see them: the key is replaced by its masked preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedAiSettings {
    pub api_key: String,
    pub has_api_key: bool,
    pub model: String,
    pub custom_instructions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AiSettings> for MaskedAiSettings {
    fn from(settings: AiSettings) -> Self {
        Self {
            api_key: mask_api_key(&settings.api_key),
            has_api_key: settings.has_api_key(),
            model: settings.model,
            custom_instructions: settings.custom_instructions,
            created_at: settings.created_at,
            updated_at: settings.updated_at,
        }
    }
}

/// Body of a settings read
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub settings: MaskedAiSettings,
    pub models: &'static [Model],
    pub is_configured: bool,
}

/// Body of a settings write. Every field is optional; only what is sent is
/// applied.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// `None` when absent, `Some(None)` when sent as `null`
    #[serde(default, deserialize_with = "deserialize_present")]
    pub custom_instructions: Option<Option<String>>,
}

impl fmt::Debug for SaveSettingsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveSettingsRequest")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("model", &self.model)
            .field("custom_instructions", &self.custom_instructions)
            .finish()
    }
}

/// Distinguishes an explicit `null` from an absent field
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// What a write does to the stored credential
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKeyUpdate {
    /// Leave the stored key untouched
    Keep,
    /// Remove the stored key
    Clear,
    /// Replace the stored key
    Set(String),
}

impl fmt::Debug for ApiKeyUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeyUpdate::Keep => f.write_str("Keep"),
            ApiKeyUpdate::Clear => f.write_str("Clear"),
            ApiKeyUpdate::Set(key) => write!(f, "Set({})", mask_api_key(key)),
        }
    }
}

/// A validated partial update. Only `Some` fields (and a non-`Keep` key) are
/// written; `updated_at` is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsPatch {
    pub api_key: ApiKeyUpdate,
    pub model: Option<String>,
    pub custom_instructions: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SettingsPatch {
    pub fn touch(now: DateTime<Utc>) -> Self {
        Self {
            api_key: ApiKeyUpdate::Keep,
            model: None,
            custom_instructions: None,
            updated_at: now,
        }
    }

    /// Apply the patch to an in-memory record
    pub fn apply_to(&self, settings: &mut AiSettings) {
        match &self.api_key {
            ApiKeyUpdate::Keep => {}
            ApiKeyUpdate::Clear => settings.api_key.clear(),
            ApiKeyUpdate::Set(key) => settings.api_key = key.clone(),
        }
        if let Some(model) = &self.model {
            settings.model = model.clone();
        }
        if let Some(instructions) = &self.custom_instructions {
            settings.custom_instructions = instructions.clone();
        }
        settings.updated_at = self.updated_at;
    }

    /// Document fields touched by the patch, keyed as stored
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();

        match &self.api_key {
            ApiKeyUpdate::Keep => {}
            ApiKeyUpdate::Clear => {
                fields.insert("apiKey".to_string(), Value::String(String::new()));
            }
            ApiKeyUpdate::Set(key) => {
                fields.insert("apiKey".to_string(), Value::String(key.clone()));
            }
        }
        if let Some(model) = &self.model {
            fields.insert("model".to_string(), Value::String(model.clone()));
        }
        if let Some(instructions) = &self.custom_instructions {
            fields.insert(
                "customInstructions".to_string(),
                Value::String(instructions.clone()),
            );
        }
        fields.insert(
            "updatedAt".to_string(),
            Value::String(self.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );

        fields
    }
}

// ABOUTME: Storage layer for AI settings
// ABOUTME: Reads the settings document masked and writes partial updates, creating it on first save

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::types::{AiSettings, MaskedAiSettings, SettingsPatch, SettingsResponse};
use linkdesk_models::REGISTRY;
use linkdesk_storage::{DocumentStore, StorageResult};

/// Path of the single settings document
pub const SETTINGS_DOC: &str = "system/ai_settings";

/// Whether a save created the document or updated an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Storage layer for AI settings
#[derive(Clone)]
pub struct AiSettingsStorage {
    store: Arc<dyn DocumentStore>,
}

impl AiSettingsStorage {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Raw stored settings, key unmasked. `None` until the first save.
    pub async fn get(&self) -> StorageResult<Option<AiSettings>> {
        match self.store.get(SETTINGS_DOC).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Settings as shown to clients, with the model catalog.
    /// Falls back to defaults (not persisted) when nothing is stored.
    pub async fn load(&self) -> StorageResult<SettingsResponse> {
        let (settings, is_configured) = match self.get().await? {
            Some(stored) => {
                let configured = stored.has_api_key();
                (stored, configured)
            }
            None => {
                debug!("No AI settings stored, returning defaults");
                (AiSettings::defaults_at(Utc::now()), false)
            }
        };

        Ok(SettingsResponse {
            settings: MaskedAiSettings::from(settings),
            models: REGISTRY.list_models(),
            is_configured,
        })
    }

    /// Apply a validated patch. The first save writes a full document from
    /// defaults; later saves only touch the patched fields.
    pub async fn save(&self, patch: &SettingsPatch) -> StorageResult<SaveOutcome> {
        let existing = self.store.get(SETTINGS_DOC).await?;

        if existing.is_some() {
            self.store.update(SETTINGS_DOC, &patch.to_fields()).await?;
            info!("Updated AI settings");
            return Ok(SaveOutcome::Updated);
        }

        let mut settings = AiSettings::defaults_at(patch.updated_at);
        patch.apply_to(&mut settings);
        settings.created_at = patch.updated_at;

        self.store
            .set(SETTINGS_DOC, &serde_json::to_value(&settings)?)
            .await?;
        info!("Created AI settings with model {}", settings.model);
        Ok(SaveOutcome::Created)
    }
}

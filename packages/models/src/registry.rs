// ABOUTME: Model catalog service
// ABOUTME: Loads the embedded JSON catalog once and provides ordered listing and id lookup

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use super::types::{Model, ModelsConfig};

/// Global catalog, loaded from JSON at first use
pub static REGISTRY: LazyLock<ModelRegistry> = LazyLock::new(|| {
    ModelRegistry::new().unwrap_or_else(|e| {
        panic!(
            "FATAL: Failed to load model catalog. Check config/models.json: {}",
            e
        )
    })
});

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate model id: {0}")]
    DuplicateId(String),

    #[error("Default model {0} is not in the catalog")]
    UnknownDefault(String),
}

#[derive(Debug)]
pub struct ModelRegistry {
    /// Catalog order is the order clients display
    models: Vec<Model>,
    index: HashMap<String, usize>,
    default_model: String,
}

impl ModelRegistry {
    /// Create a new registry from the JSON file embedded at compile time
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_json(include_str!("../config/models.json"))
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let config: ModelsConfig = serde_json::from_str(json)?;

        let mut index = HashMap::with_capacity(config.models.len());
        for (position, model) in config.models.iter().enumerate() {
            if index.insert(model.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(model.id.clone()));
            }
        }

        if !index.contains_key(&config.default_model) {
            return Err(RegistryError::UnknownDefault(config.default_model));
        }

        Ok(Self {
            models: config.models,
            index,
            default_model: config.default_model,
        })
    }

    /// Get a model by ID
    pub fn get_model(&self, model_id: &str) -> Option<&Model> {
        self.index.get(model_id).map(|&i| &self.models[i])
    }

    /// All models in catalog order
    pub fn list_models(&self) -> &[Model] {
        &self.models
    }

    /// Check if a model exists
    pub fn model_exists(&self, model_id: &str) -> bool {
        self.index.contains_key(model_id)
    }

    /// Model used when nothing has been configured yet
    pub fn default_model(&self) -> &Model {
        // from_json guarantees the default is indexed
        &self.models[self.index[&self.default_model]]
    }

    pub fn default_model_id(&self) -> &str {
        &self.default_model
    }
}

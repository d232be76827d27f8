// ABOUTME: Type definitions for catalog models
// ABOUTME: Structures that mirror config/models.json and serialize as the API exposes them

use serde::{Deserialize, Serialize};

/// A selectable model. Serialized with camelCase keys, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: ModelTier,
    /// Human readable context size, e.g. "1M tokens"
    pub context_window: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Recommended,
    Fast,
    Powerful,
    Economy,
}

/// Container for models JSON file
#[derive(Debug, Deserialize)]
pub struct ModelsConfig {
    pub version: String,
    pub default_model: String,
    pub models: Vec<Model>,
}

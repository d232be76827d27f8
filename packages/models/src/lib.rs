// ABOUTME: AI model catalog
// ABOUTME: JSON-backed list of selectable models with in-memory lookup

pub mod registry;
pub mod types;

pub use registry::{ModelRegistry, RegistryError, REGISTRY};
pub use types::{Model, ModelTier};

use std::collections::HashMap;

use crate::prelude::*;

/// Builds a model from its configuration.
pub type ModelConstructor = fn(&ModelConfig) -> Result<Box<dyn StochasticModel>>;

/// # ModelRegistry
/// Maps model identifiers to constructors so models can be selected from a
/// [`ModelConfig`] at runtime.
#[derive(Default, Clone)]
pub struct ModelRegistry {
    constructors: HashMap<String, ModelConstructor>,
}

impl ModelRegistry {
    pub fn new() -> ModelRegistry {
        ModelRegistry::default()
    }

    /// Registers `constructor` under `id`, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, constructor: ModelConstructor) -> &mut Self {
        let id = id.into();
        if self.constructors.insert(id.clone(), constructor).is_some() {
            tracing::warn!("Replacing registered model {}", id);
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    pub fn models(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn create(&self, config: &ModelConfig) -> Result<Box<dyn StochasticModel>> {
        config.validate()?;
        let constructor = self
            .constructors
            .get(&config.model)
            .ok_or(StochasticError::NotFoundError(format!(
                "model {} is not registered",
                config.model
            )))?;
        let model = constructor(config)?;
        tracing::debug!("Created model {} from {}", model.model_name(), config.model);
        Ok(model)
    }
}

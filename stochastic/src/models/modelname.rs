use std::fmt;

use crate::prelude::*;

/// Name reported by models that do not set their own.
pub const DEFAULT_MODEL_NAME: &str = "StochasticModel";

/// # ModelName
/// Display name of a stochastic model. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Result<ModelName> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StochasticError::InvalidInput(
                "model name is empty".to_string(),
            ));
        }
        Ok(ModelName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelName {
    fn default() -> Self {
        ModelName(DEFAULT_MODEL_NAME.to_string())
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

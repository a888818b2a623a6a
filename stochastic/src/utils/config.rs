use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::prelude::*;

/// # ModelConfig
/// Selects a registered model and carries its free-form parameters.
///
/// ```json
/// { "model": "WittigSinhaDiscreteFreqWind", "parameters": { "gust_speed": 30.0 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(default = "empty_parameters")]
    parameters: Value,
}

fn empty_parameters() -> Value {
    Value::Object(Default::default())
}

impl ModelConfig {
    pub fn new(model: impl Into<String>) -> ModelConfig {
        ModelConfig {
            model: model.into(),
            parameters: empty_parameters(),
        }
    }

    /// Adds one parameter. Non-object parameters, only reachable through
    /// unvalidated deserialization, are replaced by an object first.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if !self.parameters.is_object() {
            self.parameters = empty_parameters();
        }
        if let Value::Object(map) = &mut self.parameters {
            map.insert(key.into(), value.into());
        }
        self
    }

    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    pub fn from_json_str(text: &str) -> Result<ModelConfig> {
        let config: ModelConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ModelConfig> {
        ModelConfig::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(StochasticError::InvalidInput(
                "model config has no model".to_string(),
            ));
        }
        if !self.parameters.is_object() {
            return Err(StochasticError::InvalidInput(format!(
                "parameters of {} must be an object",
                self.model
            )));
        }
        Ok(())
    }

    pub fn parameter<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .parameters
            .get(key)
            .ok_or(StochasticError::NotFoundError(format!(
                "parameter {} of {}",
                key, self.model
            )))?;
        serde_json::from_value(value.clone()).map_err(|e| {
            StochasticError::InvalidInput(format!("parameter {} of {}: {}", key, self.model, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_lookup() {
        let config = ModelConfig::from_json_str(
            r#"{ "model": "VlachosSiteSpecificEq",
                 "parameters": { "moment_magnitude": 6.5, "num_sims": 3 } }"#,
        )
        .unwrap();
        assert_eq!(config.model, "VlachosSiteSpecificEq");
        assert_eq!(config.parameter::<f64>("moment_magnitude").unwrap(), 6.5);
        assert_eq!(config.parameter::<u32>("num_sims").unwrap(), 3);
    }

    #[test]
    fn test_parameters_default_to_empty() {
        let config = ModelConfig::from_json_str(r#"{ "model": "VlachosSiteSpecificEq" }"#).unwrap();
        assert_eq!(config, ModelConfig::new("VlachosSiteSpecificEq"));
        let err = config.parameter::<f64>("moment_magnitude").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_type_mismatch() {
        let config = ModelConfig::new("VlachosSiteSpecificEq").with_parameter("num_sims", "three");
        let err = config.parameter::<u32>("num_sims").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_with_parameter_on_unvalidated_config() {
        let config: ModelConfig =
            serde_json::from_str(r#"{ "model": "x", "parameters": 5 }"#).unwrap();
        assert!(config.validate().is_err());
        let config = config.with_parameter("seed", 7);
        assert!(config.validate().is_ok());
        assert_eq!(config.parameter::<u64>("seed").unwrap(), 7);
        assert_eq!(config.parameters()["seed"], 7);
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(ModelConfig::from_json_str(r#"{ "model": "" }"#).is_err());
        let err =
            ModelConfig::from_json_str(r#"{ "model": "x", "parameters": [1, 2] }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        let err = ModelConfig::from_json_str(r#"{ "parameters": {} }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        fs::write(&path, r#"{ "model": "WittigSinhaDiscreteFreqWind" }"#).unwrap();
        assert_eq!(
            ModelConfig::from_file(&path).unwrap().model,
            "WittigSinhaDiscreteFreqWind"
        );
        let err = ModelConfig::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}

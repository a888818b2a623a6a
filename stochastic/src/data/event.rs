use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::prelude::*;

/// Layout version stamped into every [`EventDocument`].
pub const SCHEMA_VERSION: u32 = 1;

/// # EventDocument
/// One generated loading event: the time histories a model produced for a
/// named event, plus the parameters it was generated with.
///
/// ## Details
/// - Serializes to the JSON layout written by [`crate::utils::output::write_event`].
/// - `schema_version` is checked on read; documents from another layout
///   version are rejected rather than guessed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    schema_version: u32,
    model: String,
    event: String,
    units: Units,
    generated_at: DateTime<Utc>,
    time_histories: Vec<TimeHistory>,
    #[serde(default)]
    parameters: Map<String, Value>,
}

impl EventDocument {
    pub fn new(model: impl Into<String>, event: impl Into<String>, units: Units) -> EventDocument {
        EventDocument {
            schema_version: SCHEMA_VERSION,
            model: model.into(),
            event: event.into(),
            units,
            generated_at: Utc::now(),
            time_histories: Vec::new(),
            parameters: Map::new(),
        }
    }

    pub fn with_time_history(mut self, time_history: TimeHistory) -> Self {
        self.time_histories.push(time_history);
        self
    }

    pub fn push_time_history(&mut self, time_history: TimeHistory) {
        self.time_histories.push(time_history);
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn time_histories(&self) -> &[TimeHistory] {
        &self.time_histories
    }

    pub fn time_history(&self, name: &str) -> Result<&TimeHistory> {
        self.time_histories
            .iter()
            .find(|th| th.name() == name)
            .ok_or(StochasticError::NotFoundError(format!(
                "time history {} in event {}",
                name, self.event
            )))
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(StochasticError::InvalidInput(
                "event document has no model name".to_string(),
            ));
        }
        if self.event.trim().is_empty() {
            return Err(StochasticError::InvalidInput(
                "event document has no event name".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for th in &self.time_histories {
            th.validate()?;
            if !names.insert(th.name()) {
                return Err(StochasticError::InvalidInput(format!(
                    "duplicate time history {} in event {}",
                    th.name(),
                    self.event
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(value: Value) -> Result<EventDocument> {
        check_schema_version(&value)?;
        let document: EventDocument = serde_json::from_value(value)?;
        document.validate()?;
        Ok(document)
    }

    pub fn from_json_str(text: &str) -> Result<EventDocument> {
        EventDocument::from_json(serde_json::from_str(text)?)
    }
}

// Checked before full deserialization so a layout change reports the
// version instead of a missing-field error.
fn check_schema_version(value: &Value) -> Result<()> {
    match value.get("schema_version").and_then(Value::as_u64) {
        Some(v) if v == SCHEMA_VERSION as u64 => Ok(()),
        Some(v) => Err(StochasticError::InvalidInput(format!(
            "unsupported schema version {} (expected {})",
            v, SCHEMA_VERSION
        ))),
        None => Err(StochasticError::InvalidInput(
            "event document has no schema version".to_string(),
        )),
    }
}

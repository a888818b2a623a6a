use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// # TimeHistory
/// A uniformly sampled loading series, e.g. one acceleration component of a
/// ground motion or the wind speed at one floor.
///
/// ## Details
/// - Sample `i` is taken at `i * dt` seconds.
/// - `unit` is only set when the generating model was asked for physical
///   units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeHistory {
    name: String,
    dt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    values: Vec<f64>,
}

impl TimeHistory {
    pub fn new(name: impl Into<String>, dt: f64, values: Vec<f64>) -> Result<TimeHistory> {
        let history = TimeHistory {
            name: name.into(),
            dt,
            unit: None,
            values,
        };
        history.validate()?;
        Ok(history)
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.dt * self.values.len() as f64
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.values.len()).map(move |i| i as f64 * self.dt)
    }

    /// Largest absolute sample, `None` for an empty series.
    pub fn peak(&self) -> Option<f64> {
        self.values.iter().map(|v| v.abs()).reduce(f64::max)
    }

    /// Deserialized histories bypass `new`, so documents re-run this.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StochasticError::InvalidInput(
                "time history name is empty".to_string(),
            ));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(StochasticError::InvalidInput(format!(
                "time history {} has invalid time step {}",
                self.name, self.dt
            )));
        }
        if let Some(index) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(StochasticError::InvalidInput(format!(
                "time history {} has a non-finite value at index {}",
                self.name, index
            )));
        }
        Ok(())
    }
}

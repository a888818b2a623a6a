use serde::{Deserialize, Serialize};

/// Representation requested for generated time histories.
///
/// `Normalized` is the model's native, dimensionless output. `Physical`
/// asks the model to express each series in its own physical unit, which
/// the model records in [`crate::data::timehistory::TimeHistory::unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Normalized,
    Physical,
}

impl Units {
    pub fn is_physical(&self) -> bool {
        matches!(self, Units::Physical)
    }
}

impl From<bool> for Units {
    fn from(physical: bool) -> Self {
        if physical {
            Units::Physical
        } else {
            Units::Normalized
        }
    }
}

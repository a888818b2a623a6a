use std::path::Path;

use crate::prelude::*;

/// # StochasticModel
/// Trait for models that generate synthetic loading time histories
/// (ground motions, wind fields, ...) for named events.
///
/// ## Details
/// - Models are owned resources: they are moved or borrowed, never cloned
///   through this trait.
/// - `generate` takes `&mut self` since each call advances the model's
///   random state.
/// - The meaning of `Units::Physical` is up to the implementor, which
///   labels each series with [`TimeHistory::with_unit`].
///
/// ```compile_fail
/// use stochastic::prelude::*;
///
/// fn duplicate(model: &Box<dyn StochasticModel>) -> Box<dyn StochasticModel> {
///     model.clone()
/// }
/// ```
pub trait StochasticModel {
    /// Display name of the model. Never empty.
    fn model_name(&self) -> &str;

    /// Generate one event and return it as an in-memory document.
    fn generate(&mut self, event_name: &str, units: Units) -> Result<EventDocument>;

    /// Generate one event and write it as JSON to `output_location`.
    ///
    /// On error nothing is written to `output_location`.
    fn generate_to(
        &mut self,
        event_name: &str,
        output_location: &Path,
        units: Units,
    ) -> Result<()> {
        check_event_name(event_name)?;
        tracing::debug!("{} generating event {}", self.model_name(), event_name);
        let document = self.generate(event_name, units)?;
        write_event(&document, output_location).map_err(|e| {
            tracing::warn!(
                "{} failed to write event {} to {}: {}",
                self.model_name(),
                event_name,
                output_location.display(),
                e
            );
            e
        })
    }

    /// Generate `count` events named `{prefix}_1` to `{prefix}_{count}`.
    fn generate_events(
        &mut self,
        prefix: &str,
        count: usize,
        units: Units,
    ) -> Result<Vec<EventDocument>> {
        check_event_name(prefix)?;
        tracing::debug!("{} generating {} events", self.model_name(), count);
        (1..=count)
            .map(|i| self.generate(&format!("{}_{}", prefix, i), units))
            .collect::<Result<Vec<EventDocument>>>()
    }
}

/// Rejects blank event names. Implementors call this at the top of
/// `generate`.
pub fn check_event_name(event_name: &str) -> Result<()> {
    if event_name.trim().is_empty() {
        return Err(StochasticError::InvalidInput(
            "event name is empty".to_string(),
        ));
    }
    Ok(())
}

//! Calculator plus history, driven by one owner.

use coatmass_calc::compute;
use coatmass_history::{
    EntryId, FileSlot, HistoryConfig, HistoryEntry, HistorySlot, HistoryStore, MemorySlot,
    PersistenceError, load_default_config,
};
use coatmass_model::{CalculationInput, CalculationResult, InvalidInputError, RawCalculationInput};

use crate::error::Result;

/// Outcome of a committed calculation.
#[derive(Debug)]
pub struct Calculated {
    pub result: CalculationResult,
    /// The history entry created for this calculation.
    pub entry: HistoryEntry,
    /// Set when the entry could not be written to the slot. The entry is
    /// still in the in-memory history.
    pub save_error: Option<PersistenceError>,
}

impl Calculated {
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Owns a [`HistoryStore`] and runs calculations against it.
///
/// Previews compute without touching the history; commits compute and
/// record.
#[derive(Debug)]
pub struct CoatingSession {
    store: HistoryStore,
}

impl CoatingSession {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }

    /// Session over `slot` with the wall clock and timestamp ids.
    pub fn open(slot: impl HistorySlot + 'static, config: HistoryConfig) -> Self {
        Self::new(HistoryStore::open(slot, config))
    }

    /// Session using the user's config file and data directory.
    ///
    /// Falls back to an in-memory history if no data directory can be
    /// determined.
    pub fn open_default() -> Self {
        let config = load_default_config();
        match FileSlot::in_data_dir(config.slot_key.clone()) {
            Some(slot) => Self::open(slot, config),
            None => {
                tracing::warn!("Could not determine data directory, history will not be kept");
                Self::open(MemorySlot::new(config.slot_key.clone()), config)
            }
        }
    }

    /// Compute without recording.
    pub fn preview(
        &self,
        input: &CalculationInput,
    ) -> std::result::Result<CalculationResult, InvalidInputError> {
        compute(input)
    }

    /// Compute and record the result in the history.
    ///
    /// # Errors
    ///
    /// Fails only on invalid input. A failed history write is reported in
    /// [`Calculated::save_error`].
    pub fn calculate(&mut self, input: &CalculationInput) -> Result<Calculated> {
        let result = compute(input)?;

        let (entry, save_error) = match self.store.record(input, &result) {
            Ok(entry) => (entry, None),
            Err(e) => match self.store.newest() {
                Some(entry) => (entry.clone(), Some(e)),
                None => return Err(e.into()),
            },
        };

        Ok(Calculated {
            result,
            entry,
            save_error,
        })
    }

    /// Parse text input, then [`calculate`](Self::calculate).
    pub fn calculate_raw(&mut self, raw: &RawCalculationInput) -> Result<Calculated> {
        let input = raw.parse()?;
        self.calculate(&input)
    }

    /// A stored entry, for redisplaying its result.
    pub fn recall(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.store.get(id)
    }

    /// Past calculations, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.store.list()
    }

    pub fn delete(&mut self, id: EntryId) -> Result<bool> {
        Ok(self.store.delete(id)?)
    }

    pub fn clear_history(&mut self) -> Result<usize> {
        Ok(self.store.clear()?)
    }

    /// Retry writing the history after a failed save.
    pub fn save(&mut self) -> Result<()> {
        Ok(self.store.save()?)
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn into_store(self) -> HistoryStore {
        self.store
    }
}

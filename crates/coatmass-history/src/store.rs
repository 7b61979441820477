//! The bounded history log.

use coatmass_model::{CalculationInput, CalculationResult};

use crate::clock::{Clock, IdSource, SystemClock, TimestampIds, format_created_at};
use crate::codec;
use crate::config::HistoryConfig;
use crate::entry::{EntryId, HistoryEntry};
use crate::error::{PersistenceError, Result};
use crate::slot::HistorySlot;

/// Newest-first log of past calculations, persisted to a [`HistorySlot`].
///
/// The store holds at most `capacity` entries. Every mutation rewrites the
/// whole log to the slot. If a write fails the in-memory log keeps the
/// change, [`is_dirty`](Self::is_dirty) reports `true`, and
/// [`save`](Self::save) can be called again later.
pub struct HistoryStore {
    slot: Box<dyn HistorySlot>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
    capacity: usize,
    entries: Vec<HistoryEntry>,
    /// Highest id ever issued or loaded; new ids are always above it.
    last_id: u64,
    dirty: bool,
    load_issue: Option<PersistenceError>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("slot", &self.slot.key())
            .field("capacity", &self.capacity)
            .field("entries", &self.entries.len())
            .field("last_id", &self.last_id)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HistoryStore`] with injectable clock and id source.
pub struct HistoryStoreBuilder {
    slot: Box<dyn HistorySlot>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
    config: HistoryConfig,
}

impl HistoryStoreBuilder {
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    #[must_use]
    pub fn config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the persisted log and build the store.
    pub fn open(self) -> HistoryStore {
        let capacity = self.config.effective_capacity();
        let mut store = HistoryStore {
            slot: self.slot,
            clock: self.clock,
            ids: self.ids,
            capacity,
            entries: Vec::new(),
            last_id: 0,
            dirty: false,
            load_issue: None,
        };
        store.load();
        store
    }
}

impl HistoryStore {
    /// Start building a store over `slot`.
    pub fn builder(slot: impl HistorySlot + 'static) -> HistoryStoreBuilder {
        HistoryStoreBuilder {
            slot: Box::new(slot),
            clock: Box::new(SystemClock),
            ids: Box::new(TimestampIds),
            config: HistoryConfig::default(),
        }
    }

    /// Open a store over `slot` with the wall clock and timestamp ids.
    pub fn open(slot: impl HistorySlot + 'static, config: HistoryConfig) -> Self {
        Self::builder(slot).config(config).open()
    }

    /// Read the persisted log, falling back to an empty one.
    ///
    /// A missing slot is not an error. An unreadable or corrupt slot is
    /// logged and kept in [`load_issue`](Self::load_issue).
    fn load(&mut self) {
        let key = self.slot.key().to_string();
        let decoded = match self.slot.read() {
            Ok(None) => {
                tracing::debug!(slot = %key, "no stored history, starting empty");
                return;
            }
            Ok(Some(bytes)) => codec::decode(&bytes),
            Err(e) => Err(e),
        };

        match decoded {
            Ok(decoded) => {
                let stored = decoded.entries.len();
                let mut entries = decoded.entries;
                entries.sort_by(|a, b| b.id().cmp(&a.id()));
                entries.dedup_by_key(|entry| entry.id());
                entries.truncate(self.capacity);

                self.last_id = entries.first().map_or(0, |entry| entry.id().get());
                self.dirty = decoded.legacy || entries.len() != stored;
                self.entries = entries;

                tracing::info!(
                    slot = %key,
                    entries = self.entries.len(),
                    legacy = decoded.legacy,
                    "loaded history"
                );
            }
            Err(e) => {
                tracing::warn!(slot = %key, error = %e, "could not load history, starting empty");
                self.load_issue = Some(e);
            }
        }
    }

    /// Record a calculation as the newest entry.
    ///
    /// Evicts the oldest entries beyond capacity and persists the log.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NonFiniteEntry`] for a NaN or infinite
    /// area or mass and [`PersistenceError::IdsExhausted`] once the id space
    /// is used up; the log is left untouched in both cases.
    ///
    /// Returns the persistence error if the log could not be written. The
    /// entry is still in the log (see [`newest`](Self::newest)) and the
    /// store stays dirty.
    pub fn record(
        &mut self,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Result<HistoryEntry> {
        ensure_recordable(input, result)?;
        let floor = self
            .last_id
            .checked_add(1)
            .ok_or(PersistenceError::IdsExhausted {
                last_id: self.last_id,
            })?;

        let now = self.clock.now();
        let id = EntryId::new(self.ids.next_id(&now).max(floor));
        self.last_id = id.get();

        let entry = HistoryEntry::new(
            id,
            format_created_at(&now),
            input.label().to_string(),
            input.area_mm2,
            *result,
        );
        self.entries.insert(0, entry.clone());

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.truncate(self.capacity);
            tracing::debug!(evicted, capacity = self.capacity, "evicted oldest history entries");
        }

        self.dirty = true;
        self.save()?;

        tracing::info!(
            id = %entry.id(),
            project = entry.project_label(),
            total_weight = entry.total_weight(),
            "recorded calculation"
        );
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// The most recently recorded entry.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Remove an entry.
    ///
    /// Returns `Ok(false)` without touching the slot if `id` is unknown.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the log could not be written. The
    /// entry is removed from memory regardless.
    pub fn delete(&mut self, id: EntryId) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|entry| entry.id() == id) else {
            tracing::debug!(id = %id, "delete of unknown history entry");
            return Ok(false);
        };

        self.entries.remove(index);
        self.dirty = true;
        self.save()?;

        tracing::info!(id = %id, remaining = self.entries.len(), "deleted history entry");
        Ok(true)
    }

    /// Remove every entry and return how many there were.
    pub fn clear(&mut self) -> Result<usize> {
        let removed = self.entries.len();
        if removed == 0 && !self.dirty {
            return Ok(0);
        }

        self.entries.clear();
        // Nothing left to collide with.
        self.last_id = 0;
        self.dirty = true;
        self.save()?;

        tracing::info!(removed, "cleared history");
        Ok(removed)
    }

    /// Write the current log to the slot.
    ///
    /// Called by every mutation; call it directly to retry after a failed
    /// write.
    pub fn save(&mut self) -> Result<()> {
        let bytes = codec::encode(&self.entries)?;
        match self.slot.write(&bytes) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(slot = self.slot.key(), error = %e, "failed to persist history");
                Err(e)
            }
        }
    }

    /// Whether the in-memory log differs from what was last persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Why the persisted log could not be loaded, if it couldn't.
    pub fn load_issue(&self) -> Option<&PersistenceError> {
        self.load_issue.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slot_key(&self) -> &str {
        self.slot.key()
    }
}

/// JSON has no NaN or infinity, so such an entry would poison the stored log.
fn ensure_recordable(input: &CalculationInput, result: &CalculationResult) -> Result<()> {
    let figures = [
        ("area", input.area_mm2),
        ("primer weight", result.primer_weight),
        ("topcoat weight", result.topcoat_weight),
        ("primer curing agent", result.primer_curing_agent),
        ("topcoat curing agent", result.topcoat_curing_agent),
        ("total weight", result.total_weight),
    ];
    match figures.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(PersistenceError::NonFiniteEntry { field, value }),
        None => Ok(()),
    }
}

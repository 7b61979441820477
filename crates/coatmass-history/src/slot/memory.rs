//! In-process slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::HistorySlot;
use crate::error::{PersistenceError, Result};

/// Slot backed by a shared in-memory buffer.
///
/// Clones share the same buffer and quota, so a test can keep a handle and
/// inspect, corrupt or throttle what the store writes. A byte quota makes
/// writes fail the way a full browser storage area does.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    key: String,
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<Vec<u8>>,
    quota: Option<usize>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    /// Create a slot that already holds `blob`.
    pub fn with_contents(key: impl Into<String>, blob: impl Into<Vec<u8>>) -> Self {
        let slot = Self::new(key);
        slot.replace(Some(blob.into()));
        slot
    }

    /// Reject writes larger than `bytes`.
    #[must_use]
    pub fn with_quota(self, bytes: usize) -> Self {
        self.set_quota(Some(bytes));
        self
    }

    /// Change the quota for every handle on this buffer. `None` removes it.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.lock().quota = bytes;
    }

    /// Copy of the stored blob.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.lock().contents.clone()
    }

    /// Overwrite the stored blob directly, bypassing the quota.
    pub fn replace(&self, blob: Option<Vec<u8>>) {
        self.lock().contents = blob;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HistorySlot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write(&mut self, blob: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if let Some(quota) = state.quota
            && blob.len() > quota
        {
            return Err(PersistenceError::Unavailable {
                slot: self.key.clone(),
                reason: format!("quota of {quota} bytes exceeded ({} bytes)", blob.len()),
            });
        }
        state.contents = Some(blob.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let mut slot = MemorySlot::new("history");
        let observer = slot.clone();
        assert_eq!(observer.read().unwrap(), None);

        slot.write(b"[]").unwrap();
        assert_eq!(observer.contents(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_quota_rejects_large_writes() {
        let mut slot = MemorySlot::new("history").with_quota(4);
        slot.write(b"1234").unwrap();

        let result = slot.write(b"12345");
        assert!(matches!(result, Err(PersistenceError::Unavailable { .. })));
        assert_eq!(slot.contents(), Some(b"1234".to_vec()));
    }
}

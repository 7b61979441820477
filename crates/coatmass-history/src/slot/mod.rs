//! Durable key-value slots holding a serialized history log.
//!
//! A slot stores one blob under one key. Every save replaces the whole blob.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// Backend the store reads its log from and writes it back to.
pub trait HistorySlot {
    /// Name of the slot, used in log messages and errors.
    fn key(&self) -> &str;

    /// Current contents, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the contents. Must not leave a partial blob behind on failure.
    fn write(&mut self, blob: &[u8]) -> Result<()>;
}

impl<S: HistorySlot + ?Sized> HistorySlot for Box<S> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&mut self, blob: &[u8]) -> Result<()> {
        (**self).write(blob)
    }
}

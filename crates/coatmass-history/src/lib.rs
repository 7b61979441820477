//! Persisted history of coating mass calculations.
//!
//! This crate keeps a bounded, newest-first log of past calculations and
//! writes it to a durable key-value slot after every change.
//!
//! # Features
//!
//! - **Bounded log**: at most `capacity` entries (10 by default), oldest evicted first
//! - **Injected backends**: any [`HistorySlot`]; [`MemorySlot`] and [`FileSlot`] included
//! - **Atomic writes** for file slots to prevent data corruption
//! - **Graceful loading**: corrupt or unreadable slots start an empty log
//! - **Legacy import** of the browser calculator's JSON array format
//!
//! # Example
//!
//! ```
//! use coatmass_history::{HistoryConfig, HistoryStore, MemorySlot};
//! use coatmass_model::{CalculationInput, CalculationResult};
//!
//! let mut store = HistoryStore::open(MemorySlot::new("history"), HistoryConfig::default());
//! let result = CalculationResult {
//!     primer_weight: 0.0036,
//!     topcoat_weight: 0.0126,
//!     primer_curing_agent: 0.0003,
//!     topcoat_curing_agent: 0.0011,
//!     total_weight: 0.0176,
//! };
//! let entry = store.record(&CalculationInput::example(), &result).unwrap();
//! assert_eq!(store.get(entry.id()), Some(&entry));
//! ```
//!
//! # Architecture
//!
//! - `store.rs` - [`HistoryStore`] and its builder
//! - `entry.rs` - [`HistoryEntry`] and [`EntryId`]
//! - `slot/` - storage backends
//! - `codec.rs` - JSON document format and schema versioning
//! - `clock.rs` - injectable time and id sources
//! - `config.rs` - [`HistoryConfig`] and config file loading
//! - `error.rs` - error types with user-friendly messages

mod clock;
mod codec;
mod config;
mod entry;
mod error;
mod legacy;
mod slot;
mod store;

pub use clock::{
    CREATED_AT_FORMAT, Clock, IdSource, ManualClock, SequentialIds, SystemClock, TimestampIds,
    format_created_at,
};
pub use codec::{CURRENT_SCHEMA_VERSION, Decoded, decode, encode};
pub use config::{
    DEFAULT_CAPACITY, DEFAULT_SLOT_KEY, HistoryConfig, config_path, data_dir, load_config,
    load_default_config,
};
pub use entry::{EntryId, HistoryEntry};
pub use error::{PersistenceError, Result};
pub use slot::{FileSlot, HistorySlot, MemorySlot};
pub use store::{HistoryStore, HistoryStoreBuilder};

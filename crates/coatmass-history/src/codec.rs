//! Serialized form of the history log.
//!
//! The whole log is one JSON document:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "entries": [ { "id": 2, ... }, { "id": 1, ... } ]
//! }
//! ```
//!
//! Entries are stored newest first. Documents with a `schema_version`
//! above [`CURRENT_SCHEMA_VERSION`] are rejected. A bare array is read as
//! the legacy browser format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entry::HistoryEntry;
use crate::error::{PersistenceError, Result};
use crate::legacy::LegacyEntry;

/// Current schema version.
///
/// Increment this when making breaking changes to the persistence format.
/// The loader will reject documents with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct HistoryDocumentRef<'a> {
    schema_version: u32,
    entries: &'a [HistoryEntry],
}

#[derive(Deserialize)]
struct HistoryDocument {
    schema_version: u32,
    entries: Vec<HistoryEntry>,
}

/// Outcome of decoding a stored log.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub entries: Vec<HistoryEntry>,
    /// The log was stored in the legacy browser format.
    pub legacy: bool,
}

/// Serialize the log.
pub fn encode(entries: &[HistoryEntry]) -> Result<Vec<u8>> {
    let document = HistoryDocumentRef {
        schema_version: CURRENT_SCHEMA_VERSION,
        entries,
    };
    serde_json::to_vec_pretty(&document)
        .map_err(|source| PersistenceError::Serialization { source })
}

/// Deserialize a stored log, accepting the current and legacy formats.
pub fn decode(bytes: &[u8]) -> Result<Decoded> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|source| PersistenceError::Deserialization { source })?;

    if let Some(found) = value.get("schema_version").and_then(Value::as_u64) {
        let found = u32::try_from(found).unwrap_or(u32::MAX);
        if found > CURRENT_SCHEMA_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found,
                max_supported: CURRENT_SCHEMA_VERSION,
            });
        }
    }

    match value {
        Value::Array(_) => {
            let legacy: Vec<LegacyEntry> = serde_json::from_value(value)
                .map_err(|source| PersistenceError::Deserialization { source })?;
            Ok(Decoded {
                entries: legacy.into_iter().map(HistoryEntry::from).collect(),
                legacy: true,
            })
        }
        Value::Object(_) => {
            let document: HistoryDocument = serde_json::from_value(value)
                .map_err(|source| PersistenceError::Deserialization { source })?;
            tracing::trace!(
                schema_version = document.schema_version,
                entries = document.entries.len(),
                "decoded history document"
            );
            Ok(Decoded {
                entries: document.entries,
                legacy: false,
            })
        }
        _ => Err(PersistenceError::Deserialization {
            source: serde::de::Error::custom("expected a history object or a legacy array"),
        }),
    }
}

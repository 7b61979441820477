//! History entries.

use std::fmt;
use std::str::FromStr;

use coatmass_model::CalculationResult;
use serde::{Deserialize, Serialize};

/// Identifier of a history entry, unique within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One recorded calculation.
///
/// Entries are created by [`HistoryStore::record`](crate::HistoryStore::record)
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: EntryId,
    created_at: String,
    project_label: String,
    area_mm2: f64,
    total_weight: f64,
    result: CalculationResult,
}

impl HistoryEntry {
    pub(crate) fn new(
        id: EntryId,
        created_at: String,
        project_label: String,
        area_mm2: f64,
        result: CalculationResult,
    ) -> Self {
        Self {
            id,
            created_at,
            project_label,
            area_mm2,
            total_weight: result.total_weight,
            result,
        }
    }

    /// Rebuild an entry read from an older storage format.
    pub(crate) fn restored(
        id: EntryId,
        created_at: String,
        project_label: String,
        area_mm2: f64,
        total_weight: f64,
        result: CalculationResult,
    ) -> Self {
        Self {
            id,
            created_at,
            project_label,
            area_mm2,
            total_weight,
            result,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Local creation time, formatted for display.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn project_label(&self) -> &str {
        &self.project_label
    }

    pub fn area_mm2(&self) -> f64 {
        self.area_mm2
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_parse() {
        assert_eq!(" 1709942741000 ".parse::<EntryId>(), Ok(EntryId::new(1_709_942_741_000)));
        assert!("abc".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_entry_id_serializes_as_number() {
        let json = serde_json::to_string(&EntryId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}

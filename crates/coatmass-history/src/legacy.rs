//! The browser calculator's history format.
//!
//! Older installs kept the log as a bare JSON array with camelCase keys:
//!
//! ```json
//! [{"id": 1709942741000, "timestamp": "2024/3/9 08:05:41", "projectId": "R6-2000H",
//!   "area": 73834, "totalWeight": 0.0177,
//!   "calculations": {"primerWeight": 0.0036, "topcoatWeight": 0.0126,
//!                    "primerCuringAgent": 0.0003, "topcoatCuringAgent": 0.0011,
//!                    "totalWeight": 0.0177}}]
//! ```
//!
//! These logs are read as-is and written back in the current format on the
//! next save.

use coatmass_model::CalculationResult;
use serde::Deserialize;

use crate::entry::{EntryId, HistoryEntry};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyEntry {
    id: u64,
    timestamp: String,
    project_id: String,
    area: f64,
    total_weight: f64,
    calculations: LegacyCalculations,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCalculations {
    primer_weight: f64,
    topcoat_weight: f64,
    primer_curing_agent: f64,
    topcoat_curing_agent: f64,
    total_weight: f64,
}

impl From<LegacyEntry> for HistoryEntry {
    fn from(legacy: LegacyEntry) -> Self {
        let calc = legacy.calculations;
        HistoryEntry::restored(
            EntryId::new(legacy.id),
            legacy.timestamp,
            legacy.project_id,
            legacy.area,
            legacy.total_weight,
            CalculationResult {
                primer_weight: calc.primer_weight,
                topcoat_weight: calc.topcoat_weight,
                primer_curing_agent: calc.primer_curing_agent,
                topcoat_curing_agent: calc.topcoat_curing_agent,
                total_weight: calc.total_weight,
            },
        )
    }
}

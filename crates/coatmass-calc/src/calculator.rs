//! Area and film thickness to coating mass.
//!
//! The conversion runs in SI units:
//!
//! ```text
//! area_m2      = area_mm2 / 1_000_000
//! thickness_m  = thickness_mm / 1000
//! volume_l     = area_m2 * thickness_m * 1000
//! coating_kg   = volume_l * density_kg_per_l
//! curing_kg    = coating_kg * A / (A + B)
//! ```

use coatmass_model::{CalculationInput, CalculationResult, InvalidInputError, Layer, Result};
use serde::{Deserialize, Serialize};

use crate::rounding::round_result;

/// Square millimetres in a square metre.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Millimetres in a metre.
pub const MM_PER_M: f64 = 1000.0;

/// Litres in a cubic metre.
pub const LITRES_PER_M3: f64 = 1000.0;

/// Unrounded figures for one coating layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerBreakdown {
    pub layer: Layer,
    pub volume_l: f64,
    pub coating_kg: f64,
    pub curing_agent_kg: f64,
}

/// Unrounded intermediate values of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub area_m2: f64,
    pub primer: LayerBreakdown,
    pub topcoat: LayerBreakdown,
}

impl Breakdown {
    pub fn layer(&self, layer: Layer) -> &LayerBreakdown {
        match layer {
            Layer::Primer => &self.primer,
            Layer::Topcoat => &self.topcoat,
        }
    }

    /// Unrounded sum of all four masses.
    pub fn total_kg(&self) -> f64 {
        self.primer.coating_kg
            + self.primer.curing_agent_kg
            + self.topcoat.coating_kg
            + self.topcoat.curing_agent_kg
    }
}

/// Validate the input and compute the unrounded per-layer figures.
pub fn compute_breakdown(input: &CalculationInput) -> Result<Breakdown> {
    input.validate()?;

    let area_m2 = input.area_mm2 / MM2_PER_M2;
    let primer = layer_breakdown(input, Layer::Primer, area_m2)?;
    let topcoat = layer_breakdown(input, Layer::Topcoat, area_m2)?;

    Ok(Breakdown {
        area_m2,
        primer,
        topcoat,
    })
}

fn layer_breakdown(input: &CalculationInput, layer: Layer, area_m2: f64) -> Result<LayerBreakdown> {
    let thickness_m = input.thickness_mm(layer) / MM_PER_M;
    let volume_l = area_m2 * thickness_m * LITRES_PER_M3;
    let coating_kg = volume_l * input.density_kg_per_l;
    let curing_agent_kg = coating_kg * input.ratio(layer).curing_fraction();

    let (volume_name, coating_name, curing_name) = match layer {
        Layer::Primer => ("primer volume", "primer weight", "primer curing agent"),
        Layer::Topcoat => ("topcoat volume", "topcoat weight", "topcoat curing agent"),
    };
    ensure_finite(volume_name, volume_l)?;
    ensure_finite(coating_name, coating_kg)?;
    ensure_finite(curing_name, curing_agent_kg)?;

    Ok(LayerBreakdown {
        layer,
        volume_l,
        coating_kg,
        curing_agent_kg,
    })
}

/// Compute the rounded masses for `input`.
///
/// Each component mass is rounded to four decimals, ties away from zero.
/// The total is the rounded sum of the rounded components, so the reported
/// figures always add up.
///
/// # Errors
///
/// Returns [`InvalidInputError`] when the input violates a constraint or a
/// derived value overflows.
pub fn compute(input: &CalculationInput) -> Result<CalculationResult> {
    let breakdown = compute_breakdown(input)?;

    let primer_weight = rounded("primer weight", breakdown.primer.coating_kg)?;
    let topcoat_weight = rounded("topcoat weight", breakdown.topcoat.coating_kg)?;
    let primer_curing_agent = rounded("primer curing agent", breakdown.primer.curing_agent_kg)?;
    let topcoat_curing_agent =
        rounded("topcoat curing agent", breakdown.topcoat.curing_agent_kg)?;
    let total_weight = rounded(
        "total weight",
        primer_weight + topcoat_weight + primer_curing_agent + topcoat_curing_agent,
    )?;

    tracing::debug!(
        project = input.label(),
        area_mm2 = input.area_mm2,
        total_weight,
        "computed coating mass"
    );

    Ok(CalculationResult {
        primer_weight,
        topcoat_weight,
        primer_curing_agent,
        topcoat_curing_agent,
        total_weight,
    })
}

fn rounded(quantity: &'static str, value: f64) -> Result<f64> {
    let value = round_result(value);
    ensure_finite(quantity, value)?;
    Ok(value)
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFiniteResult { quantity })
    }
}

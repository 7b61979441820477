//! Coating mass calculator.
//!
//! Converts a surface area and two film thicknesses into the mass of primer,
//! topcoat and the curing agent each layer needs. The calculation is pure:
//! no state, no I/O, identical output for identical input.
//!
//! # Example
//!
//! ```
//! use coatmass_calc::compute;
//! use coatmass_model::CalculationInput;
//!
//! let result = compute(&CalculationInput::example()).unwrap();
//! assert_eq!(result.primer_weight, 0.0036);
//! assert_eq!(result.total_weight, 0.0176);
//! ```

mod calculator;
mod rounding;

pub use calculator::{
    Breakdown, LITRES_PER_M3, LayerBreakdown, MM_PER_M, MM2_PER_M2, compute, compute_breakdown,
};
pub use rounding::{round_result, round_to};

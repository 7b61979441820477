//! Calculation results and their chart-ready distribution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of decimal places every result mass is rounded to.
pub const RESULT_DECIMALS: u32 = 4;

/// Masses derived from one calculation, in kilograms.
///
/// Each value is rounded to [`RESULT_DECIMALS`] places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub primer_weight: f64,
    pub topcoat_weight: f64,
    pub primer_curing_agent: f64,
    pub topcoat_curing_agent: f64,
    /// Sum of the four component masses.
    pub total_weight: f64,
}

impl CalculationResult {
    /// Mass of a single component.
    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::Primer => self.primer_weight,
            Component::Topcoat => self.topcoat_weight,
            Component::PrimerCuringAgent => self.primer_curing_agent,
            Component::TopcoatCuringAgent => self.topcoat_curing_agent,
        }
    }

    /// Split of the total into its four components.
    pub fn distribution(&self) -> Distribution {
        let sum: f64 = Component::ALL.iter().map(|c| self.component(*c)).sum();
        let slices = Component::ALL.map(|component| {
            let weight_kg = self.component(component);
            let percent = if sum > 0.0 {
                weight_kg / sum * 100.0
            } else {
                0.0
            };
            Slice {
                component,
                weight_kg,
                percent,
            }
        });
        Distribution { slices }
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in Component::ALL {
            write!(f, "{}: {:.4} kg, ", component, self.component(component))?;
        }
        write!(f, "total: {:.4} kg", self.total_weight)
    }
}

/// One of the four masses making up a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Primer,
    Topcoat,
    PrimerCuringAgent,
    TopcoatCuringAgent,
}

impl Component {
    /// Chart order.
    pub const ALL: [Component; 4] = [
        Component::Primer,
        Component::Topcoat,
        Component::PrimerCuringAgent,
        Component::TopcoatCuringAgent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Component::Primer => "primer",
            Component::Topcoat => "topcoat",
            Component::PrimerCuringAgent => "primer curing agent",
            Component::TopcoatCuringAgent => "topcoat curing agent",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single chart slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub component: Component,
    pub weight_kg: f64,
    /// Share of the four-component sum, 0-100. Zero when the sum is zero.
    pub percent: f64,
}

/// Four-slice breakdown of a result, in [`Component::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub slices: [Slice; 4],
}

impl Distribution {
    pub fn iter(&self) -> impl Iterator<Item = &Slice> {
        self.slices.iter()
    }

    /// The largest slice; the first one wins a tie.
    pub fn dominant(&self) -> &Slice {
        self.slices
            .iter()
            .reduce(|best, s| if s.weight_kg > best.weight_kg { s } else { best })
            .unwrap_or(&self.slices[0])
    }
}

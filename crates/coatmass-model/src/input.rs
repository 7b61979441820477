//! Calculation inputs.
//!
//! [`CalculationInput`] is the typed record the calculator consumes.
//! [`RawCalculationInput`] is the text form a form or API layer collects;
//! parsing it yields a validated [`CalculationInput`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInputError, Result};

/// Label used when a calculation is submitted without a project name.
pub const DEFAULT_PROJECT_LABEL: &str = "Untitled Project";

/// One of the two coating layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Primer,
    Topcoat,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Primer, Layer::Topcoat];

    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Primer => "primer",
            Layer::Topcoat => "topcoat",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a numeric input field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Area,
    PrimerThickness,
    TopcoatThickness,
    Density,
    PrimerRatioA,
    PrimerRatioB,
    TopcoatRatioA,
    TopcoatRatioB,
}

impl InputField {
    /// Human-readable field name, with unit where one applies.
    pub fn label(self) -> &'static str {
        match self {
            InputField::Area => "area (mm²)",
            InputField::PrimerThickness => "primer thickness (mm)",
            InputField::TopcoatThickness => "topcoat thickness (mm)",
            InputField::Density => "density (kg/L)",
            InputField::PrimerRatioA => "primer ratio part A",
            InputField::PrimerRatioB => "primer ratio part B",
            InputField::TopcoatRatioA => "topcoat ratio part A",
            InputField::TopcoatRatioB => "topcoat ratio part B",
        }
    }

    fn thickness(layer: Layer) -> Self {
        match layer {
            Layer::Primer => InputField::PrimerThickness,
            Layer::Topcoat => InputField::TopcoatThickness,
        }
    }

    fn ratio_parts(layer: Layer) -> (Self, Self) {
        match layer {
            Layer::Primer => (InputField::PrimerRatioA, InputField::PrimerRatioB),
            Layer::Topcoat => (InputField::TopcoatRatioA, InputField::TopcoatRatioB),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mix ratio `A:B` of a coating layer.
///
/// The curing agent's share of the layer weight is `A / (A + B)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixRatio {
    pub a: f64,
    pub b: f64,
}

impl MixRatio {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Sum of both parts.
    pub fn total(&self) -> f64 {
        self.a + self.b
    }

    /// Fraction of the layer weight to add as curing agent.
    ///
    /// Only meaningful once the ratio has been validated; a zero total
    /// yields NaN.
    pub fn curing_fraction(&self) -> f64 {
        self.a / self.total()
    }
}

impl fmt::Display for MixRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.a, self.b)
    }
}

/// Parameters of one coating mass calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Free-text project name. Blank labels fall back to
    /// [`DEFAULT_PROJECT_LABEL`] via [`CalculationInput::label`].
    #[serde(default)]
    pub project_label: String,
    /// Surface area in square millimetres.
    pub area_mm2: f64,
    /// Primer film thickness in millimetres.
    pub primer_thickness_mm: f64,
    /// Topcoat film thickness in millimetres.
    pub topcoat_thickness_mm: f64,
    /// Coating density in kilograms per litre.
    pub density_kg_per_l: f64,
    pub primer_ratio: MixRatio,
    pub topcoat_ratio: MixRatio,
}

impl CalculationInput {
    /// Reference job `R6-2000H`, used to pre-fill a fresh form.
    pub fn example() -> Self {
        Self {
            project_label: "R6-2000H".to_string(),
            area_mm2: 73_834.0,
            primer_thickness_mm: 0.04,
            topcoat_thickness_mm: 0.14,
            density_kg_per_l: 1.22,
            primer_ratio: MixRatio::new(1.0, 10.0),
            topcoat_ratio: MixRatio::new(1.0, 10.0),
        }
    }

    /// Project label with the blank-label fallback applied.
    pub fn label(&self) -> &str {
        let trimmed = self.project_label.trim();
        if trimmed.is_empty() {
            DEFAULT_PROJECT_LABEL
        } else {
            trimmed
        }
    }

    pub fn thickness_mm(&self, layer: Layer) -> f64 {
        match layer {
            Layer::Primer => self.primer_thickness_mm,
            Layer::Topcoat => self.topcoat_thickness_mm,
        }
    }

    pub fn ratio(&self, layer: Layer) -> MixRatio {
        match layer {
            Layer::Primer => self.primer_ratio,
            Layer::Topcoat => self.topcoat_ratio,
        }
    }

    /// Check every numeric constraint.
    ///
    /// Area, both thicknesses and density must be finite and strictly
    /// positive. Ratio parts must be finite and non-negative with a
    /// positive sum.
    pub fn validate(&self) -> Result<()> {
        require_positive(InputField::Area, self.area_mm2)?;
        for layer in Layer::ALL {
            require_positive(InputField::thickness(layer), self.thickness_mm(layer))?;
        }
        require_positive(InputField::Density, self.density_kg_per_l)?;

        for layer in Layer::ALL {
            let ratio = self.ratio(layer);
            let (field_a, field_b) = InputField::ratio_parts(layer);
            require_ratio_part(field_a, ratio.a)?;
            require_ratio_part(field_b, ratio.b)?;
            let total = ratio.total();
            if !total.is_finite() {
                return Err(InvalidInputError::RatioOverflow { layer });
            }
            if total <= 0.0 {
                return Err(InvalidInputError::ZeroRatioSum { layer });
            }
        }
        Ok(())
    }
}

fn require_positive(field: InputField, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(InvalidInputError::NotPositive { field, value });
    }
    Ok(())
}

fn require_ratio_part(field: InputField, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(InvalidInputError::NegativeRatioPart { field, value });
    }
    Ok(())
}

/// Calculation input as entered in text fields.
///
/// Every field is optional so that an incomplete form can be represented;
/// [`RawCalculationInput::parse`] reports the first missing or malformed
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCalculationInput {
    pub project_label: Option<String>,
    pub area_mm2: Option<String>,
    pub primer_thickness_mm: Option<String>,
    pub topcoat_thickness_mm: Option<String>,
    pub density_kg_per_l: Option<String>,
    pub primer_ratio_a: Option<String>,
    pub primer_ratio_b: Option<String>,
    pub topcoat_ratio_a: Option<String>,
    pub topcoat_ratio_b: Option<String>,
}

impl RawCalculationInput {
    /// Parse and validate into a [`CalculationInput`].
    pub fn parse(&self) -> Result<CalculationInput> {
        let input = CalculationInput {
            project_label: self.project_label.clone().unwrap_or_default(),
            area_mm2: parse_number(InputField::Area, self.area_mm2.as_deref())?,
            primer_thickness_mm: parse_number(
                InputField::PrimerThickness,
                self.primer_thickness_mm.as_deref(),
            )?,
            topcoat_thickness_mm: parse_number(
                InputField::TopcoatThickness,
                self.topcoat_thickness_mm.as_deref(),
            )?,
            density_kg_per_l: parse_number(InputField::Density, self.density_kg_per_l.as_deref())?,
            primer_ratio: MixRatio::new(
                parse_number(InputField::PrimerRatioA, self.primer_ratio_a.as_deref())?,
                parse_number(InputField::PrimerRatioB, self.primer_ratio_b.as_deref())?,
            ),
            topcoat_ratio: MixRatio::new(
                parse_number(InputField::TopcoatRatioA, self.topcoat_ratio_a.as_deref())?,
                parse_number(InputField::TopcoatRatioB, self.topcoat_ratio_b.as_deref())?,
            ),
        };
        input.validate()?;
        Ok(input)
    }
}

impl TryFrom<&RawCalculationInput> for CalculationInput {
    type Error = InvalidInputError;

    fn try_from(raw: &RawCalculationInput) -> Result<Self> {
        raw.parse()
    }
}

fn parse_number(field: InputField, value: Option<&str>) -> Result<f64> {
    let text = value.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(InvalidInputError::Missing { field });
    }
    text.parse::<f64>()
        .map_err(|_| InvalidInputError::NotANumber {
            field,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_example() -> RawCalculationInput {
        RawCalculationInput {
            project_label: Some("R6-2000H".to_string()),
            area_mm2: Some("73834".to_string()),
            primer_thickness_mm: Some("0.04".to_string()),
            topcoat_thickness_mm: Some("0.14".to_string()),
            density_kg_per_l: Some("1.22".to_string()),
            primer_ratio_a: Some("1".to_string()),
            primer_ratio_b: Some("10".to_string()),
            topcoat_ratio_a: Some("1".to_string()),
            topcoat_ratio_b: Some("10".to_string()),
        }
    }

    #[test]
    fn test_example_is_valid() {
        assert!(CalculationInput::example().validate().is_ok());
    }

    #[test]
    fn test_blank_label_falls_back() {
        let mut input = CalculationInput::example();
        input.project_label = "   ".to_string();
        assert_eq!(input.label(), DEFAULT_PROJECT_LABEL);

        input.project_label = "  Tank 4 ".to_string();
        assert_eq!(input.label(), "Tank 4");
    }

    #[test]
    fn test_zero_ratio_sum_rejected() {
        let mut input = CalculationInput::example();
        input.topcoat_ratio = MixRatio::new(0.0, 0.0);
        assert_eq!(
            input.validate(),
            Err(InvalidInputError::ZeroRatioSum {
                layer: Layer::Topcoat
            })
        );
    }

    #[test]
    fn test_ratio_sum_overflow_rejected() {
        let mut input = CalculationInput::example();
        input.primer_ratio = MixRatio::new(f64::MAX, f64::MAX);
        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::RatioOverflow {
                layer: Layer::Primer
            }
        );
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_zero_ratio_part_allowed() {
        let mut input = CalculationInput::example();
        input.primer_ratio = MixRatio::new(0.0, 4.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_ratio_part_rejected() {
        let mut input = CalculationInput::example();
        input.primer_ratio = MixRatio::new(-1.0, 4.0);
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some(InputField::PrimerRatioA));
    }

    #[test]
    fn test_non_finite_density_rejected() {
        let mut input = CalculationInput::example();
        input.density_kg_per_l = f64::NAN;
        assert_eq!(
            input.validate(),
            Err(InvalidInputError::NonFinite {
                field: InputField::Density
            })
        );
    }

    #[test]
    fn test_parse_raw_example() {
        let parsed = raw_example().parse().unwrap();
        assert_eq!(parsed, CalculationInput::example());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut raw = raw_example();
        raw.area_mm2 = Some(" 73834 ".to_string());
        assert_eq!(raw.parse().unwrap().area_mm2, 73_834.0);
    }

    #[test]
    fn test_parse_missing_field() {
        let mut raw = raw_example();
        raw.density_kg_per_l = Some(String::new());
        assert_eq!(
            raw.parse(),
            Err(InvalidInputError::Missing {
                field: InputField::Density
            })
        );

        raw.density_kg_per_l = None;
        assert!(matches!(
            raw.parse(),
            Err(InvalidInputError::Missing { .. })
        ));
    }

    #[test]
    fn test_parse_not_a_number() {
        let mut raw = raw_example();
        raw.topcoat_thickness_mm = Some("0,14".to_string());
        assert_eq!(
            raw.parse(),
            Err(InvalidInputError::NotANumber {
                field: InputField::TopcoatThickness,
                value: "0,14".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_infinity_is_non_finite() {
        let mut raw = raw_example();
        raw.area_mm2 = Some("inf".to_string());
        assert_eq!(
            raw.parse(),
            Err(InvalidInputError::NonFinite {
                field: InputField::Area
            })
        );
    }
}

//! Tests for coatmass-model types.

use coatmass_model::{
    CalculationInput, CalculationResult, InputField, InvalidInputError, RawCalculationInput,
};

#[test]
fn input_serializes() {
    let input = CalculationInput::example();
    let json = serde_json::to_string(&input).expect("serialize input");
    let round: CalculationInput = serde_json::from_str(&json).expect("deserialize input");
    assert_eq!(round, input);
}

#[test]
fn input_without_label_deserializes() {
    let json = r#"{
        "area_mm2": 1000.0,
        "primer_thickness_mm": 0.1,
        "topcoat_thickness_mm": 0.2,
        "density_kg_per_l": 1.3,
        "primer_ratio": {"a": 1.0, "b": 4.0},
        "topcoat_ratio": {"a": 1.0, "b": 5.0}
    }"#;
    let input: CalculationInput = serde_json::from_str(json).expect("deserialize input");
    assert_eq!(input.label(), "Untitled Project");
    assert!(input.validate().is_ok());
}

#[test]
fn raw_input_from_partial_json() {
    let json = r#"{"project_label": "Hull", "area_mm2": "5000"}"#;
    let raw: RawCalculationInput = serde_json::from_str(json).expect("deserialize raw input");
    let err = CalculationInput::try_from(&raw).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::Missing {
            field: InputField::PrimerThickness
        }
    );
    assert_eq!(err.user_message(), "Please enter a value for primer thickness (mm).");
}

#[test]
fn result_serializes() {
    let result = CalculationResult {
        primer_weight: 0.0036,
        topcoat_weight: 0.0126,
        primer_curing_agent: 0.0003,
        topcoat_curing_agent: 0.0011,
        total_weight: 0.0176,
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: CalculationResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn error_messages_name_the_field() {
    let err = InvalidInputError::NotPositive {
        field: InputField::Area,
        value: -3.0,
    };
    assert_eq!(err.to_string(), "area (mm²) must be greater than zero (got -3)");
}

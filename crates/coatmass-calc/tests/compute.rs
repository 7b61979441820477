//! Calculator behaviour against the reference job and general properties.

use coatmass_calc::{compute, compute_breakdown, round_result};
use coatmass_model::{CalculationInput, InvalidInputError, Layer, MixRatio};
use proptest::prelude::*;

// =============================================================================
// Reference job
// =============================================================================

#[test]
fn reference_job_masses() {
    let result = compute(&CalculationInput::example()).expect("compute example");

    assert_eq!(result.primer_weight, 0.0036);
    assert_eq!(result.topcoat_weight, 0.0126);
    assert_eq!(result.primer_curing_agent, 0.0003);
    assert_eq!(result.topcoat_curing_agent, 0.0011);
    assert_eq!(result.total_weight, 0.0176);
}

#[test]
fn reference_job_curing_agent_is_one_eleventh() {
    let breakdown = compute_breakdown(&CalculationInput::example()).expect("breakdown");
    for layer in Layer::ALL {
        let figures = breakdown.layer(layer);
        assert!((figures.curing_agent_kg - figures.coating_kg / 11.0).abs() < 1e-15);
    }
    assert!((breakdown.primer.coating_kg - 0.003_603_099_2).abs() < 1e-12);
    assert!((breakdown.topcoat.coating_kg - 0.012_610_847_2).abs() < 1e-12);
}

#[test]
fn reference_job_display() {
    let result = compute(&CalculationInput::example()).expect("compute example");
    insta::assert_snapshot!(
        result.to_string(),
        @"primer: 0.0036 kg, topcoat: 0.0126 kg, primer curing agent: 0.0003 kg, topcoat curing agent: 0.0011 kg, total: 0.0176 kg"
    );
}

#[test]
fn zero_ratio_sum_is_rejected_for_either_layer() {
    let mut input = CalculationInput::example();
    input.primer_ratio = MixRatio::new(0.0, 0.0);
    assert_eq!(
        compute(&input),
        Err(InvalidInputError::ZeroRatioSum {
            layer: Layer::Primer
        })
    );

    let mut input = CalculationInput::example();
    input.topcoat_ratio = MixRatio::new(0.0, 0.0);
    assert_eq!(
        compute(&input),
        Err(InvalidInputError::ZeroRatioSum {
            layer: Layer::Topcoat
        })
    );
}

#[test]
fn huge_ratio_parts_are_rejected_not_zeroed() {
    let mut input = CalculationInput::example();
    input.topcoat_ratio = MixRatio::new(f64::MAX, f64::MAX);
    assert_eq!(
        compute(&input),
        Err(InvalidInputError::RatioOverflow {
            layer: Layer::Topcoat
        })
    );
}

#[test]
fn curing_fraction_of_zero_adds_no_agent() {
    let mut input = CalculationInput::example();
    input.primer_ratio = MixRatio::new(0.0, 1.0);
    let result = compute(&input).expect("compute");
    assert_eq!(result.primer_curing_agent, 0.0);
}

// =============================================================================
// Generators
// =============================================================================

fn arb_ratio() -> impl Strategy<Value = MixRatio> {
    (0.0f64..100.0, 0.0f64..100.0)
        .prop_filter("ratio sum must be positive", |(a, b)| a + b > 0.0)
        .prop_map(|(a, b)| MixRatio::new(a, b))
}

fn arb_input() -> impl Strategy<Value = CalculationInput> {
    (
        1.0f64..1.0e9,
        0.001f64..5.0,
        0.001f64..5.0,
        0.1f64..5.0,
        arb_ratio(),
        arb_ratio(),
    )
        .prop_map(
            |(area_mm2, primer_mm, topcoat_mm, density, primer_ratio, topcoat_ratio)| {
                CalculationInput {
                    project_label: "generated".to_string(),
                    area_mm2,
                    primer_thickness_mm: primer_mm,
                    topcoat_thickness_mm: topcoat_mm,
                    density_kg_per_l: density,
                    primer_ratio,
                    topcoat_ratio,
                }
            },
        )
}

/// A value that is zero, negative, or not finite.
fn arb_non_positive() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        -1.0e9f64..0.0,
        Just(f64::NAN),
        Just(f64::NEG_INFINITY),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The total is the rounded sum of the four reported components.
    #[test]
    fn prop_total_is_sum_of_components(input in arb_input()) {
        let result = compute(&input).unwrap();
        let sum = result.primer_weight
            + result.topcoat_weight
            + result.primer_curing_agent
            + result.topcoat_curing_agent;
        prop_assert!((result.total_weight - round_result(sum)).abs() < 1e-9);
    }

    /// Identical input gives bit-identical output.
    #[test]
    fn prop_compute_is_deterministic(input in arb_input()) {
        let first = compute(&input).unwrap();
        let second = compute(&input).unwrap();
        prop_assert_eq!(first.total_weight.to_bits(), second.total_weight.to_bits());
        prop_assert_eq!(first, second);
    }

    /// Every reported mass carries at most four decimals.
    #[test]
    fn prop_results_are_rounded(input in arb_input()) {
        let result = compute(&input).unwrap();
        for value in [
            result.primer_weight,
            result.topcoat_weight,
            result.primer_curing_agent,
            result.topcoat_curing_agent,
            result.total_weight,
        ] {
            prop_assert_eq!(round_result(value), value);
        }
    }

    /// A non-positive area, thickness or density is always rejected.
    #[test]
    fn prop_non_positive_dimension_rejected(
        input in arb_input(),
        bad in arb_non_positive(),
        which in 0usize..4,
    ) {
        let mut input = input;
        match which {
            0 => input.area_mm2 = bad,
            1 => input.primer_thickness_mm = bad,
            2 => input.topcoat_thickness_mm = bad,
            _ => input.density_kg_per_l = bad,
        }
        prop_assert!(compute(&input).is_err());
    }

    /// A zero ratio sum is always rejected, never turned into NaN or zero.
    #[test]
    fn prop_zero_ratio_sum_rejected(input in arb_input(), topcoat in any::<bool>()) {
        let mut input = input;
        if topcoat {
            input.topcoat_ratio = MixRatio::new(0.0, 0.0);
        } else {
            input.primer_ratio = MixRatio::new(0.0, 0.0);
        }
        let is_zero_sum = matches!(
            compute(&input),
            Err(InvalidInputError::ZeroRatioSum { .. })
        );
        prop_assert!(is_zero_sum);
    }
}

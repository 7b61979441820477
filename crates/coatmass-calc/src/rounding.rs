//! Decimal rounding of result masses.

use coatmass_model::RESULT_DECIMALS;

/// Round to `decimals` places, ties away from zero.
///
/// Scales by `10^decimals` and applies [`f64::round`], so `0.00005`
/// becomes `0.0001` and `-0.00005` becomes `-0.0001`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round to the precision used for every reported mass.
pub fn round_result(value: f64) -> f64 {
    round_to(value, RESULT_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_four_places() {
        assert_eq!(round_result(0.0036030992), 0.0036);
        assert_eq!(round_result(0.0126108472), 0.0126);
        assert_eq!(round_result(1.23456), 1.2346);
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(round_to(7.49, 0), 7.0);
    }
}

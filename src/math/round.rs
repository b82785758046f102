use std::str::FromStr;

use rust_decimal::{
    Decimal,
    RoundingStrategy
};

/// Number of decimal places every normalized coordinate and IML keeps.
pub const PRECISION: u32 = 7;

/// Rounds `x` to [`PRECISION`] decimal places, ties to even.
///
/// The value is rounded on its shortest decimal representation with an
/// explicit `MidpointNearestEven` strategy, so the result never depends on
/// any ambient rounding configuration. Values the decimal type cannot hold
/// and non-finite values are returned unchanged.
pub fn round_float(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    match Decimal::from_str(&x.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointNearestEven)
            .to_string()
            .parse::<f64>()
            .unwrap_or(x),
        // only magnitudes past the decimal range (~7.9e28) fail to parse,
        // and every f64 beyond 2^52 is already an integer
        Err(_) => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_round_float() {
        let in_values = [
            29.000000000000004, -121.00000009, -121.00000001, 121.00000005,
            121.00000006];
        let out_values = [29.0, -121.0000001, -121.0, 121.0, 121.0000001];

        for (input, expected) in in_values.iter().zip(out_values.iter()) {
            assert_eq!(*expected, round_float(*input), "rounding {}", input);
        }
    }

    #[test]
    fn test_round_float_ties_to_even() {
        assert_eq!(0.0000002, round_float(0.00000025));
        assert_eq!(0.0000004, round_float(0.00000035));
        assert_eq!(-0.0000002, round_float(-0.00000025));
    }

    #[test]
    fn test_round_float_ignores_other_strategies() {
        // a floor rounding elsewhere must not leak into the normalizer
        let floored = Decimal::from_str("-121.00000009")
            .unwrap()
            .round_dp_with_strategy(PRECISION, RoundingStrategy::ToNegativeInfinity);
        assert_eq!(floored.to_string(), "-121.0000001");
        assert_eq!(-121.0000001, round_float(-121.00000009));
        assert_eq!(121.0, round_float(121.00000005));
    }

    #[test]
    fn test_round_float_non_finite() {
        assert!(round_float(f64::NAN).is_nan());
        assert_eq!(f64::INFINITY, round_float(f64::INFINITY));
        assert_eq!(f64::NEG_INFINITY, round_float(f64::NEG_INFINITY));
    }

    #[test]
    fn test_round_float_huge_values() {
        assert_eq!(1e300, round_float(1e300));
        assert_eq!(-3.5e29, round_float(-3.5e29));
    }

    proptest! {
        #[test]
        fn round_float_is_idempotent(x in -1.0e9f64..1.0e9) {
            let once = round_float(x);
            prop_assert_eq!(once, round_float(once));
        }

        #[test]
        fn round_float_stays_within_half_unit(x in -1.0e6f64..1.0e6) {
            prop_assert!((round_float(x) - x).abs() <= 0.5e-7 + 1e-9);
        }
    }
}

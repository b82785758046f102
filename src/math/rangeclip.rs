/// Saturates `value` to the bounds of the ascending `levels`.
///
/// Values below `levels[0]` become `levels[0]`, values above the last level
/// become the last level, everything in between is returned untouched.
/// With no levels there is nothing to clip against and `value` comes back
/// unchanged.
pub fn range_clip(value: f64, levels: &[f64]) -> f64 {
    match (levels.first(), levels.last()) {
        (Some(&low), Some(&high)) => {
            if value < low {
                low
            } else if value > high {
                high
            } else {
                value
            }
        }
        _ => value,
    }
}

/// Batch form of [`range_clip`]; output keeps the input order and length.
pub fn range_clip_all(values: &[f64], levels: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| range_clip(v, levels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const TEST_IMLS: [f64; 6] = [0.005, 0.007, 0.0098, 0.0137, 0.0192, 0.0269];

    #[test]
    fn test_clip_low_iml_values() {
        assert_eq!(0.005, range_clip(0.0049, &TEST_IMLS));
    }

    #[test]
    fn test_clip_low_imls_many_values() {
        let expected = vec![0.005, 0.005, 0.005];
        let test_input = [0.0049, 0.0048, 0.0047];
        assert_eq!(expected, range_clip_all(&test_input, &TEST_IMLS));
    }

    #[test]
    fn test_clip_high_iml_values() {
        assert_eq!(0.0269, range_clip(0.027, &TEST_IMLS));
    }

    #[test]
    fn test_clip_high_imls_many_values() {
        let expected = vec![0.0269, 0.0269, 0.0269];
        let test_input = [0.027, 0.028, 0.029];
        assert_eq!(expected, range_clip_all(&test_input, &TEST_IMLS));
    }

    #[test]
    fn test_clip_iml_with_normal_value() {
        // in-range values are not snapped to a level
        let valid_imls = [0.005, 0.0051, 0.0268, 0.0269];
        for iml in valid_imls {
            assert_eq!(iml, range_clip(iml, &TEST_IMLS));
        }
    }

    #[test]
    fn test_clip_with_single_level() {
        assert_eq!(1.0, range_clip(0.5, &[1.0]));
        assert_eq!(1.0, range_clip(1.5, &[1.0]));
    }

    #[test]
    fn test_clip_without_levels_passes_through() {
        assert_eq!(3.3, range_clip(3.3, &[]));
        assert!(range_clip_all(&[], &TEST_IMLS).is_empty());
    }

    proptest! {
        #[test]
        fn batch_matches_scalar(values in prop::collection::vec(-1.0f64..1.0, 0..32)) {
            let batch = range_clip_all(&values, &TEST_IMLS);
            prop_assert_eq!(batch.len(), values.len());
            for (clipped, v) in batch.iter().zip(values.iter()) {
                prop_assert_eq!(*clipped, range_clip(*v, &TEST_IMLS));
            }
        }

        #[test]
        fn clipped_value_is_within_bounds(v in -1.0f64..1.0) {
            let clipped = range_clip(v, &TEST_IMLS);
            prop_assert!(clipped >= TEST_IMLS[0] && clipped <= TEST_IMLS[5]);
            if v > TEST_IMLS[0] && v < TEST_IMLS[5] {
                prop_assert_eq!(clipped, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::trends::comparison::*;
    use proptest::prelude::*;

    #[test]
    fn two_percent_above_is_about_the_same() {
        let comparison = NationalComparison::between(51.0, 50.0, DEFAULT_COMPARISON_THRESHOLD);
        assert_eq!(comparison, NationalComparison::AboutTheSame { threshold: 3.0 });
        assert_eq!(comparison.phrase(), "about the same (within 3%) as");
        assert_eq!(comparison.direction(), None);
    }

    #[test]
    fn ten_percent_above_is_higher() {
        let comparison = NationalComparison::between(55.0, 50.0, DEFAULT_COMPARISON_THRESHOLD);
        assert_eq!(comparison, NationalComparison::Higher);
        assert_eq!(comparison.phrase(), "higher than");
    }

    #[test]
    fn four_percent_above_is_higher() {
        let comparison = NationalComparison::between(52.0, 50.0, DEFAULT_COMPARISON_THRESHOLD);
        assert_eq!(comparison, NationalComparison::Higher);
    }

    #[test]
    fn below_threshold_is_lower() {
        let comparison = NationalComparison::between(40.0, 50.0, DEFAULT_COMPARISON_THRESHOLD);
        assert_eq!(comparison, NationalComparison::Lower);
        assert_eq!(comparison.direction(), Some("lower"));
    }

    #[test]
    fn zero_national_rate_is_higher_unless_both_zero() {
        assert_eq!(
            NationalComparison::between(10.0, 0.0, DEFAULT_COMPARISON_THRESHOLD),
            NationalComparison::Higher
        );
        assert_eq!(
            NationalComparison::between(0.0, 0.0, DEFAULT_COMPARISON_THRESHOLD),
            NationalComparison::Lower
        );
    }

    #[test]
    fn comparison_serializes_with_kind_tag() {
        let json = serde_json::to_value(NationalComparison::AboutTheSame { threshold: 3.0 }).unwrap();
        assert_eq!(json["kind"], "aboutTheSame");
        assert_eq!(json["threshold"], 3.0);
        let json = serde_json::to_value(NationalComparison::Higher).unwrap();
        assert_eq!(json["kind"], "higher");
    }

    proptest! {
        #[test]
        fn label_follows_threshold(place in 0.1f64..5000.0, national in 0.1f64..5000.0) {
            let diff = (place / national - 1.0) * 100.0;
            let comparison = NationalComparison::between(place, national, DEFAULT_COMPARISON_THRESHOLD);
            if diff.abs() < 3.0 {
                prop_assert_eq!(comparison, NationalComparison::AboutTheSame { threshold: 3.0 });
            } else if place > national {
                prop_assert_eq!(comparison, NationalComparison::Higher);
            } else {
                prop_assert_eq!(comparison, NationalComparison::Lower);
            }
        }
    }
}

//! Property-based tests for decimal arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigNumber, Config, RoundingMode};

    fn cfg() -> Config {
        Config::default()
    }

    /// `mantissa × 10^-scale`
    fn decimal(mantissa: i64, scale: i64) -> BigNumber {
        BigNumber::from(mantissa).shift(-scale, &cfg()).unwrap()
    }

    // Strategy for decimals with up to 18 significant digits and 12 places
    fn any_decimal() -> impl Strategy<Value = BigNumber> {
        (-999_999_999_999_999_999i64..=999_999_999_999_999_999, 0i64..=12)
            .prop_map(|(m, s)| decimal(m, s))
    }

    // Strategy for non-zero decimals
    fn non_zero_decimal() -> impl Strategy<Value = BigNumber> {
        any_decimal().prop_filter("non-zero", |x| !x.is_zero())
    }

    fn any_mode() -> impl Strategy<Value = RoundingMode> {
        prop::sample::select(RoundingMode::ALL.to_vec())
    }

    proptest! {
        // Text round trip

        #[test]
        fn string_round_trip(x in any_decimal()) {
            let text = x.to_string();
            let back = BigNumber::parse(text.as_str(), &cfg()).unwrap();
            prop_assert_eq!(back.to_string(), text);
            prop_assert_eq!(back, x);
        }

        #[test]
        fn padded_literals_normalize(m in 1u64..1_000_000, lead in 0usize..4, trail in 0usize..4) {
            let literal = format!("{}{}.{}", "0".repeat(lead), m, "0".repeat(trail));
            let x = BigNumber::parse(literal.as_str(), &cfg()).unwrap();
            prop_assert_eq!(x.to_string(), m.to_string());
        }

        // Exact ring operations

        #[test]
        fn add_commutative(a in any_decimal(), b in any_decimal()) {
            let c = cfg();
            prop_assert_eq!(a.plus(&b, &c), b.plus(&a, &c));
        }

        #[test]
        fn add_associative(a in any_decimal(), b in any_decimal(), d in any_decimal()) {
            let c = cfg();
            prop_assert_eq!(
                a.plus(&b, &c).plus(&d, &c),
                a.plus(&b.plus(&d, &c), &c)
            );
        }

        #[test]
        fn mul_commutative(a in any_decimal(), b in any_decimal()) {
            let c = cfg();
            prop_assert_eq!(a.times(&b, &c), b.times(&a, &c));
        }

        #[test]
        fn mul_associative(a in any_decimal(), b in any_decimal(), d in any_decimal()) {
            let c = cfg();
            prop_assert_eq!(
                a.times(&b, &c).times(&d, &c),
                a.times(&b.times(&d, &c), &c)
            );
        }

        #[test]
        fn distributive(a in any_decimal(), b in any_decimal(), d in any_decimal()) {
            let c = cfg();
            prop_assert_eq!(
                a.times(&b.plus(&d, &c), &c),
                a.times(&b, &c).plus(&a.times(&d, &c), &c)
            );
        }

        // Division

        #[test]
        fn division_within_half_unit(a in any_decimal(), b in non_zero_decimal()) {
            let c = cfg();
            let q = a.div(&b, &c);
            // |q - a/b| <= 0.5e-20, so |q*b - a| <= 0.5e-20 * |b|
            let error = q.times(&b, &c).minus(&a, &c).abs();
            let bound = b.abs().times(&decimal(5, 21), &c);
            prop_assert!(error.lte(&bound), "{} / {} = {}", a, b, q);
        }

        #[test]
        fn modulo_reconstructs(a in any_decimal(), b in non_zero_decimal()) {
            let c = cfg();
            let r = a.modulo(&b, &c);
            let q = a.div_to_int(&b, &c);
            prop_assert_eq!(q.times(&b, &c).plus(&r, &c), a);
            prop_assert!(r.abs().lt(&b.abs()));
        }

        // Rounding

        #[test]
        fn rounding_idempotent(x in any_decimal(), dp in 0u32..14, mode in any_mode()) {
            let c = cfg();
            let once = x.round(Some(dp), Some(mode), &c).unwrap();
            let twice = once.round(Some(dp), Some(mode), &c).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.decimal_places().unwrap() <= u64::from(dp));
        }

        #[test]
        fn floor_ceil_bracket(x in any_decimal()) {
            let c = cfg();
            let floor = x.floor(&c);
            let ceil = x.ceil(&c);
            prop_assert!(floor.lte(&x) && x.lte(&ceil));
            prop_assert!(ceil.minus(&floor, &c).lte(&BigNumber::one()));
        }

        // Extensions

        #[test]
        fn sqrt_of_square(m in 0i64..10_000_000, s in 0i64..=5) {
            let c = cfg();
            let x = decimal(m, s);
            prop_assert_eq!(x.times(&x, &c).square_root(&c), x);
        }

        #[test]
        fn exact_fraction(x in any_decimal()) {
            let c = cfg();
            let f = x.to_fraction(None, &c).unwrap();
            prop_assert_eq!(f.numerator.div(&f.denominator, &c), x);
        }

        #[test]
        fn random_in_unit_interval(dp in 0u32..40) {
            let x = BigNumber::random(Some(dp), &cfg()).unwrap();
            prop_assert!(x.gte(&BigNumber::zero(false)) && x.lt(&BigNumber::one()));
            prop_assert!(x.decimal_places().unwrap() <= u64::from(dp));
        }
    }

    mod quick {
        use quickcheck::{quickcheck, Arbitrary, Gen};

        use super::decimal;
        use crate::{BigNumber, Config};

        /// Decimal with up to 12 digits and 6 places.
        #[derive(Debug, Clone)]
        struct Small(BigNumber);

        impl Arbitrary for Small {
            fn arbitrary(g: &mut Gen) -> Self {
                let mantissa = i64::arbitrary(g) % 1_000_000_000_000;
                let scale = i64::from(u8::arbitrary(g) % 7);
                Small(decimal(mantissa, scale))
            }
        }

        quickcheck! {
            fn minus_undoes_plus(a: Small, b: Small) -> bool {
                let c = Config::default();
                a.0.plus(&b.0, &c).minus(&b.0, &c) == a.0
            }

            fn negation_involutive(a: Small) -> bool {
                a.0.negated().negated() == a.0
            }

            fn ordering_matches_f64(a: Small, b: Small) -> bool {
                a.0.partial_cmp(&b.0) == a.0.to_number().partial_cmp(&b.0.to_number())
                    || a.0.to_number() == b.0.to_number()
            }

            fn fixed_output_reparses(a: Small) -> bool {
                let c = Config::default();
                let text = a.0.to_fixed(Some(6), None, &c).unwrap();
                BigNumber::parse(text.as_str(), &c).unwrap() == a.0
            }
        }
    }
}

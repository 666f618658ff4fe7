//! Property-based tests for the coefficient tower.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Coeff;

    // Strategy for generating exact coefficients (integers and rationals)
    fn exact_coeff() -> impl Strategy<Value = Coeff> {
        prop_oneof![
            (-1000i64..1000i64).prop_map(Coeff::int),
            (-1000i64..1000i64, 1i64..50i64).prop_map(|(n, d)| Coeff::ratio(n, d).unwrap()),
        ]
    }

    // Strategy for generating non-zero exact coefficients
    fn non_zero_exact() -> impl Strategy<Value = Coeff> {
        exact_coeff().prop_filter("coefficient must be non-zero", |c| !c.is_zero())
    }

    proptest! {
        #[test]
        fn exact_add_commutative(a in exact_coeff(), b in exact_coeff()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn exact_add_associative(a in exact_coeff(), b in exact_coeff(), c in exact_coeff()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn exact_mul_commutative(a in exact_coeff(), b in exact_coeff()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn exact_distributive(a in exact_coeff(), b in exact_coeff(), c in exact_coeff()) {
            // a * (b + c) = a * b + a * c
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn exact_stays_exact(a in exact_coeff(), b in non_zero_exact()) {
            prop_assert!((&a + &b).is_exact());
            prop_assert!((&a * &b).is_exact());
            prop_assert!(a.checked_div(&b).unwrap().is_exact());
        }

        #[test]
        fn exact_division_inverts_mul(a in exact_coeff(), b in non_zero_exact()) {
            let q = a.checked_div(&b).unwrap();
            prop_assert_eq!(&q * &b, a);
        }

        #[test]
        fn integral_results_are_demoted(a in exact_coeff(), b in exact_coeff()) {
            let sum = &a + &b;
            if let Coeff::Ratio(r) = &sum {
                prop_assert!(!r.denominator().is_one());
            }
        }

        #[test]
        fn approximate_is_contagious(a in exact_coeff(), x in -100.0f64..100.0f64) {
            prop_assert!(!(&a + &Coeff::real(x)).is_exact());
            prop_assert!(!(&Coeff::real(x) * &a).is_exact());
        }
    }
}

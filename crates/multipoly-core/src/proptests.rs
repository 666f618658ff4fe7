//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use multipoly_numeric::Coeff;
    use proptest::prelude::*;

    use crate::{MonomialOrder, Poly};

    // Strategy for generating small exact coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        prop_oneof![
            3 => (-20i64..20i64).prop_map(Coeff::int),
            1 => (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Coeff::ratio(n, d).unwrap()),
        ]
    }

    // Strategy for generating exponent keys in up to three variables
    fn small_key() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::vec(0u32..4, 0..=3)
    }

    // Strategy for generating small polynomials (0-5 terms)
    fn small_poly() -> impl Strategy<Value = Poly> {
        proptest::collection::vec((small_coeff(), small_key()), 0..=5)
            .prop_map(|terms| terms.into_iter().map(|(c, key)| Poly::new(c, &key)).sum::<Poly>())
    }

    // Strategy for generating single-term polynomials with non-zero coefficients
    fn monomial() -> impl Strategy<Value = Poly> {
        (small_coeff(), small_key())
            .prop_filter("coefficient must be non-zero", |(c, _)| *c != 0)
            .prop_map(|(c, key)| Poly::new(c, &key))
    }

    // Every stored key is canonical and every stored coefficient non-zero
    fn is_canonical(p: &Poly) -> bool {
        p.iter().all(|(key, c)| {
            let exps = key.as_slice();
            *c != 0 && !exps.is_empty() && (exps.len() == 1 || exps.last() != Some(&0))
        })
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_sub_inverse(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            prop_assert_eq!(&a * &Poly::one(), a.clone());
            prop_assert!((&a * &Poly::zero()).is_empty());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            let sum = &a + &(-&a);
            prop_assert!(sum.is_empty());
        }

        // Exponentiation

        #[test]
        fn poly_pow_adds_exponents(a in small_poly(), m in 0i64..4, n in 0i64..4) {
            let lhs = a.pow(m + n).unwrap();
            let rhs = &a.pow(m).unwrap() * &a.pow(n).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0u32..6) {
            let repeated = (0..n).fold(Poly::one(), |acc, _| &acc * &a);
            prop_assert_eq!(a.pow(i64::from(n)).unwrap(), repeated);
        }

        // Representation invariants

        #[test]
        fn results_are_canonical(a in small_poly(), b in small_poly()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            prop_assert!(is_canonical(&a.derivative(1)));
            prop_assert!(is_canonical(&a.integral(2)));
            prop_assert!(is_canonical(&a.compose(&b, 0)));
        }

        #[test]
        fn cancel_is_idempotent(a in small_poly(), b in small_poly()) {
            let mut p = a.clone();
            p -= &b;
            p += &b;
            prop_assert_eq!(&p, &a);

            p.cancel();
            prop_assert!(is_canonical(&p));
            let once = p.clone();
            p.cancel();
            prop_assert_eq!(p.len(), once.len());
            prop_assert_eq!(p, a);
        }

        // Monomial relations

        #[test]
        fn monomial_division_round_trip(p in monomial(), q in monomial()) {
            let product = &p * &q;
            let quotient = product.div_monomial(&q).unwrap();
            prop_assert_eq!(&quotient * &q, product);
            prop_assert_eq!(quotient, p);
        }

        #[test]
        fn lcm_is_divisible_by_both(p in monomial(), q in monomial()) {
            let l = p.lcm(&q).unwrap();
            prop_assert!(l.div_monomial(&p).is_ok());
            prop_assert!(l.div_monomial(&q).is_ok());
        }

        // Calculus

        #[test]
        fn derivative_inverts_integral(a in small_poly(), var in 0usize..4) {
            prop_assert_eq!(a.integral(var).derivative(var), a);
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly(), var in 0usize..3) {
            prop_assert_eq!((&a + &b).derivative(var), &a.derivative(var) + &b.derivative(var));
        }

        // Composition

        #[test]
        fn compose_with_own_variable_is_identity(a in small_poly(), var in 0usize..4) {
            prop_assert_eq!(a.compose(&Poly::var(var), var), a);
        }

        #[test]
        fn compose_is_multiplicative(a in small_poly(), b in small_poly(), s in small_poly()) {
            // (a * b)(s) = a(s) * b(s)
            let lhs = (&a * &b).compose(&s, 1);
            let rhs = &a.compose(&s, 1) * &b.compose(&s, 1);
            prop_assert_eq!(lhs, rhs);
        }

        // Ordering

        #[test]
        fn leading_term_is_a_term(a in small_poly()) {
            for order in [MonomialOrder::Lex, MonomialOrder::Grlex] {
                match a.leading_term(order) {
                    Ok(lt) => {
                        let key = a.sort_key(order).unwrap();
                        prop_assert_eq!(lt.sort_key(order).unwrap(), key);
                        prop_assert_eq!(
                            lt,
                            a.leading_monomial(order).unwrap().scale(&a.leading_coefficient(order).unwrap())
                        );
                    }
                    Err(_) => prop_assert!(a.is_zero_valued()),
                }
            }
        }

        #[test]
        fn grlex_key_degree_is_total_degree(a in small_poly()) {
            if let Some(key) = a.key_grlex() {
                prop_assert_eq!(key.degree(), a.degree());
            }
        }
    }
}

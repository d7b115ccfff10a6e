//! Property-based tests of the ring axioms from a shared generator
//! strategy: small polynomials over `Q[x, y]` under `degrevlex`, built from
//! a list of `(coeff, ex, ey)` terms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::coeff::{BigRationalCoeff, CoeffRing};
    use crate::monomial::order::MonomialOrder;
    use crate::monomial::DenseMonomial;
    use crate::polynomial::construct::polynomial_ring;
    use crate::polynomial::Polynomial;

    type P = Polynomial<DenseMonomial<i16>, BigRationalCoeff>;

    fn ring() -> std::rc::Rc<crate::polynomial::ring::PolyRing<DenseMonomial<i16>, BigRationalCoeff>> {
        polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x", "y"], MonomialOrder::DegRevLex)
            .unwrap()
            .0
    }

    fn from_raw_terms(terms: &[(i64, u8, u8)]) -> P {
        let (r, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x", "y"], MonomialOrder::DegRevLex)
                .unwrap();
        let x = &gens[0];
        let y = &gens[1];
        let mut acc = Polynomial::zero(r);
        for &(c, ex, ey) in terms {
            let term = x.pow(ex as usize).unwrap().multiply(&y.pow(ey as usize).unwrap());
            acc = &acc + &term.scalar_mul(&BigRationalCoeff::from_i64(c));
        }
        acc
    }

    fn small_poly() -> impl Strategy<Value = P> {
        prop::collection::vec((-5i64..=5, 0u8..=3, 0u8..=3), 0..6).prop_map(|terms| from_raw_terms(&terms))
    }

    proptest! {
        #[test]
        fn add_is_commutative(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(&p + &q, &q + &p);
        }

        #[test]
        fn add_is_associative(p in small_poly(), q in small_poly(), r in small_poly()) {
            prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
        }

        #[test]
        fn add_zero_is_identity(p in small_poly()) {
            let zero = Polynomial::zero(ring());
            prop_assert_eq!(&p + &zero, p.clone());
        }

        #[test]
        fn sub_self_is_zero(p in small_poly()) {
            prop_assert!((&p - &p).is_zero());
        }

        #[test]
        fn mul_is_commutative(p in small_poly(), q in small_poly()) {
            prop_assert_eq!(p.multiply(&q), q.multiply(&p));
        }

        #[test]
        fn mul_is_associative(p in small_poly(), q in small_poly(), r in small_poly()) {
            prop_assert_eq!(p.multiply(&q).multiply(&r), p.multiply(&q.multiply(&r)));
        }

        #[test]
        fn mul_one_is_identity(p in small_poly()) {
            let one = Polynomial::one(ring());
            prop_assert_eq!(p.multiply(&one), p.clone());
        }

        #[test]
        fn mul_zero_is_zero(p in small_poly()) {
            let zero = Polynomial::zero(ring());
            prop_assert!(p.multiply(&zero).is_zero());
        }

        #[test]
        fn mul_distributes_over_add(p in small_poly(), q in small_poly(), r in small_poly()) {
            let lhs = p.multiply(&(&q + &r));
            let rhs = &p.multiply(&q) + &p.multiply(&r);
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn result_terms_are_ascending_unique_nonzero(p in small_poly(), q in small_poly()) {
            let sum = &p + &q;
            let order = sum.order();
            let n = sum.arity_hint();
            for t in sum.terms() {
                prop_assert!(!t.coeff.is_zero());
            }
            for pair in sum.terms().windows(2) {
                prop_assert_eq!(
                    order.cmp_monomials(&pair[0].monomial, &pair[1].monomial, n),
                    std::cmp::Ordering::Less
                );
            }
        }
    }
}

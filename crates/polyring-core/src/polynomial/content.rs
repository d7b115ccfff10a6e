//! `content` (gcd of coefficients over an integral base ring) and
//! `integral_fraction` (clear the denominators of a rational-coefficient
//! polynomial).

use std::rc::Rc;

use crate::coeff::{BigIntCoeff, BigRationalCoeff, CoeffRing, IntegralCoeffRing};
use crate::monomial::MonomialRepr;

use super::ring::PolyRing;
use super::term::Term;
use super::Polynomial;

impl<M: MonomialRepr, C: IntegralCoeffRing> Polynomial<M, C> {
    /// The gcd of this polynomial's coefficients; `zero` for the zero
    /// polynomial (the empty fold has no identity under gcd, so this is a
    /// defined special case rather than a panic).
    pub fn content(&self) -> C {
        let mut terms = self.terms.iter();
        match terms.next() {
            None => C::zero(),
            Some(first) => terms.fold(first.coeff.clone(), |acc, t| acc.gcd(&t.coeff)),
        }
    }
}

impl<M: MonomialRepr> Polynomial<M, BigRationalCoeff> {
    /// Clears denominators: returns `(integral, denominator)` such that
    /// `denominator * self == integral` over the integers, with
    /// `integral`'s coefficients coprime (denominator is the lcm of this
    /// polynomial's coefficient denominators).
    pub fn integral_fraction(&self) -> (Polynomial<M, BigIntCoeff>, BigIntCoeff) {
        let denom = self.terms.iter().fold(BigIntCoeff::from_i64(1), |acc, t| {
            let d = BigIntCoeff(t.coeff.inner().denom().clone());
            let g = acc.gcd(&d);
            // lcm(acc, d) = acc * d / gcd(acc, d)
            acc.mul(&d).try_divide(&g).expect("gcd divides both operands")
        });

        let denom_rational = num_rational::BigRational::from(denom.inner().clone());
        let terms = self
            .terms
            .iter()
            .map(|t| {
                let scaled = t.coeff.inner() * &denom_rational;
                debug_assert!(scaled.is_integer(), "denominator scaling must clear every fraction");
                Term::new(t.monomial.clone(), BigIntCoeff(scaled.to_integer()))
            })
            .collect();

        let int_ring = Rc::new(PolyRing::<M, BigIntCoeff>::new(
            self.ring.order.clone(),
            self.ring.names.clone(),
        ));
        (Polynomial::from_sorted_unique_nonzero(terms, int_ring), denom)
    }
}

//! The polynomial layer: the sorted-term representation, the ring
//! arithmetic kernel, heap-ordered multiplication, exponentiation,
//! differentiation, the division engine, and content/fraction helpers.

pub mod arithmetic;
mod coeff_ring_impl;
pub mod construct;
mod content;
mod derivative;
mod display;
pub mod division;
mod properties;
mod heap_mul;
mod pow;
pub mod ring;
mod term;

pub use term::Term;

use std::rc::Rc;

use crate::coeff::CoeffRing;
use crate::error::{PolyError, PolyResult};
use crate::monomial::order::MonomialOrder;
use crate::monomial::MonomialRepr;
use ring::PolyRing;

/// A sorted sequence of terms: monomials strictly increasing under the
/// ring's order, no two terms sharing a monomial, no term with a zero
/// coefficient. The zero polynomial is the empty sequence; the leading
/// term is the last element.
#[derive(Clone, Debug)]
pub struct Polynomial<M: MonomialRepr, C: CoeffRing> {
    terms: Vec<Term<M, C>>,
    ring: Rc<PolyRing<M, C>>,
}

impl<M: MonomialRepr, C: CoeffRing> PartialEq for Polynomial<M, C> {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring && self.terms == other.terms
    }
}

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// Builds a polynomial from an already-sorted, already-unique,
    /// already-nonzero term vector. Used internally by operations that
    /// establish the invariants themselves (ordered merge, heap
    /// multiplication); never exposed to callers, who must go through
    /// [`Polynomial::from_terms`] to get invariant checking.
    pub(crate) fn from_sorted_unique_nonzero(terms: Vec<Term<M, C>>, ring: Rc<PolyRing<M, C>>) -> Self {
        Polynomial { terms, ring }
    }

    pub fn zero(ring: Rc<PolyRing<M, C>>) -> Self {
        Polynomial { terms: Vec::new(), ring }
    }

    pub fn one(ring: Rc<PolyRing<M, C>>) -> Self {
        let n = ring.arity().unwrap_or(0);
        let mono = M::one(n);
        Polynomial {
            terms: vec![Term::new(mono, C::one())],
            ring,
        }
    }

    /// Builds a polynomial from a caller-supplied term list, validating
    /// the sort, uniqueness, and nonzero invariants rather than assuming
    /// them.
    pub fn from_terms(terms: Vec<Term<M, C>>, ring: Rc<PolyRing<M, C>>) -> PolyResult<Self> {
        let n = ring.arity().unwrap_or_else(|| {
            terms
                .iter()
                .map(|t| t.monomial.num_variables())
                .max()
                .unwrap_or(0)
        });

        for t in &terms {
            if t.coeff.is_zero() {
                return Err(PolyError::InvariantViolation {
                    detail: "term list contains a zero coefficient".to_string(),
                });
            }
        }
        for w in terms.windows(2) {
            if ring.order.cmp_monomials(&w[0].monomial, &w[1].monomial, n) != std::cmp::Ordering::Less {
                return Err(PolyError::InvariantViolation {
                    detail: "term list is not strictly ascending under the ring order".to_string(),
                });
            }
        }
        Ok(Polynomial { terms, ring })
    }

    pub fn ring(&self) -> &Rc<PolyRing<M, C>> {
        &self.ring
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    /// Terms in the ring's own order (ascending).
    pub fn terms(&self) -> &[Term<M, C>] {
        &self.terms
    }

    /// A re-sorted copy of the terms under an alternate order.
    pub fn terms_in_order(&self, order: &MonomialOrder) -> Vec<Term<M, C>> {
        let n = self.arity_hint();
        let mut out = self.terms.clone();
        out.sort_by(|a, b| order.cmp_monomials(&a.monomial, &b.monomial, n));
        out
    }

    pub fn leading_term(&self) -> Option<&Term<M, C>> {
        self.terms.last()
    }

    pub fn leading_monomial(&self) -> Option<&M> {
        self.terms.last().map(|t| &t.monomial)
    }

    pub fn leading_coefficient(&self) -> Option<&C> {
        self.terms.last().map(|t| &t.coeff)
    }

    /// The leading term under an alternate order, rather than the ring's
    /// own. Equivalent to `terms_in_order(order).last()` but without
    /// cloning the full term list.
    pub fn leading_term_in(&self, order: &MonomialOrder) -> Option<&Term<M, C>> {
        let n = self.arity_hint();
        self.terms
            .iter()
            .max_by(|a, b| order.cmp_monomials(&a.monomial, &b.monomial, n))
    }

    pub fn leading_monomial_in(&self, order: &MonomialOrder) -> Option<&M> {
        self.leading_term_in(order).map(|t| &t.monomial)
    }

    pub fn leading_coefficient_in(&self, order: &MonomialOrder) -> Option<&C> {
        self.leading_term_in(order).map(|t| &t.coeff)
    }

    /// The polynomial minus its leading term.
    pub fn tail(&self) -> Self {
        let mut terms = self.terms.clone();
        terms.pop();
        Polynomial { terms, ring: self.ring.clone() }
    }

    pub(crate) fn arity_hint(&self) -> usize {
        self.ring.arity().unwrap_or_else(|| {
            self.terms
                .iter()
                .map(|t| t.monomial.num_variables())
                .max()
                .unwrap_or(0)
        })
    }

    pub(crate) fn order(&self) -> &MonomialOrder {
        &self.ring.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::{BigRationalCoeff, CoeffRing};
    use crate::monomial::{DenseMonomial, MonomialRepr};
    use crate::monomial::order::MonomialOrder;
    use ring::VariableNames;

    fn xy_ring() -> Rc<PolyRing<DenseMonomial<i16>, BigRationalCoeff>> {
        Rc::new(PolyRing::new(
            MonomialOrder::DegRevLex,
            VariableNames::Named(vec!["x".into(), "y".into()]),
        ))
    }

    #[test]
    fn test_zero_and_one() {
        let ring = xy_ring();
        let z = Polynomial::<DenseMonomial<i16>, BigRationalCoeff>::zero(ring.clone());
        assert!(z.is_zero());
        assert_eq!(z.nterms(), 0);

        let o = Polynomial::<DenseMonomial<i16>, BigRationalCoeff>::one(ring);
        assert_eq!(o.nterms(), 1);
        assert!(o.leading_monomial().unwrap().is_one());
    }

    #[test]
    fn test_from_terms_rejects_unsorted() {
        let ring = xy_ring();
        let x = DenseMonomial::<i16>::construct(2, |i| if i == 1 { 1 } else { 0 });
        let y = DenseMonomial::<i16>::construct(2, |i| if i == 2 { 1 } else { 0 });
        let terms = vec![
            Term::new(x.clone(), BigRationalCoeff::from_i64(1)),
            Term::new(y.clone(), BigRationalCoeff::from_i64(1)),
        ];
        // x and y have equal total degree 1; under degrevlex, x > y (rev-lex:
        // smaller exponent at highest index wins), so [x, y] is descending.
        assert!(Polynomial::from_terms(terms, ring.clone()).is_err());

        let ascending = vec![
            Term::new(y, BigRationalCoeff::from_i64(1)),
            Term::new(x, BigRationalCoeff::from_i64(1)),
        ];
        assert!(Polynomial::from_terms(ascending, ring).is_ok());
    }

    #[test]
    fn test_from_terms_rejects_zero_coefficient() {
        let ring = xy_ring();
        let one_mono = DenseMonomial::<i16>::one(2);
        let terms = vec![Term::new(one_mono, BigRationalCoeff::zero())];
        assert!(Polynomial::from_terms(terms, ring).is_err());
    }

    #[test]
    fn test_leading_term_in_alternate_order() {
        let (_ring, gens) = construct::polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
            &["x", "y"],
            MonomialOrder::DegRevLex,
        )
        .unwrap();
        let x = &gens[0];
        let y = &gens[1];
        // x^2 + y^3: degrevlex picks y^3 (higher total degree) as leading;
        // lex picks x^2 (higher exponent on the first variable).
        let p = &x.pow(2).unwrap() + &y.pow(3).unwrap();

        assert_eq!(p.leading_monomial().unwrap(), y.pow(3).unwrap().leading_monomial().unwrap());
        assert_eq!(
            p.leading_monomial_in(&MonomialOrder::Lex).unwrap(),
            x.pow(2).unwrap().leading_monomial().unwrap()
        );
        assert_eq!(
            p.leading_coefficient_in(&MonomialOrder::Lex).unwrap(),
            x.pow(2).unwrap().leading_coefficient().unwrap()
        );
    }

    #[test]
    fn test_tail() {
        let ring = xy_ring();
        let x = DenseMonomial::<i16>::construct(2, |i| if i == 1 { 1 } else { 0 });
        let y = DenseMonomial::<i16>::construct(2, |i| if i == 2 { 1 } else { 0 });
        let terms = vec![
            Term::new(y, BigRationalCoeff::from_i64(1)),
            Term::new(x, BigRationalCoeff::from_i64(1)),
        ];
        let p = Polynomial::from_terms(terms, ring).unwrap();
        assert_eq!(p.tail().nterms(), 1);
    }
}

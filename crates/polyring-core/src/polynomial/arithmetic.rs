//! Addition, subtraction, negation, and scalar/term multiplication — the
//! ordered-merge half of the arithmetic kernel. Heap-ordered polynomial
//! multiplication lives in [`super::heap_mul`].

use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

use crate::coeff::CoeffRing;
use crate::monomial::MonomialRepr;

use super::term::Term;
use super::Polynomial;

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// Ordered merge of `self` and `other`'s term sequences; `negate_rhs`
    /// selects addition (`false`) or subtraction (`true`). Shared by `Add`
    /// and `Sub` so the merge logic exists exactly once.
    fn merge(&self, other: &Self, negate_rhs: bool) -> Self {
        assert_eq!(self.ring, other.ring, "operands must share a ring; promote first");

        let n = self.arity_hint().max(other.arity_hint());
        let order = self.order();
        let a = &self.terms;
        let b = &other.terms;
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0usize, 0usize);

        let flip = |c: &C| if negate_rhs { c.neg() } else { c.clone() };

        while i < a.len() && j < b.len() {
            match order.cmp_monomials(&a[i].monomial, &b[j].monomial, n) {
                Ordering::Less => {
                    out.push(a[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(Term::new(b[j].monomial.clone(), flip(&b[j].coeff)));
                    j += 1;
                }
                Ordering::Equal => {
                    let c = if negate_rhs {
                        a[i].coeff.sub(&b[j].coeff)
                    } else {
                        a[i].coeff.add(&b[j].coeff)
                    };
                    if !c.is_zero() {
                        out.push(Term::new(a[i].monomial.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        while i < a.len() {
            out.push(a[i].clone());
            i += 1;
        }
        while j < b.len() {
            out.push(Term::new(b[j].monomial.clone(), flip(&b[j].coeff)));
            j += 1;
        }

        Polynomial::from_sorted_unique_nonzero(out, self.ring.clone())
    }

    pub fn negate(&self) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|t| Term::new(t.monomial.clone(), t.coeff.neg()))
            .collect();
        Polynomial::from_sorted_unique_nonzero(terms, self.ring.clone())
    }

    /// Multiply every coefficient by a scalar, dropping the (at most one)
    /// term that cancels to zero. `0 * p = zero` short-circuits without
    /// touching the term list.
    pub fn scalar_mul(&self, scalar: &C) -> Self {
        if scalar.is_zero() {
            return Polynomial::zero(self.ring.clone());
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|t| {
                let c = t.coeff.mul(scalar);
                if c.is_zero() {
                    None
                } else {
                    Some(Term::new(t.monomial.clone(), c))
                }
            })
            .collect();
        Polynomial::from_sorted_unique_nonzero(terms, self.ring.clone())
    }

    /// Multiply by a single term: every monomial shifts by `term.monomial`,
    /// order is preserved (multiplicativity of the order), so the result
    /// needs no re-sort.
    pub fn term_mul(&self, term: &Term<M, C>) -> Self {
        if term.coeff.is_zero() || self.is_zero() {
            return Polynomial::zero(self.ring.clone());
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|t| {
                let c = t.coeff.mul(&term.coeff);
                if c.is_zero() {
                    None
                } else {
                    Some(Term::new(t.monomial.multiply(&term.monomial), c))
                }
            })
            .collect();
        Polynomial::from_sorted_unique_nonzero(terms, self.ring.clone())
    }
}

impl<M: MonomialRepr, C: CoeffRing> Add for &Polynomial<M, C> {
    type Output = Polynomial<M, C>;
    fn add(self, other: Self) -> Polynomial<M, C> {
        self.merge(other, false)
    }
}

impl<M: MonomialRepr, C: CoeffRing> Sub for &Polynomial<M, C> {
    type Output = Polynomial<M, C>;
    fn sub(self, other: Self) -> Polynomial<M, C> {
        self.merge(other, true)
    }
}

impl<M: MonomialRepr, C: CoeffRing> Neg for &Polynomial<M, C> {
    type Output = Polynomial<M, C>;
    fn neg(self) -> Polynomial<M, C> {
        self.negate()
    }
}

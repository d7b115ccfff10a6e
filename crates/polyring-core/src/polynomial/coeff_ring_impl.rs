//! `Polynomial<M, C>` is itself a [`CoeffRing`], so a polynomial ring can
//! be the coefficient ring of another (a coefficient tower).
//!
//! `CoeffRing::zero`/`CoeffRing::one` are argument-less by design (every
//! other built-in ring has a context-free identity), but a polynomial's
//! zero/one needs a ring handle to know which variables it has none of.
//! There is no way to recover that handle from the type `Polynomial<M, C>`
//! alone, so these two methods panic; they are never called by the
//! division engine or arithmetic kernel (which always go through
//! [`Polynomial::zero`]/[`Polynomial::one`] with an explicit ring), only
//! by generic code written against a bare `CoeffRing` bound with no
//! knowledge it might be instantiated with a polynomial — callers
//! building towers should always construct identities via
//! `Polynomial::zero(ring)`/`Polynomial::one(ring)` directly.

use std::ops::{Add, Neg, Sub};

use crate::coeff::CoeffRing;
use crate::monomial::MonomialRepr;

use super::division::DivMode;
use super::Polynomial;

impl<M: MonomialRepr, C: CoeffRing> CoeffRing for Polynomial<M, C> {
    fn zero() -> Self {
        panic!("Polynomial::zero() via CoeffRing needs a ring; call Polynomial::zero(ring) instead")
    }

    fn one() -> Self {
        panic!("Polynomial::one() via CoeffRing needs a ring; call Polynomial::one(ring) instead")
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }

    fn add(&self, other: &Self) -> Self {
        Add::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        Sub::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Self {
        self.multiply(other)
    }

    fn neg(&self) -> Self {
        Neg::neg(self)
    }

    /// Exact division: reduces `self` against `[other]` to termination and
    /// succeeds only if the remainder vanishes.
    fn try_divide(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let (factors, f_red) = self.divrem(std::slice::from_ref(other), DivMode::Full).ok()?;
        if f_red.is_zero() {
            Some(factors.into_iter().next().unwrap())
        } else {
            None
        }
    }
}

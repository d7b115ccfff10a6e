//! Long division / remainder: a single reduction step against one divisor
//! (Lead and Full mode), and the vector-of-divisors engine that repeats
//! that step to termination.

use crate::coeff::CoeffRing;
use crate::error::{PolyError, PolyResult};
use crate::monomial::MonomialRepr;

use super::term::Term;
use super::Polynomial;

/// Lead mode restricts reduction to the divisor's leading term against the
/// dividend's leading term; Full mode scans the dividend from its leading
/// term downward for the first monomial the divisor's leading monomial
/// divides.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DivMode {
    Lead,
    Full,
}

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// One Lead-mode reduction step: if `leading_term(g)` divides
    /// `leading_term(self)` (monomially, and the coefficient division
    /// succeeds), returns `(factor, self - factor * g)`; otherwise
    /// `(zero, self.clone())`. Fails on a zero divisor.
    pub fn leaddivrem(&self, g: &Self) -> PolyResult<(Self, Self)> {
        self.divrem_single(g, DivMode::Lead)
    }

    /// One reduction step in `mode` against a single divisor `g`. Fails
    /// with [`PolyError::DivisionByZero`] if `g` is zero.
    pub fn divrem_single(&self, g: &Self, mode: DivMode) -> PolyResult<(Self, Self)> {
        if g.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let lm_g = g.leading_monomial().expect("nonzero polynomial has a leading monomial");
        let lc_g = g.leading_coefficient().expect("nonzero polynomial has a leading coefficient");

        let candidate = match mode {
            DivMode::Lead => self.leading_term().map(|t| (t, self.terms.len() - 1)),
            DivMode::Full => self
                .terms
                .iter()
                .enumerate()
                .rev()
                .find(|(_, t)| lm_g.divides(&t.monomial))
                .map(|(i, t)| (t, i)),
        };

        let Some((term, _idx)) = candidate else {
            return Ok((Polynomial::zero(self.ring.clone()), self.clone()));
        };

        let Some(mono_factor) = lm_g.try_divide(&term.monomial) else {
            return Ok((Polynomial::zero(self.ring.clone()), self.clone()));
        };
        let Some(coeff_factor) = term.coeff.try_divide(lc_g) else {
            return Ok((Polynomial::zero(self.ring.clone()), self.clone()));
        };

        let factor_term = Term::new(mono_factor, coeff_factor);
        let factor = Polynomial::from_sorted_unique_nonzero(vec![factor_term.clone()], self.ring.clone());
        let shift = g.term_mul(&factor_term);
        let remainder = self - &shift;
        Ok((factor, remainder))
    }

    /// Reduces `self` against a sequence of divisors to termination:
    /// `self = sum_j factors[j] * G[j] + f_red`, with no leading term of a
    /// nonzero `G[j]` dividing any monomial of `f_red` (Full) or its
    /// leading monomial (Lead). Zero divisors are skipped, not an error.
    pub fn divrem(&self, divisors: &[Self], mode: DivMode) -> PolyResult<(Vec<Self>, Self)> {
        let mut factors: Vec<Self> = divisors.iter().map(|_| Polynomial::zero(self.ring.clone())).collect();
        let mut f_red = self.clone();
        let mut i = 0usize;

        while i < divisors.len() {
            if divisors[i].is_zero() {
                i += 1;
                continue;
            }
            let (q, new_red) = f_red.divrem_single(&divisors[i], mode)?;
            if !q.is_zero() {
                factors[i] = &factors[i] + &q;
                f_red = new_red;
                i = 0;
            } else {
                i += 1;
            }
            if f_red.is_zero() {
                break;
            }
        }

        Ok((factors, f_red))
    }

    /// The quotient half of [`Polynomial::divrem_single`], discarding the
    /// remainder.
    pub fn div_single(&self, g: &Self, mode: DivMode) -> PolyResult<Self> {
        self.divrem_single(g, mode).map(|(q, _)| q)
    }

    /// The remainder half of [`Polynomial::divrem_single`], discarding the
    /// quotient.
    pub fn rem_single(&self, g: &Self, mode: DivMode) -> PolyResult<Self> {
        self.divrem_single(g, mode).map(|(_, r)| r)
    }

    /// The factors half of [`Polynomial::divrem`], discarding the reduced
    /// remainder.
    pub fn div(&self, divisors: &[Self], mode: DivMode) -> PolyResult<Vec<Self>> {
        self.divrem(divisors, mode).map(|(factors, _)| factors)
    }

    /// The reduced-remainder half of [`Polynomial::divrem`], discarding the
    /// factors.
    pub fn rem(&self, divisors: &[Self], mode: DivMode) -> PolyResult<Self> {
        self.divrem(divisors, mode).map(|(_, f_red)| f_red)
    }

    /// Exact division by a single divisor: succeeds only if `g` divides
    /// `self` with zero remainder, unlike [`Polynomial::divrem_single`]
    /// which silently returns a zero quotient on a non-divisible input.
    /// Fails with [`PolyError::NotDivisible`] when a nonzero remainder is
    /// left.
    pub fn exact_div(&self, g: &Self) -> PolyResult<Self> {
        let (quotient, remainder) = self.divrem_single(g, DivMode::Full)?;
        if !remainder.is_zero() {
            return Err(PolyError::NotDivisible {
                dividend: format!("polynomial with {} term(s)", self.nterms()),
                divisor: format!("polynomial with {} term(s)", g.nterms()),
            });
        }
        Ok(quotient)
    }
}

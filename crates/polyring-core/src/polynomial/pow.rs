//! Exponentiation by multinomial expansion.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::coeff::CoeffRing;
use crate::error::{PolyError, PolyResult};
use crate::monomial::MonomialRepr;

use super::term::Term;
use super::Polynomial;

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// `self^n` for `n >= 0`. `n = 0` gives `one` (even for `self = zero`,
    /// matching the ring convention); `zero^n = zero` for `n >= 1`.
    pub fn pow(&self, n: usize) -> PolyResult<Self> {
        if n == 0 {
            return Ok(Polynomial::one(self.ring.clone()));
        }
        if n == 1 {
            return Ok(self.clone());
        }
        if self.is_zero() {
            return Ok(Polynomial::zero(self.ring.clone()));
        }

        let num_terms = self.terms.len();
        if num_terms == 1 {
            return Ok(self.single_term_pow(n));
        }

        let factorial: Vec<BigInt> = {
            let mut f = Vec::with_capacity(n + 1);
            f.push(BigInt::one());
            for k in 1..=n {
                f.push(&f[k - 1] * BigInt::from(k as u64));
            }
            f
        };

        let mut raw: Vec<Term<M, C>> = Vec::new();
        for composition in compositions(n, num_terms) {
            let mut denom = BigInt::one();
            for &i_k in &composition {
                denom *= &factorial[i_k];
            }
            let (coeff_count, rem) = {
                let num = &factorial[n];
                (num / &denom, num % &denom)
            };
            debug_assert!(rem.is_zero(), "multinomial coefficient must be an exact integer");

            let multinomial = C::try_from_bigint(&coeff_count).ok_or_else(|| PolyError::CoefficientOverflow {
                operation: format!("polynomial exponentiation to the {n}th power"),
            })?;

            let mut coeff = multinomial;
            let mut monomial = M::one(self.arity_hint());
            for (k, &i_k) in composition.iter().enumerate() {
                if i_k == 0 {
                    continue;
                }
                let term = &self.terms[k];
                for _ in 0..i_k {
                    coeff = coeff.mul(&term.coeff);
                    monomial = monomial.multiply(&term.monomial);
                }
            }
            if !coeff.is_zero() {
                raw.push(Term::new(monomial, coeff));
            }
        }

        Ok(self.coalesce(raw))
    }

    fn single_term_pow(&self, n: usize) -> Self {
        let term = &self.terms[0];
        let mut coeff = C::one();
        let mut monomial = M::one(self.arity_hint());
        for _ in 0..n {
            coeff = coeff.mul(&term.coeff);
            monomial = monomial.multiply(&term.monomial);
        }
        if coeff.is_zero() {
            Polynomial::zero(self.ring.clone())
        } else {
            Polynomial::from_sorted_unique_nonzero(vec![Term::new(monomial, coeff)], self.ring.clone())
        }
    }

    /// Sorts and merges a raw (possibly unsorted, possibly
    /// monomial-duplicating) term list into a valid polynomial. Used by
    /// exponentiation, whose multinomial expansion can produce the same
    /// monomial along more than one composition.
    pub(super) fn coalesce(&self, mut raw: Vec<Term<M, C>>) -> Self {
        let n = self.arity_hint();
        let order = self.order();
        raw.sort_by(|a, b| order.cmp_monomials(&a.monomial, &b.monomial, n));

        let mut out: Vec<Term<M, C>> = Vec::with_capacity(raw.len());
        for t in raw {
            match out.last_mut() {
                Some(last) if last.monomial == t.monomial => last.coeff.add_assign(&t.coeff),
                _ => out.push(t),
            }
        }
        out.retain(|t| !t.coeff.is_zero());
        Polynomial::from_sorted_unique_nonzero(out, self.ring.clone())
    }
}

/// All tuples `(i_1, ..., i_slots)` with `i_k >= 0` and `sum i_k = n`, in a
/// fixed odometer order (first coordinate varies slowest).
fn compositions(n: usize, slots: usize) -> Vec<Vec<usize>> {
    if slots == 1 {
        return vec![vec![n]];
    }
    let mut out = Vec::new();
    for i in 0..=n {
        for mut rest in compositions(n - i, slots - 1) {
            let mut v = Vec::with_capacity(slots);
            v.push(i);
            v.append(&mut rest);
            out.push(v);
        }
    }
    out
}

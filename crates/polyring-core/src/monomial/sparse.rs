use std::collections::BTreeMap;

use super::{Exponent, MonomialRepr};

/// A sparse exponent container keyed by 1-based variable index; indices
/// beyond the stored maximum (and any index mapped to zero) read as zero.
/// Arity is reported as the maximum stored index, not a fixed bound.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SparseMonomial<E: Exponent> {
    exps: BTreeMap<u32, E>,
}

impl<E: Exponent> SparseMonomial<E> {
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, E)>) -> Self {
        let mut exps = BTreeMap::new();
        for (i, e) in entries {
            if e != E::ZERO {
                exps.insert(i, e);
            }
        }
        SparseMonomial { exps }
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, E)> + '_ {
        self.exps.iter().map(|(&i, &e)| (i, e))
    }
}

impl<E: Exponent> MonomialRepr for SparseMonomial<E> {
    type Exp = E;

    fn index(&self, i: usize) -> E {
        debug_assert!(i >= 1, "monomial variable indices are 1-based");
        self.exps.get(&(i as u32)).copied().unwrap_or(E::ZERO)
    }

    fn num_variables(&self) -> usize {
        self.exps.keys().next_back().copied().unwrap_or(0) as usize
    }

    fn construct(n: usize, f: impl Fn(usize) -> E) -> Self {
        let mut exps = BTreeMap::new();
        for i in 1..=n {
            let e = f(i);
            if e != E::ZERO {
                exps.insert(i as u32, e);
            }
        }
        SparseMonomial { exps }
    }
}

/// The `j`-th single-variable generator `x_j`, for any `j >= 1`. Unlike the
/// dense variant there is no fixed arity, so this is an unbounded lazy
/// sequence: callers index it directly rather than materialising a `Vec`.
pub fn generator<E: Exponent>(j: u32) -> SparseMonomial<E> {
    SparseMonomial::from_entries([(j, E::ONE)])
}

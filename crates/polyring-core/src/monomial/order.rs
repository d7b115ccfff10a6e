//! Monomial orders: the admissible strict total orders used to sort a
//! polynomial's terms and pick out leading terms.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::{Exponent, MonomialRepr};

/// A strict total order on monomials. Ring construction fixes one of these
/// for the lifetime of the ring; [`MonomialOrder::cmp`] is the sole
/// authority consulted by every leading-term query and every ordered-merge
/// arithmetic operation.
///
/// `Custom` carries a user-supplied comparator over exponent vectors; the
/// caller is responsible for admissibility (`1 < m` for all `m != 1`, and
/// `a < b => a*c < b*c`) — the library's three built-in rules are proven
/// admissible, a custom rule is not checked.
#[derive(Clone)]
pub enum MonomialOrder {
    Lex,
    DegLex,
    DegRevLex,
    Custom(Rc<dyn Fn(&[i64], &[i64]) -> Ordering>),
}

impl fmt::Debug for MonomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonomialOrder::Lex => write!(f, "Lex"),
            MonomialOrder::DegLex => write!(f, "DegLex"),
            MonomialOrder::DegRevLex => write!(f, "DegRevLex"),
            MonomialOrder::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl PartialEq for MonomialOrder {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MonomialOrder::Lex, MonomialOrder::Lex) => true,
            (MonomialOrder::DegLex, MonomialOrder::DegLex) => true,
            (MonomialOrder::DegRevLex, MonomialOrder::DegRevLex) => true,
            (MonomialOrder::Custom(a), MonomialOrder::Custom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for MonomialOrder {}

impl MonomialOrder {
    /// Compare two monomials of a shared representation, padding both to
    /// `n` variables first so the comparison is representation-agnostic.
    pub fn cmp_monomials<M: MonomialRepr>(&self, a: &M, b: &M, n: usize) -> Ordering {
        let ea: Vec<i64> = a.exp_vec(n).into_iter().map(|e| e.to_u64() as i64).collect();
        let eb: Vec<i64> = b.exp_vec(n).into_iter().map(|e| e.to_u64() as i64).collect();
        self.cmp_exp_vecs(&ea, &eb)
    }

    fn cmp_exp_vecs(&self, a: &[i64], b: &[i64]) -> Ordering {
        match self {
            MonomialOrder::Lex => lex(a, b),
            MonomialOrder::DegLex => deg_then(a, b, lex),
            MonomialOrder::DegRevLex => deg_then(a, b, rev_lex),
            MonomialOrder::Custom(f) => f(a, b),
        }
    }

    pub fn lt_monomials<M: MonomialRepr>(&self, a: &M, b: &M, n: usize) -> bool {
        self.cmp_monomials(a, b, n) == Ordering::Less
    }
}

fn total(v: &[i64]) -> i64 {
    v.iter().sum()
}

fn lex(a: &[i64], b: &[i64]) -> Ordering {
    for (&x, &y) in a.iter().zip(b.iter()) {
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Reverse lex: compare from the highest variable index down; the
/// monomial with the *smaller* exponent at the first difference is
/// *greater*.
fn rev_lex(a: &[i64], b: &[i64]) -> Ordering {
    for (&x, &y) in a.iter().zip(b.iter()).rev() {
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other.reverse(),
        }
    }
    Ordering::Equal
}

fn deg_then(a: &[i64], b: &[i64], tiebreak: impl Fn(&[i64], &[i64]) -> Ordering) -> Ordering {
    match total(a).cmp(&total(b)) {
        Ordering::Equal => tiebreak(a, b),
        other => other,
    }
}

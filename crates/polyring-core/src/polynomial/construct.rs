//! Ring construction: the two entry points external callers use to get a
//! [`PolyRing`] and its generators.

use std::collections::HashSet;
use std::rc::Rc;

use crate::coeff::CoeffRing;
use crate::error::{PolyError, PolyResult};
use crate::monomial::order::MonomialOrder;
use crate::monomial::{sparse, Exponent, MonomialRepr, SparseMonomial};

use super::ring::{PolyRing, VariableNames};
use super::term::Term;
use super::Polynomial;

/// Builds a ring with a fixed, named variable set and returns it alongside
/// its generators (one polynomial per name, in the order given). Fails
/// with [`PolyError::DuplicateVariable`] on a repeated name.
pub fn polynomial_ring<M: MonomialRepr, C: CoeffRing>(
    names: &[&str],
    order: MonomialOrder,
) -> PolyResult<(Rc<PolyRing<M, C>>, Vec<Polynomial<M, C>>)> {
    let mut seen = HashSet::new();
    for &name in names {
        if !seen.insert(name) {
            return Err(PolyError::DuplicateVariable { name: name.to_string() });
        }
    }

    let n = names.len();
    let ring = Rc::new(PolyRing::new(
        order,
        VariableNames::Named(names.iter().map(|s| s.to_string()).collect()),
    ));

    let generators = (1..=n)
        .map(|j| {
            let mono = M::construct(n, |i| if i == j { M::Exp::ONE } else { M::Exp::ZERO });
            Polynomial::from_sorted_unique_nonzero(vec![Term::new(mono, C::one())], ring.clone())
        })
        .collect();

    Ok((ring, generators))
}

/// Builds a ring with an unbounded family of variables sharing `prefix`.
/// Individual generators are produced on demand by [`variable`] rather
/// than eagerly, since the family has no fixed size.
pub fn numbered_polynomial_ring<E: Exponent, C: CoeffRing>(
    prefix: &str,
    order: MonomialOrder,
) -> Rc<PolyRing<SparseMonomial<E>, C>> {
    Rc::new(PolyRing::new(order, VariableNames::Numbered(prefix.to_string())))
}

/// The `j`-th generator (`j >= 1`) of a numbered ring.
pub fn variable<E: Exponent, C: CoeffRing>(
    ring: &Rc<PolyRing<SparseMonomial<E>, C>>,
    j: u32,
) -> Polynomial<SparseMonomial<E>, C> {
    let mono = sparse::generator(j);
    Polynomial::from_sorted_unique_nonzero(vec![Term::new(mono, C::one())], ring.clone())
}

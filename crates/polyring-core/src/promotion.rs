//! Ring promotion: computing a common ring for two differently-typed
//! polynomials and lifting values into it, in the order of preference from
//! the design notes.
//!
//! 1. [`map_coeffs`] / [`promote_bigint_to_rational`] — same monomial type
//!    and order, lift coefficients to their common super-ring.
//! 2. [`promote_variable_union`] — named variable sets differ: the common
//!    ring takes their sorted union under `degrevlex`.
//! 3. [`tower_numbered_over_named`] — a named ring and a numbered ring
//!    combine into a tower: the numbered ring outer, the named ring as its
//!    coefficient ring.
//! 4. [`constant`] — wraps a scalar as a constant polynomial.

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::coeff::{BigIntCoeff, BigRationalCoeff, CoeffRing};
use crate::error::{PolyError, PolyResult};
use crate::monomial::order::MonomialOrder;
use crate::monomial::{DenseMonomial, Exponent, MonomialRepr, SparseMonomial};

use crate::polynomial::ring::{PolyRing, VariableNames};
use crate::polynomial::{Polynomial, Term};

/// Rule 1: lifts every coefficient of `p` through `f` into a polynomial
/// over `ring`, which must share `p`'s monomial type and term order —
/// conversion is then a pure per-term map, no re-sort needed.
pub fn map_coeffs<M, C, D>(
    p: &Polynomial<M, C>,
    ring: Rc<PolyRing<M, D>>,
    f: impl Fn(&C) -> D,
) -> Polynomial<M, D>
where
    M: MonomialRepr,
    C: CoeffRing,
    D: CoeffRing,
{
    let terms = p.terms().iter().map(|t| Term::new(t.monomial.clone(), f(&t.coeff))).collect();
    Polynomial::from_sorted_unique_nonzero(terms, ring)
}

/// Built-in instance of rule 1: integers embed in the rationals.
pub fn promote_bigint_to_rational<M: MonomialRepr>(
    p: &Polynomial<M, BigIntCoeff>,
) -> Polynomial<M, BigRationalCoeff> {
    let ring = Rc::new(PolyRing::new(p.ring().order.clone(), p.ring().names.clone()));
    map_coeffs(p, ring, |c| {
        BigRationalCoeff::from(num_rational::BigRational::from(c.inner().clone()))
    })
}

/// Rule 4: wraps a scalar as a constant polynomial (the identity monomial
/// carrying `c`; `zero` for `c = 0`).
pub fn constant<M: MonomialRepr, C: CoeffRing>(ring: Rc<PolyRing<M, C>>, c: C) -> Polynomial<M, C> {
    if c.is_zero() {
        return Polynomial::zero(ring);
    }
    let n = ring.arity().unwrap_or(0);
    Polynomial::from_sorted_unique_nonzero(vec![Term::new(M::one(n), c)], ring)
}

/// Rule 2: promotes two named, dense-monomial polynomials over a shared
/// coefficient ring into the ring whose variables are the sorted union of
/// both source variable sets, under `degrevlex`. Fails if either ring is
/// not named (numbered rings go through rule 3 instead).
pub fn promote_variable_union<E, C>(
    p: &Polynomial<DenseMonomial<E>, C>,
    q: &Polynomial<DenseMonomial<E>, C>,
) -> PolyResult<(
    Rc<PolyRing<DenseMonomial<E>, C>>,
    Polynomial<DenseMonomial<E>, C>,
    Polynomial<DenseMonomial<E>, C>,
)>
where
    E: Exponent,
    C: CoeffRing,
{
    let (p_names, q_names) = match (&p.ring().names, &q.ring().names) {
        (VariableNames::Named(a), VariableNames::Named(b)) => (a, b),
        _ => {
            return Err(PolyError::IncompatibleVariables {
                variable: "<numbered ring>".to_string(),
            })
        }
    };

    let union: Vec<String> = p_names.iter().chain(q_names.iter()).cloned().collect::<BTreeSet<_>>().into_iter().collect();
    let ring = Rc::new(PolyRing::new(MonomialOrder::DegRevLex, VariableNames::Named(union.clone())));
    let n = union.len();

    let project = |src_names: &[String], poly: &Polynomial<DenseMonomial<E>, C>| {
        let target_of_src: Vec<usize> = src_names
            .iter()
            .map(|name| union.iter().position(|u| u == name).expect("union contains every source variable") + 1)
            .collect();

        let mut raw: Vec<Term<DenseMonomial<E>, C>> = poly
            .terms()
            .iter()
            .map(|t| {
                let monomial = DenseMonomial::<E>::construct(n, |target_idx| {
                    target_of_src
                        .iter()
                        .position(|&ti| ti == target_idx)
                        .map(|src_idx| t.monomial.index(src_idx + 1))
                        .unwrap_or(E::ZERO)
                });
                Term::new(monomial, t.coeff.clone())
            })
            .collect();
        raw.sort_by(|a, b| ring.order.cmp_monomials(&a.monomial, &b.monomial, n));
        Polynomial::from_sorted_unique_nonzero(raw, ring.clone())
    };

    let p2 = project(p_names, p);
    let q2 = project(q_names, q);
    Ok((ring, p2, q2))
}

/// Rule 3: combines a named ring (which becomes the coefficient ring of
/// the tower) with a numbered ring's shape (order and unbounded variable
/// prefix) into a single polynomial ring over sparse monomials whose
/// coefficients are themselves polynomials in the named variables.
///
/// `_named_ring` only pins the coefficient type `C` at the type level —
/// the tower ring's own identity (order, names) comes from the numbered
/// side, matching the rule's "the numbered ring becomes the outer ring".
pub fn tower_numbered_over_named<E, M, C>(
    _named_ring: &Rc<PolyRing<M, C>>,
    numbered_order: MonomialOrder,
    numbered_prefix: String,
) -> Rc<PolyRing<SparseMonomial<E>, Polynomial<M, C>>>
where
    E: Exponent,
    M: MonomialRepr,
    C: CoeffRing,
{
    Rc::new(PolyRing::new(numbered_order, VariableNames::Numbered(numbered_prefix)))
}

//! Exact arithmetic over multivariate polynomial rings.
//!
//! `polyring-core` builds sums of coefficient-weighted monomials in a fixed
//! set of named or indexed variables over a user-chosen commutative
//! coefficient ring, and provides ring arithmetic, long division, and
//! type-safe promotion between rings.
//!
//! The crate is organized around four layers, leaves first:
//!
//! - [`monomial`] — exponent-vector representations (dense and sparse) and
//!   monomial orders (C1, C2).
//! - [`coeff`] — the coefficient-ring capability set and the built-in
//!   arbitrary-precision rings.
//! - [`polynomial`] — the sorted-term polynomial representation, the ring
//!   arithmetic kernel, the heap-ordered multiplication, and the division
//!   engine (C3-C6).
//! - [`promotion`] — computing a common ring for two differently-typed
//!   polynomials (C7).

pub mod coeff;
pub mod error;
pub mod monomial;
pub mod polynomial;
pub mod promotion;

pub use error::{PolyError, PolyResult};

/// Convenience re-exports for the common case: dense monomials, a
/// `BigRational` coefficient ring, and the three built-in monomial orders.
pub mod prelude {
    pub use crate::coeff::{BigIntCoeff, BigRationalCoeff, CoeffRing};
    pub use crate::error::{PolyError, PolyResult};
    pub use crate::monomial::{
        order::MonomialOrder, DenseMonomial, MonomialRepr, SparseMonomial,
    };
    pub use crate::polynomial::{
        construct::{numbered_polynomial_ring, polynomial_ring},
        ring::{PolyRing, VariableNames},
        Polynomial,
    };
}

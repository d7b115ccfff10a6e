//! polyring: exact arithmetic over multivariate polynomial rings.
//!
//! This is the user-facing facade over [`polyring_core`]: it re-exports the
//! crate's public surface and a `prelude` module so a caller can reach
//! everything from `polyring::prelude::*` without depending on
//! `polyring-core` directly.
//!
//! # Quick Start
//!
//! ```rust
//! use polyring::prelude::*;
//!
//! let (_ring, gens) = polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
//!     &["x", "y"],
//!     MonomialOrder::DegRevLex,
//! )
//! .unwrap();
//! let x = &gens[0];
//! let y = &gens[1];
//! let sum = x + y;
//! assert_eq!(sum.nterms(), 2);
//! ```

pub use polyring_core as core;

pub use polyring_core::{
    error::{PolyError, PolyResult},
    polynomial::Polynomial,
};

pub use num_bigint;
pub use num_rational;

/// Convenience prelude for common imports.
pub mod prelude {
    pub use crate::core::prelude::*;
}

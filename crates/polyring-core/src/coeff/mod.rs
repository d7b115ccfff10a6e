//! The coefficient-ring capability set and the built-in coefficient rings.
//!
//! A coefficient ring is anything with zero, one, the four ring operations,
//! equality, and (for the division engine) a fallible exact-division
//! query. [`Polynomial`](crate::polynomial::Polynomial) is itself a
//! `CoeffRing` ([`crate::polynomial::coeff_ring_impl`]), so coefficient
//! towers (a polynomial ring as the coefficient ring of another) fall out
//! of the trait rather than needing special-casing.

mod bigint;
mod complex;
mod rational;

pub use bigint::BigIntCoeff;
pub use complex::Complex64Coeff;
pub use rational::BigRationalCoeff;

/// The capability set a coefficient ring must provide. Mirrors
/// `{zero, one, +, -, *, ==, try_divide}` from the design notes, plus an
/// in-place accumulation hook for rings whose `+=` can reuse storage.
pub trait CoeffRing: Clone + PartialEq + std::fmt::Debug {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;

    /// Exact division; `None` when `other` does not divide `self` in this
    /// ring (e.g. `7 / 2` over the integers), `Some` always for a field.
    fn try_divide(&self, other: &Self) -> Option<Self>;

    /// Accumulate `other` into `self`. The default falls back to a fresh
    /// allocation (`*self = self.add(other)`); coefficient rings backed by
    /// arbitrary-precision storage (`BigIntCoeff`, `BigRationalCoeff`)
    /// override this to mutate in place.
    fn add_assign(&mut self, other: &Self) {
        *self = self.add(other);
    }

    /// Lift an exact arbitrary-precision integer (a multinomial
    /// coefficient) into this ring. `None` means the ring cannot represent
    /// it exactly — exponentiation turns that into a
    /// [`crate::error::PolyError::CoefficientOverflow`].
    fn try_from_bigint(_n: &num_bigint::BigInt) -> Option<Self> {
        None
    }
}

/// Coefficient rings over which `content` (gcd of coefficients) is
/// meaningful — integral domains, not fields. `BigRationalCoeff` does not
/// implement this: every nonzero rational is a unit, so its gcd is
/// trivial.
pub trait IntegralCoeffRing: CoeffRing {
    fn gcd(&self, other: &Self) -> Self;
}

impl CoeffRing for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn try_divide(&self, other: &Self) -> Option<Self> {
        if *other == 0 {
            return None;
        }
        if self % other == 0 {
            Some(self / other)
        } else {
            None
        }
    }

    fn try_from_bigint(n: &num_bigint::BigInt) -> Option<Self> {
        num_traits::ToPrimitive::to_i64(n)
    }
}

impl IntegralCoeffRing for i64 {
    fn gcd(&self, other: &Self) -> Self {
        num_integer::Integer::gcd(self, other)
    }
}

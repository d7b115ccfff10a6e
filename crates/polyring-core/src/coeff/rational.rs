use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::CoeffRing;

/// Arbitrary-precision rational coefficients, the default coefficient ring
/// per the external-interfaces section: a field, so `try_divide` only
/// fails on division by zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BigRationalCoeff(pub BigRational);

impl BigRationalCoeff {
    pub fn from_i64(n: i64) -> Self {
        BigRationalCoeff(BigRational::from(BigInt::from(n)))
    }

    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        BigRationalCoeff(BigRational::new(numer, denom))
    }

    pub fn inner(&self) -> &BigRational {
        &self.0
    }
}

impl From<BigRational> for BigRationalCoeff {
    fn from(r: BigRational) -> Self {
        BigRationalCoeff(r)
    }
}

impl std::fmt::Display for BigRationalCoeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl CoeffRing for BigRationalCoeff {
    fn zero() -> Self {
        BigRationalCoeff(BigRational::zero())
    }

    fn one() -> Self {
        BigRationalCoeff(BigRational::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn add(&self, other: &Self) -> Self {
        BigRationalCoeff(&self.0 + &other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        BigRationalCoeff(&self.0 - &other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        BigRationalCoeff(&self.0 * &other.0)
    }

    fn neg(&self) -> Self {
        BigRationalCoeff(-&self.0)
    }

    fn try_divide(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() {
            return None;
        }
        Some(BigRationalCoeff(&self.0 / &other.0))
    }

    fn add_assign(&mut self, other: &Self) {
        self.0 += &other.0;
    }

    fn try_from_bigint(n: &BigInt) -> Option<Self> {
        Some(BigRationalCoeff(BigRational::from(n.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_field_division_always_succeeds() {
        let a = BigRationalCoeff::from_i64(7);
        let b = BigRationalCoeff::from_i64(2);
        let q = a.try_divide(&b).unwrap();
        assert_eq!(q, BigRationalCoeff::new(BigInt::from(7), BigInt::from(2)));
    }

    #[test]
    fn test_rational_division_by_zero_fails() {
        let a = BigRationalCoeff::from_i64(1);
        assert_eq!(a.try_divide(&BigRationalCoeff::zero()), None);
    }
}

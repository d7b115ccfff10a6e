use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::{CoeffRing, IntegralCoeffRing};

/// Arbitrary-precision integer coefficients. A thin newtype over
/// `num_bigint::BigInt` so the ring's exact (non-field) division can be
/// exposed through [`CoeffRing::try_divide`] rather than `BigInt`'s own
/// always-succeeding `Div`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BigIntCoeff(pub BigInt);

impl BigIntCoeff {
    pub fn from_i64(n: i64) -> Self {
        BigIntCoeff(BigInt::from(n))
    }

    pub fn inner(&self) -> &BigInt {
        &self.0
    }
}

impl From<BigInt> for BigIntCoeff {
    fn from(n: BigInt) -> Self {
        BigIntCoeff(n)
    }
}

impl std::fmt::Display for BigIntCoeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl CoeffRing for BigIntCoeff {
    fn zero() -> Self {
        BigIntCoeff(BigInt::zero())
    }

    fn one() -> Self {
        BigIntCoeff(BigInt::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn add(&self, other: &Self) -> Self {
        BigIntCoeff(&self.0 + &other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        BigIntCoeff(&self.0 - &other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        BigIntCoeff(&self.0 * &other.0)
    }

    fn neg(&self) -> Self {
        BigIntCoeff(-&self.0)
    }

    fn try_divide(&self, other: &Self) -> Option<Self> {
        if other.0.is_zero() {
            return None;
        }
        let (q, r) = self.0.div_rem(&other.0);
        if r.is_zero() {
            Some(BigIntCoeff(q))
        } else {
            None
        }
    }

    fn add_assign(&mut self, other: &Self) {
        self.0 += &other.0;
    }

    fn try_from_bigint(n: &BigInt) -> Option<Self> {
        Some(BigIntCoeff(n.clone()))
    }
}

impl IntegralCoeffRing for BigIntCoeff {
    fn gcd(&self, other: &Self) -> Self {
        BigIntCoeff(self.0.gcd(&other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigint_ring() {
        assert!(BigIntCoeff::zero().is_zero());
        assert!(BigIntCoeff::one().is_one());

        let six = BigIntCoeff::from_i64(6);
        let three = BigIntCoeff::from_i64(3);
        assert_eq!(six.try_divide(&three), Some(BigIntCoeff::from_i64(2)));

        let seven = BigIntCoeff::from_i64(7);
        let two = BigIntCoeff::from_i64(2);
        assert_eq!(seven.try_divide(&two), None);
    }

    #[test]
    fn test_bigint_add_assign_inplace() {
        let mut a = BigIntCoeff::from_i64(10);
        a.add_assign(&BigIntCoeff::from_i64(32));
        assert_eq!(a, BigIntCoeff::from_i64(42));
    }
}

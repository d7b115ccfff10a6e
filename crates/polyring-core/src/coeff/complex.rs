use num_complex::Complex64;

use super::CoeffRing;

/// Double-precision complex coefficients, the "numeric type family" built-in
/// instance from the design notes. A field, so `try_divide` only fails on
/// division by zero.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Complex64Coeff(pub Complex64);

impl Complex64Coeff {
    pub fn new(re: f64, im: f64) -> Self {
        Complex64Coeff(Complex64::new(re, im))
    }

    pub fn from_i64(n: i64) -> Self {
        Complex64Coeff(Complex64::new(n as f64, 0.0))
    }

    pub fn inner(&self) -> &Complex64 {
        &self.0
    }
}

impl From<Complex64> for Complex64Coeff {
    fn from(c: Complex64) -> Self {
        Complex64Coeff(c)
    }
}

impl std::fmt::Display for Complex64Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl CoeffRing for Complex64Coeff {
    fn zero() -> Self {
        Complex64Coeff(Complex64::new(0.0, 0.0))
    }

    fn one() -> Self {
        Complex64Coeff(Complex64::new(1.0, 0.0))
    }

    fn is_zero(&self) -> bool {
        self.0.re == 0.0 && self.0.im == 0.0
    }

    fn add(&self, other: &Self) -> Self {
        Complex64Coeff(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        Complex64Coeff(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Complex64Coeff(self.0 * other.0)
    }

    fn neg(&self) -> Self {
        Complex64Coeff(-self.0)
    }

    fn try_divide(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Complex64Coeff(self.0 / other.0))
    }

    fn try_from_bigint(n: &num_bigint::BigInt) -> Option<Self> {
        num_traits::ToPrimitive::to_f64(n).map(|re| Complex64Coeff(Complex64::new(re, 0.0)))
    }
}

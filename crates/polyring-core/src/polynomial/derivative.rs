use crate::coeff::CoeffRing;
use crate::monomial::{Exponent, MonomialRepr};

use super::term::Term;
use super::Polynomial;

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// `d(self)/d(x_i)`, 1-based variable index. A term `c * m` maps to
    /// `(c * e_i) * (m with x_i's exponent decreased by one)` when `e_i >
    /// 0`, and is dropped otherwise. Most orders preserve ordering under
    /// differentiation, but not all, so the result is unconditionally
    /// re-sorted.
    pub fn derivative(&self, i: usize) -> Self {
        let n = self.arity_hint();
        let mut raw: Vec<Term<M, C>> = Vec::with_capacity(self.terms.len());

        for t in &self.terms {
            let e = t.monomial.index(i);
            if e == M::Exp::ZERO {
                continue;
            }
            let scale = exp_to_coeff::<M::Exp, C>(e);
            let coeff = t.coeff.mul(&scale);
            if coeff.is_zero() {
                continue;
            }
            let monomial = M::construct(n.max(i), |k| {
                if k == i {
                    t.monomial.index(k).checked_sub(M::Exp::ONE).expect("exponent was checked positive")
                } else {
                    t.monomial.index(k)
                }
            });
            raw.push(Term::new(monomial, coeff));
        }

        self.coalesce(raw)
    }
}

/// Scales a coefficient by a small non-negative exponent count via
/// repeated addition (`e_i` is the differentiation multiplier, not an
/// arbitrary-precision value, so this never needs `try_from_bigint`).
fn exp_to_coeff<E: Exponent, C: CoeffRing>(e: E) -> C {
    let count = e.to_u64();
    let mut acc = C::zero();
    for _ in 0..count {
        acc.add_assign(&C::one());
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::BigRationalCoeff;
    use crate::monomial::order::MonomialOrder;
    use crate::monomial::DenseMonomial;
    use crate::polynomial::construct::polynomial_ring;

    #[test]
    fn test_derivative_of_generator() {
        let (ring, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x", "y"], MonomialOrder::DegRevLex)
                .unwrap();
        let x = &gens[0];
        let dx = x.derivative(1);
        assert_eq!(dx, Polynomial::one(ring.clone()));

        let dy = x.derivative(2);
        assert!(dy.is_zero());
    }

    #[test]
    fn test_derivative_product_rule() {
        let (_ring, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x", "y"], MonomialOrder::DegRevLex)
                .unwrap();
        let x = &gens[0];
        let y = &gens[1];
        let f = (x + y).pow(2).unwrap();
        let g = &x.multiply(y) + x;

        let lhs = f.multiply(&g).derivative(1);
        let rhs = &f.derivative(1).multiply(&g) + &f.multiply(&g.derivative(1));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_derivative_of_power() {
        let (_ring, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x"], MonomialOrder::Lex).unwrap();
        let x = &gens[0];
        let x3 = x.pow(3).unwrap();
        let d = x3.derivative(1);
        // d/dx x^3 = 3x^2
        assert_eq!(d.nterms(), 1);
        assert_eq!(*d.leading_coefficient().unwrap(), BigRationalCoeff::from_i64(3));
    }
}

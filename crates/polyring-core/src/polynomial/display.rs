//! `Display` for polynomials whose coefficient ring also implements
//! `Display`. Terms print leading-first (descending), each as
//! `coefficient*var1^e1*var2^e2*...`, omitting a coefficient of one and any
//! variable with a zero exponent.

use crate::coeff::CoeffRing;
use crate::monomial::{Exponent, MonomialRepr};

use super::ring::VariableNames;
use super::Polynomial;

fn var_name(names: &VariableNames, i: usize) -> String {
    match names {
        VariableNames::Named(ns) => ns.get(i - 1).cloned().unwrap_or_else(|| format!("x{i}")),
        VariableNames::Numbered(prefix) => format!("{prefix}{i}"),
    }
}

impl<M: MonomialRepr, C: CoeffRing + std::fmt::Display> std::fmt::Display for Polynomial<M, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let n = self.arity_hint();
        let mut first = true;
        for t in self.terms.iter().rev() {
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            let mut factors = String::new();
            for i in 1..=n {
                let e = t.monomial.index(i);
                if e == M::Exp::ZERO {
                    continue;
                }
                let name = var_name(&self.ring.names, i);
                if e == M::Exp::ONE {
                    factors.push_str(&format!("{name}*"));
                } else {
                    factors.push_str(&format!("{name}^{}*", e.to_u64()));
                }
            }
            factors.pop(); // trailing '*'

            if factors.is_empty() {
                write!(f, "{}", t.coeff)?;
            } else if t.coeff.is_one() {
                write!(f, "{factors}")?;
            } else {
                write!(f, "{}*{factors}", t.coeff)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::BigRationalCoeff;
    use crate::monomial::order::MonomialOrder;
    use crate::monomial::DenseMonomial;
    use crate::polynomial::construct::polynomial_ring;

    #[test]
    fn test_display_zero() {
        let (ring, _gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x"], MonomialOrder::Lex).unwrap();
        assert_eq!(format!("{}", Polynomial::zero(ring)), "0");
    }

    #[test]
    fn test_display_sum_of_generators() {
        let (_ring, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x", "y"], MonomialOrder::DegRevLex)
                .unwrap();
        let x = &gens[0];
        let y = &gens[1];
        let sum = x + y;
        assert_eq!(format!("{sum}"), "x + y");
    }

    #[test]
    fn test_display_power_and_coefficient() {
        let (_ring, gens) =
            polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(&["x"], MonomialOrder::Lex).unwrap();
        let x = &gens[0];
        let p = x.pow(2).unwrap().scalar_mul(&BigRationalCoeff::from_i64(3));
        assert_eq!(format!("{p}"), "3*x^2");
    }
}

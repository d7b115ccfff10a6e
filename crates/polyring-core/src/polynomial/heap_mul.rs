//! Heap-ordered Cartesian-product multiplication: walks the `|a| x |b|`
//! grid of term products in monomial order without ever materialising or
//! sorting the full grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Mul;

use crate::coeff::CoeffRing;
use crate::monomial::order::MonomialOrder;
use crate::monomial::MonomialRepr;

use super::term::Term;
use super::Polynomial;

/// A grid cell `(r, c)` keyed by its product monomial. `Ord` is reversed
/// relative to the ring order so a std (max-heap) `BinaryHeap` pops the
/// smallest monomial first.
struct Corner<M: MonomialRepr> {
    r: usize,
    c: usize,
    monomial: M,
    order: MonomialOrder,
    arity: usize,
}

impl<M: MonomialRepr> PartialEq for Corner<M> {
    fn eq(&self, other: &Self) -> bool {
        self.order.cmp_monomials(&self.monomial, &other.monomial, self.arity) == Ordering::Equal
    }
}
impl<M: MonomialRepr> Eq for Corner<M> {}

impl<M: MonomialRepr> PartialOrd for Corner<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: MonomialRepr> Ord for Corner<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp_monomials(&self.monomial, &other.monomial, self.arity)
            .reverse()
    }
}

impl<M: MonomialRepr, C: CoeffRing> Polynomial<M, C> {
    /// `self * other`. Zero short-circuits without entering the grid walk.
    pub fn multiply(&self, other: &Self) -> Self {
        assert_eq!(self.ring, other.ring, "operands must share a ring; promote first");

        if self.is_zero() || other.is_zero() {
            return Polynomial::zero(self.ring.clone());
        }

        let a = &self.terms;
        let b = &other.terms;
        let (m, nb) = (a.len(), b.len());
        let order = self.order().clone();
        let arity = self.arity_hint().max(other.arity_hint());

        let corner_at = |r: usize, c: usize| -> Corner<M> {
            Corner {
                r,
                c,
                monomial: a[r].monomial.multiply(&b[c].monomial),
                order: order.clone(),
                arity,
            }
        };

        // Seed the smaller dimension fully (one corner per row, or per
        // column, whichever is shorter) and walk the longer dimension: each
        // cell is pushed by exactly one predecessor, so the heap never
        // holds more than `m.min(nb)` corners and every cell is visited
        // exactly once.
        let walk_rows = m <= nb;
        let mut heap: BinaryHeap<Corner<M>> = BinaryHeap::with_capacity(m.min(nb));
        if walk_rows {
            for r in 0..m {
                heap.push(corner_at(r, 0));
            }
        } else {
            for c in 0..nb {
                heap.push(corner_at(0, c));
            }
        }

        let mut out: Vec<Term<M, C>> = Vec::with_capacity(m * nb);

        while let Some(corner) = heap.pop() {
            let (r, c) = (corner.r, corner.c);
            let coeff = a[r].coeff.mul(&b[c].coeff);

            match out.last_mut() {
                Some(last)
                    if order.cmp_monomials(&last.monomial, &corner.monomial, arity) == Ordering::Equal =>
                {
                    last.coeff.add_assign(&coeff);
                }
                _ => out.push(Term::new(corner.monomial, coeff)),
            }

            if walk_rows {
                if c + 1 < nb {
                    heap.push(corner_at(r, c + 1));
                }
            } else if r + 1 < m {
                heap.push(corner_at(r + 1, c));
            }

            debug_assert!(heap.len() <= m.min(nb), "heap exceeded its proven bound");
        }

        out.retain(|t| !t.coeff.is_zero());
        Polynomial::from_sorted_unique_nonzero(out, self.ring.clone())
    }
}

impl<M: MonomialRepr, C: CoeffRing> Mul for &Polynomial<M, C> {
    type Output = Polynomial<M, C>;
    fn mul(self, other: Self) -> Polynomial<M, C> {
        self.multiply(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::BigRationalCoeff;
    use crate::monomial::DenseMonomial;
    use crate::polynomial::construct::polynomial_ring;

    #[test]
    fn test_difference_of_squares() {
        let (ring, gens) = polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
            &["x", "y"],
            crate::monomial::order::MonomialOrder::DegRevLex,
        )
        .unwrap();
        let x = &gens[0];
        let y = &gens[1];

        let sum = x + y;
        let diff = x - y;
        let prod = sum.multiply(&diff);

        // x^2 - y^2
        assert_eq!(prod.nterms(), 2);
        let x2 = x.multiply(x);
        let y2 = y.multiply(y);
        let expected = &x2 - &y2;
        assert_eq!(prod, expected);
        let _ = ring;
    }

    #[test]
    fn test_mul_by_zero_short_circuits() {
        let (ring, gens) = polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
            &["x"],
            crate::monomial::order::MonomialOrder::Lex,
        )
        .unwrap();
        let x = &gens[0];
        let z = Polynomial::zero(ring);
        assert!(x.multiply(&z).is_zero());
    }

    #[test]
    fn test_mul_commutative_and_associative() {
        let (_ring, gens) = polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
            &["x", "y"],
            crate::monomial::order::MonomialOrder::DegRevLex,
        )
        .unwrap();
        let x = &gens[0];
        let y = &gens[1];
        let sum = x + y;

        assert_eq!(sum.multiply(x), x.multiply(&sum));

        let prod1 = sum.multiply(x).multiply(y);
        let prod2 = sum.multiply(&x.multiply(y));
        assert_eq!(prod1, prod2);
    }

    #[test]
    fn test_mul_one_is_identity() {
        let (ring, gens) = polynomial_ring::<DenseMonomial<i16>, BigRationalCoeff>(
            &["x", "y"],
            crate::monomial::order::MonomialOrder::DegRevLex,
        )
        .unwrap();
        let x = &gens[0];
        let one = Polynomial::one(ring);
        assert_eq!(x.multiply(&one), x.clone());
    }
}

use super::{Exponent, MonomialRepr};

/// A fixed-arity exponent tuple, caching total degree so repeated
/// `total_degree` calls (the common case inside `degrevlex`/`deglex`
/// comparisons) don't re-sum the vector.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DenseMonomial<E: Exponent> {
    exps: Vec<E>,
    degree: E,
}

impl<E: Exponent> DenseMonomial<E> {
    pub fn arity(&self) -> usize {
        self.exps.len()
    }
}

impl<E: Exponent> MonomialRepr for DenseMonomial<E> {
    type Exp = E;

    fn index(&self, i: usize) -> E {
        debug_assert!(i >= 1, "monomial variable indices are 1-based");
        self.exps.get(i - 1).copied().unwrap_or(E::ZERO)
    }

    fn num_variables(&self) -> usize {
        self.exps.len()
    }

    fn construct(n: usize, f: impl Fn(usize) -> E) -> Self {
        let exps: Vec<E> = (1..=n).map(f).collect();
        let mut degree = E::ZERO;
        for &e in &exps {
            degree = degree
                .checked_add(e)
                .expect("total degree overflowed the exponent type");
        }
        DenseMonomial { exps, degree }
    }

    fn total_degree(&self) -> E {
        self.degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_and_index() {
        let m = DenseMonomial::<i32>::construct(3, |i| i as i32);
        assert_eq!(m.index(1), 1);
        assert_eq!(m.index(2), 2);
        assert_eq!(m.index(3), 3);
        assert_eq!(m.index(4), 0);
        assert_eq!(m.total_degree(), 6);
    }

    #[test]
    fn test_multiply_lcm_gcd() {
        let a = DenseMonomial::<i32>::construct(2, |i| if i == 1 { 2 } else { 0 });
        let b = DenseMonomial::<i32>::construct(2, |i| if i == 2 { 3 } else { 0 });
        let prod = a.multiply(&b);
        assert_eq!(prod.index(1), 2);
        assert_eq!(prod.index(2), 3);

        let l = a.lcm(&b);
        assert_eq!(l.index(1), 2);
        assert_eq!(l.index(2), 3);

        let g = a.gcd(&b);
        assert_eq!(g.total_degree(), 0);
    }

    #[test]
    fn test_divides_and_try_divide() {
        let x2y = DenseMonomial::<i32>::construct(2, |i| if i == 1 { 2 } else { 1 });
        let x = DenseMonomial::<i32>::construct(2, |i| if i == 1 { 1 } else { 0 });
        assert!(x.divides(&x2y));
        let q = x.try_divide(&x2y).unwrap();
        assert_eq!(q.index(1), 1);
        assert_eq!(q.index(2), 1);

        let y2 = DenseMonomial::<i32>::construct(2, |i| if i == 2 { 2 } else { 0 });
        assert!(y2.try_divide(&x).is_none());
    }
}

use crate::error::{PolyError, PolyResult};

use super::dense::DenseMonomial;
use super::sparse::SparseMonomial;
use super::{Exponent, MonomialRepr};

/// Lossless projection of a sparse monomial onto a dense monomial of arity
/// `n`. Fails with [`PolyError::IncompatibleVariables`] if any stored
/// exponent lies at an index greater than `n`.
pub fn to_dense<E: Exponent>(n: usize, m: &SparseMonomial<E>) -> PolyResult<DenseMonomial<E>> {
    for (i, e) in m.entries() {
        if i as usize > n && e != E::ZERO {
            return Err(PolyError::IncompatibleVariables {
                variable: format!("x{i}"),
            });
        }
    }
    Ok(DenseMonomial::construct(n, |i| m.index(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dense_lossless() {
        let m = SparseMonomial::<i32>::from_entries([(1, 2), (2, 3)]);
        let d = to_dense(2, &m).unwrap();
        assert_eq!(d.index(1), 2);
        assert_eq!(d.index(2), 3);
    }

    #[test]
    fn test_to_dense_fails_when_lossy() {
        let m = SparseMonomial::<i32>::from_entries([(1, 1), (5, 1)]);
        let err = to_dense(2, &m).unwrap_err();
        assert!(matches!(err, PolyError::IncompatibleVariables { .. }));
    }

    #[test]
    fn test_to_dense_pads_with_zero() {
        let m = SparseMonomial::<i32>::from_entries([(1, 1)]);
        let d = to_dense(3, &m).unwrap();
        assert_eq!(d.index(1), 1);
        assert_eq!(d.index(2), 0);
        assert_eq!(d.index(3), 0);
    }
}

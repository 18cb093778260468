//! Pairwise squared Euclidean distance matrices over `ndarray` feature matrices.
//!
//! Given X of shape (N, D) and Y of shape (M, D) the result has shape (N, M) and
//! entry (i, j) is the sum over k of (X[i, k] - Y[j, k])^2.
//!
//! ```
//! use ndarray::arr2;
//!
//! let x = arr2(&[[0.0, 0.0], [3.0, 4.0]]);
//! let dists = dist_matrix::compute(&x, &x).unwrap();
//! assert_eq!(dists, arr2(&[[0.0, 25.0], [25.0, 0.0]]));
//! ```

pub mod compare;
pub mod config;
mod computer;
mod error;
mod kernels;
mod strategy;

pub use compare::{allclose, max_abs_diff, DEFAULT_ATOL, DEFAULT_RTOL};
pub use computer::DistanceMatrixComputer;
pub use config::ComputeConfig;
pub use error::{DistanceError, Result};
pub use strategy::{ParseStrategyError, Strategy};

use ndarray::{Array2, ArrayBase, Data, Ix1, Ix2, NdFloat};

/// Rows are samples, columns are features.
pub type FeatureMatrix<T> = Array2<T>;
/// Entry (i, j) is the squared distance from row i of X to row j of Y.
pub type DistanceMatrix<T> = Array2<T>;

/// Distance matrix between the rows of `x` and the rows of `y` using the default config.
pub fn compute<S1, S2, T>(x: &ArrayBase<S1, Ix2>, y: &ArrayBase<S2, Ix2>) -> Result<DistanceMatrix<T>>
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: NdFloat,
{
    DistanceMatrixComputer::default().compute(x, y)
}

/// Squared Euclidean distance between two vectors of the same length.
pub fn squared_distance<S1, S2, T>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> Result<T>
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: NdFloat,
{
    if a.len() != b.len() {
        return Err(DistanceError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(kernels::squared_euclidean(a.view(), b.view()))
}

/// Checks that X and Y have the same number of features and returns (N, M, D).
pub fn check_shapes<S1, S2, T>(x: &ArrayBase<S1, Ix2>, y: &ArrayBase<S2, Ix2>) -> Result<(usize, usize, usize)>
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    let (n, left) = x.dim();
    let (m, right) = y.dim();
    if left != right {
        return Err(DistanceError::ShapeMismatch { left, right });
    }
    Ok((n, m, left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn single_pair_example() {
        let x = arr2(&[[1.0, 2.0, 3.0]]);
        let y = arr2(&[[4.0, 5.0, 6.0]]);
        assert_eq!(compute(&x, &y).unwrap(), arr2(&[[27.0]]));
    }

    #[test]
    fn accepts_views() {
        let x = arr2(&[[0.0f32, 0.0], [3.0, 4.0], [6.0, 8.0]]);
        let first_two = x.slice(ndarray::s![..2, ..]);
        let dists = compute(&first_two, &x.view()).unwrap();
        assert_eq!(dists, arr2(&[[0.0, 25.0, 100.0], [25.0, 0.0, 25.0]]));
    }

    #[test]
    fn mismatched_features_fail() {
        let x = Array2::<f64>::zeros((2, 4));
        let y = Array2::<f64>::zeros((2, 5));
        assert_eq!(
            compute(&x, &y),
            Err(DistanceError::ShapeMismatch { left: 4, right: 5 })
        );
    }

    #[test]
    fn pair_distance() {
        assert_eq!(
            squared_distance(&arr1(&[0.0, 0.0]), &arr1(&[3.0, 4.0])),
            Ok(25.0)
        );
        assert_eq!(
            squared_distance(&arr1(&[0.0, 0.0]), &arr1(&[3.0])),
            Err(DistanceError::ShapeMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn shapes_reported() {
        let x = Array2::<f32>::zeros((0, 5));
        let y = Array2::<f32>::zeros((3, 5));
        assert_eq!(check_shapes(&x, &y), Ok((0, 3, 5)));
    }
}

//! Reproducible random feature matrices for tests, benchmarks and the compare tool.

use anyhow::Result;
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// `rows` x `cols` values drawn uniformly from `[low, high)`, filled row by row.
///
/// # Panics
///
/// Panics if `low >= high`.
pub fn random_matrix(rows: usize, cols: usize, low: f64, high: f64, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((rows, cols), || rng.random_range(low..high))
}

/// Single precision version of [`random_matrix`].
pub fn random_matrix_f32(rows: usize, cols: usize, low: f32, high: f32, seed: u64) -> Array2<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((rows, cols), || rng.random_range(low..high))
}

/// `rows` x `cols` values drawn from a normal distribution.
pub fn random_normal_matrix(rows: usize, cols: usize, mean: f64, std_dev: f64, seed: u64) -> Result<Array2<f64>> {
    let normal = Normal::new(mean, std_dev)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(Array2::from_shape_simple_fn((rows, cols), || normal.sample(&mut rng)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_matrix() {
        assert_eq!(random_matrix(5, 3, 0.0, 10.0, 7), random_matrix(5, 3, 0.0, 10.0, 7));
        assert_ne!(random_matrix(5, 3, 0.0, 10.0, 7), random_matrix(5, 3, 0.0, 10.0, 8));
    }

    #[test]
    fn values_in_range() {
        let m = random_matrix(100, 20, 0.0, 10.0, 1);
        assert_eq!(m.dim(), (100, 20));
        assert!(m.iter().all(|&v| (0.0..10.0).contains(&v)));

        let m = random_matrix_f32(10, 10, -1.0, 1.0, 1);
        assert!(m.iter().all(|&v| (-1.0..1.0).contains(&v)));
    }

    #[test]
    fn empty_shapes() {
        assert_eq!(random_matrix(0, 5, 0.0, 1.0, 1).dim(), (0, 5));
        assert_eq!(random_matrix(5, 0, 0.0, 1.0, 1).dim(), (5, 0));
    }

    #[test]
    fn normal_centred_on_mean() {
        let m = random_normal_matrix(200, 50, 100.0, 1.0, 3).unwrap();
        let mean = m.mean().unwrap();
        assert!((mean - 100.0).abs() < 0.1, "mean {mean}");
    }

    #[test]
    fn bad_std_dev_is_an_error() {
        assert!(random_normal_matrix(2, 2, 0.0, -1.0, 3).is_err());
    }
}

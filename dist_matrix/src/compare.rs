//! Tolerant comparison of distance matrices produced by different strategies.

use ndarray::{ArrayBase, Data, Dimension, NdFloat, Zip};

/// Relative tolerance two strategies are expected to agree within.
pub const DEFAULT_RTOL: f64 = 1e-9;
/// Absolute tolerance, dominant for distances near zero.
pub const DEFAULT_ATOL: f64 = 1e-6;

/// True when `a` and `b` have the same shape and every `|a - b| <= atol + rtol * |b|`.
///
/// `b` is treated as the reference. NaN is never close to anything.
pub fn allclose<S1, S2, T, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>, rtol: T, atol: T) -> bool
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: NdFloat,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return false;
    }
    Zip::from(a)
        .and(b)
        .all(|&p, &q| (p - q).abs() <= atol + rtol * q.abs())
}

/// Largest absolute entrywise difference, or `None` if the shapes differ.
pub fn max_abs_diff<S1, S2, T, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Option<T>
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: NdFloat,
    D: Dimension,
{
    if a.shape() != b.shape() {
        return None;
    }
    Some(
        Zip::from(a)
            .and(b)
            .fold(T::zero(), |acc, &p, &q| acc.max((p - q).abs())),
    )
}

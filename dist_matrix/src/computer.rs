use crate::kernels;
use crate::{check_shapes, ComputeConfig, DistanceMatrix, Result, Strategy};
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix2, NdFloat};
use std::time::Instant;

/// Computes distance matrices according to a [`ComputeConfig`].
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrixComputer {
    config: ComputeConfig,
}

impl DistanceMatrixComputer {
    pub fn new(config: ComputeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComputeConfig {
        &self.config
    }

    /// Squared Euclidean distances between every row of `x` and every row of `y`.
    ///
    /// Fails with [`DistanceError::ShapeMismatch`](crate::DistanceError) when the
    /// inputs have a different number of columns. Zero rows on either side give
    /// an empty matrix of shape (rows(x), rows(y)).
    pub fn compute<S1, S2, T>(&self, x: &ArrayBase<S1, Ix2>, y: &ArrayBase<S2, Ix2>) -> Result<DistanceMatrix<T>>
    where
        S1: Data<Elem = T>,
        S2: Data<Elem = T>,
        T: NdFloat,
    {
        self.compute_with(self.config.strategy, x, y)
    }

    /// As [`compute`](Self::compute) but with `strategy` in place of the configured one.
    pub fn compute_with<S1, S2, T>(
        &self,
        strategy: Strategy,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
    ) -> Result<DistanceMatrix<T>>
    where
        S1: Data<Elem = T>,
        S2: Data<Elem = T>,
        T: NdFloat,
    {
        let (n, m, dims) = check_shapes(x, y)?;

        if n == 0 || m == 0 {
            return Ok(Array2::zeros((n, m)));
        }

        let resolved = self.config.clone().with_strategy(strategy).resolve(n, m, dims);
        let parallel = self.config.use_parallel(n);

        tracing::debug!(
            "distance matrix ({n}, {dims}) x ({m}, {dims}): {} -> {}, parallel = {}",
            strategy,
            resolved,
            parallel
        );

        let start = Instant::now();
        let dists = run(resolved, parallel, x.view(), y.view());
        tracing::trace!("{} in {} us", resolved, start.elapsed().as_micros());

        Ok(dists)
    }
}

fn run<T: NdFloat>(strategy: Strategy, parallel: bool, x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    match (strategy, parallel) {
        (Strategy::Direct, false) => kernels::direct(x, y),
        (Strategy::Direct, true) => kernels::par_direct(x, y),
        (Strategy::Broadcast, false) => kernels::broadcast(x, y),
        (Strategy::Broadcast, true) => kernels::par_broadcast(x, y),
        (Strategy::Nested, false) => kernels::nested(x, y),
        (Strategy::Nested, true) => kernels::par_nested(x, y),
        // resolve() never hands back Auto
        (Strategy::Expanded | Strategy::Auto, false) => kernels::expanded(x, y),
        (Strategy::Expanded | Strategy::Auto, true) => kernels::par_expanded(x, y),
    }
}

//! Settings for [`DistanceMatrixComputer`](crate::DistanceMatrixComputer).
//!
//! A config can be built in code or read from a TOML file such as
//!
//! ```toml
//! strategy = "expanded"
//! parallel = true
//! min_parallel_rows = 128
//! ```
//!
//! Keys that are left out take their default values.

use crate::Strategy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComputeConfig {
    pub strategy: Strategy,
    /// Split the output rows over the rayon pool.
    pub parallel: bool,
    /// Fewer rows of X than this are always computed on the calling thread.
    pub min_parallel_rows: usize,
    /// `Auto` uses `Nested` below this many N*M*D operations and `Expanded` above.
    pub auto_threshold: usize,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            parallel: true,
            min_parallel_rows: 64,
            auto_threshold: 1 << 18,
        }
    }
}

impl ComputeConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid distance matrix config")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_parallel_rows(mut self, min_parallel_rows: usize) -> Self {
        self.min_parallel_rows = min_parallel_rows;
        self
    }

    pub fn with_auto_threshold(mut self, auto_threshold: usize) -> Self {
        self.auto_threshold = auto_threshold;
        self
    }

    /// The concrete strategy used for an (n, d) by (m, d) problem. Never `Auto`.
    pub fn resolve(&self, n: usize, m: usize, d: usize) -> Strategy {
        match self.strategy {
            Strategy::Auto => {
                let work = n.saturating_mul(m).saturating_mul(d);
                if work < self.auto_threshold {
                    Strategy::Nested
                } else {
                    Strategy::Expanded
                }
            }
            concrete => concrete,
        }
    }

    pub fn use_parallel(&self, n: usize) -> bool {
        self.parallel && n >= self.min_parallel_rows
    }
}

//! The distance matrix algorithms.
//!
//! Every function here assumes the caller has already checked that `x` and `y`
//! have the same number of columns. Parallel forms hand each rayon worker whole
//! output rows, so no two workers write the same cell.

mod broadcast;
mod direct;
mod expanded;
mod nested;

pub(crate) use broadcast::{broadcast, par_broadcast};
pub(crate) use direct::{direct, par_direct, squared_euclidean};
pub(crate) use expanded::{expanded, par_expanded};
pub(crate) use nested::{nested, par_nested};

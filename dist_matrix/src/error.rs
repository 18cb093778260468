use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The two feature matrices do not have the same number of columns.
    #[error("feature dimensions differ: left has {left} columns, right has {right}")]
    ShapeMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, DistanceError>;

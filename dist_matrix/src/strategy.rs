use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a distance matrix is computed.
///
/// All concrete strategies produce the same squared Euclidean distances up to
/// floating point rounding. `Auto` picks one of them from the problem size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Per pair accumulation of squared differences. Reference semantics.
    Direct,
    /// Row of X subtracted from all of Y at once, squared and summed along features.
    Broadcast,
    /// |x|^2 + |y|^2 - 2 x.y using precomputed norms and one matrix product.
    Expanded,
    /// Explicit triple index loop.
    Nested,
    #[default]
    Auto,
}

impl Strategy {
    /// Every strategy that names an actual algorithm.
    pub const CONCRETE: [Strategy; 4] = [
        Strategy::Direct,
        Strategy::Broadcast,
        Strategy::Expanded,
        Strategy::Nested,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Broadcast => "broadcast",
            Strategy::Expanded => "expanded",
            Strategy::Nested => "nested",
            Strategy::Auto => "auto",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so tables of strategies line up
        f.pad(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}', expected one of direct, broadcast, expanded, nested, auto")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Strategy::Direct),
            "broadcast" => Ok(Strategy::Broadcast),
            "expanded" => Ok(Strategy::Expanded),
            "nested" => Ok(Strategy::Nested),
            "auto" => Ok(Strategy::Auto),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

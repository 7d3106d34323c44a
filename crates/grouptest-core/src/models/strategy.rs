//! Strategy selector: a closed set of partitioning strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which partitioning strategy a classification uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// One group per item. Ground-truth baseline.
    Singleton,
    /// Two halves, `floor(n/2)` then the rest.
    EvenSplit,
    /// Groups sized so each passes with probability about 0.5 under the
    /// learned bad-item probability.
    ProbabilityTargeted,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Singleton,
        StrategyKind::EvenSplit,
        StrategyKind::ProbabilityTargeted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::EvenSplit => "even-split",
            Self::ProbabilityTargeted => "probability-targeted",
        }
    }

    /// Strategy used by recursive sub-calls once this one has made the first split.
    ///
    /// A group that already failed no longer follows the prior the targeted
    /// split was sized for, so it continues with even splits.
    pub fn after_first_split(&self) -> StrategyKind {
        match self {
            Self::ProbabilityTargeted => Self::EvenSplit,
            other => *other,
        }
    }

    /// Whether partitions from this strategy depend on the learned probability.
    pub fn uses_learned_probability(&self) -> bool {
        matches!(self, Self::ProbabilityTargeted)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "singleton" | "individual" => Ok(Self::Singleton),
            "even-split" | "half-and-half" | "50-50" => Ok(Self::EvenSplit),
            "probability-targeted" | "targeted" => Ok(Self::ProbabilityTargeted),
            _ => Err(ConfigError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

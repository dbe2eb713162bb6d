use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Comparison policy applied at a threshold.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Boundary {
    /// The threshold itself is part of the accepted range (`<=`).
    #[default]
    Inclusive,
    /// The threshold is excluded from the accepted range (`<`).
    Exclusive,
}

impl Boundary {
    /// Returns true if `value` lies below `threshold`, according to this policy.
    pub fn below<T: PartialOrd>(&self, value: T, threshold: T) -> bool {
        match self {
            Self::Inclusive => value <= threshold,
            Self::Exclusive => value < threshold,
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Inclusive => write!(fmt, "<="),
            Self::Exclusive => write!(fmt, "<"),
        }
    }
}

impl std::str::FromStr for Boundary {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inclusive" | "<=" => Ok(Self::Inclusive),
            "exclusive" | "<" => Ok(Self::Exclusive),
            _ => Err(Error::UnknownBoundary),
        }
    }
}

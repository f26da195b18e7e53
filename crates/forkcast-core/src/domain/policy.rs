//! Fairness policies: how a round's winner is selected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fairness rule for one round, selected independently per round.
///
/// - `Random`: one uniform draw over the union of both suggestion lists.
///   Every entry has probability `1/(|A|+|B|)` regardless of contributor.
/// - `Serial`: one participant is randomly empowered to choose and the
///   winner is drawn from that participant's list (random serial
///   dictatorship).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Random,
    Serial,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Random => write!(f, "random"),
            Policy::Serial => write!(f, "serial"),
        }
    }
}

/// Error for unrecognized policy names at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError(String);

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown policy '{}' (expected 'random' or 'serial')", self.0)
    }
}

impl std::error::Error for ParsePolicyError {}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Policy::Random),
            "serial" => Ok(Policy::Serial),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

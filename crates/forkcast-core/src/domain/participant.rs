//! Participant model: the two identities taking part in a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two participants in a session.
///
/// The engine only ever deals with two identities; everything that needs
/// "the other one" goes through [`Participant::other`] so the pairing rule
/// lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Participant {
    User1,
    User2,
}

impl Participant {
    /// The opposite identity (User1 <-> User2).
    pub fn other(self) -> Self {
        match self {
            Participant::User1 => Participant::User2,
            Participant::User2 => Participant::User1,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::User1 => write!(f, "user1"),
            Participant::User2 => write!(f, "user2"),
        }
    }
}

/// Display names for both participants.
///
/// Names are presentation data: the engine records *identities* in outcomes
/// and session state, and names are only consulted when rendering a result.
/// Blank input falls back to placeholder names at construction, so by the
/// time a `ParticipantNames` exists both names are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantNames {
    user1: String,
    user2: String,
}

impl ParticipantNames {
    pub const DEFAULT_USER1: &'static str = "Participant 1";
    pub const DEFAULT_USER2: &'static str = "Participant 2";

    /// Build names from raw input, substituting placeholders for blank or
    /// whitespace-only entries.
    pub fn with_defaults(user1: &str, user2: &str) -> Self {
        let pick = |raw: &str, fallback: &str| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        };
        Self {
            user1: pick(user1, Self::DEFAULT_USER1),
            user2: pick(user2, Self::DEFAULT_USER2),
        }
    }

    /// The display name for the given identity.
    pub fn name_of(&self, who: Participant) -> &str {
        match who {
            Participant::User1 => &self.user1,
            Participant::User2 => &self.user2,
        }
    }
}

impl Default for ParticipantNames {
    fn default() -> Self {
        Self::with_defaults("", "")
    }
}

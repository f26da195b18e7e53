//! Session state carried from the cuisine round into the restaurant round.

use serde::{Deserialize, Serialize};

use super::participant::Participant;
use super::policy::Policy;

/// What the restaurant round needs to know about the cuisine round.
///
/// The caller owns this value: `decide_cuisine` produces it on success and
/// the caller passes it (by reference) into `decide_restaurant`. There are
/// no ambient globals; a session that never reaches the cuisine round just
/// holds the `Default` values.
///
/// Lifecycle: written exactly once by the cuisine round, read and never
/// mutated by the restaurant round, dropped when the session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The policy the cuisine round was decided with.
    pub policy: Policy,

    /// The cuisine round's decider, when it used the serial policy.
    pub decider: Option<Participant>,

    /// The winning cuisine.
    pub cuisine: String,
}

impl SessionState {
    pub fn new(policy: Policy, decider: Option<Participant>, cuisine: impl Into<String>) -> Self {
        Self {
            policy,
            decider,
            cuisine: cuisine.into(),
        }
    }
}

//! Round outcomes: the structured result of one decision round.
//!
//! An outcome records *what* won and, under the serial policy, *who* was
//! empowered to decide. Rendering is kept to a plain-text `describe` so
//! collaborators can present outcomes however they like.

use serde::{Deserialize, Serialize};

use super::participant::{Participant, ParticipantNames};

/// Who decided a serial round, and whether the draw had to fall back to the
/// other participant's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeciderInfo {
    /// The participant empowered to decide. After a fallback this is still
    /// the originally empowered participant, not the list owner the winner
    /// came from.
    pub who: Participant,

    /// True when the decider's own list was empty and the winner was drawn
    /// from the other participant's list instead.
    pub via_fallback: bool,
}

/// The result of one round: the winning suggestion plus decider metadata.
///
/// `decider` is `None` for the random policy (no participant was singled
/// out) and `Some` for the serial policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decider: Option<DeciderInfo>,
}

impl RoundOutcome {
    /// Outcome of a uniform draw over the combined lists.
    pub fn random_draw(winner: impl Into<String>) -> Self {
        Self {
            winner: winner.into(),
            decider: None,
        }
    }

    /// Outcome of a serial round decided from the decider's own list.
    pub fn decided_by(winner: impl Into<String>, who: Participant) -> Self {
        Self {
            winner: winner.into(),
            decider: Some(DeciderInfo {
                who,
                via_fallback: false,
            }),
        }
    }

    /// Outcome of a serial round where the decider had no suggestions and
    /// the draw fell back to the other participant's list.
    pub fn fallback(winner: impl Into<String>, who: Participant) -> Self {
        Self {
            winner: winner.into(),
            decider: Some(DeciderInfo {
                who,
                via_fallback: true,
            }),
        }
    }

    /// Render a one-line human description of this outcome.
    ///
    /// `noun` names what was being decided ("cuisine" or "restaurant") and
    /// only appears in the serial-policy messages.
    pub fn describe(&self, names: &ParticipantNames, noun: &str) -> String {
        match self.decider {
            None => format!("A fair random draw selected {}.", self.winner),
            Some(DeciderInfo {
                who,
                via_fallback: false,
            }) => format!(
                "{} was randomly chosen to decide the {} and selected {}.",
                names.name_of(who),
                noun,
                self.winner
            ),
            Some(DeciderInfo {
                who,
                via_fallback: true,
            }) => format!(
                "{} had no {} suggestions, so the winner was drawn from the \
                 other participant's list: {}.",
                names.name_of(who),
                noun,
                self.winner
            ),
        }
    }
}

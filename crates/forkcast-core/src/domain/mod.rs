//! Domain model (participants, suggestions, policies, outcomes, session).

pub mod errors;
pub mod outcome;
pub mod participant;
pub mod policy;
pub mod session;
pub mod suggestions;

pub use self::errors::DecisionError;
pub use self::outcome::{DeciderInfo, RoundOutcome};
pub use self::participant::{Participant, ParticipantNames};
pub use self::policy::{ParsePolicyError, Policy};
pub use self::session::SessionState;
pub use self::suggestions::SuggestionList;

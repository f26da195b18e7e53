//! Application layer: the decision engine over domain + ports.

pub mod engine;

pub use self::engine::{CuisineDecision, DecisionEngine};

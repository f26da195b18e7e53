//! forkcast-core
//!
//! Fairness-selection engine for a two-participant dining session: each
//! round (cuisine, then restaurant) takes both participants' suggestion
//! lists and a policy and selects one winner.
//!
//! # Module layout
//! - **domain**: participants, suggestion lists, policies, outcomes,
//!   session state, errors
//! - **ports**: injected capabilities (the random source)
//! - **app**: the [`DecisionEngine`](app::DecisionEngine) itself
//!
//! # Policies
//! - `random`: one uniform draw over the union of both lists, so every
//!   suggestion has probability `1/(|A|+|B|)` no matter who contributed it.
//! - `serial`: a coin flip empowers one participant to decide (random
//!   serial dictatorship). When both rounds use `serial`, the restaurant
//!   round's decider is the other participant, so decision power balances
//!   across the session.

pub mod app;
pub mod domain;
pub mod ports;

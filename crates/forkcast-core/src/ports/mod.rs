//! Ports - capability traits the engine depends on.
//!
//! Each trait abstracts something the engine must not own directly, with
//! production and test implementations living next to the trait.

pub mod random_source;

pub use self::random_source::{RandomSource, ScriptedSource, SeededSource, ThreadRngSource};

//! Core provider combinators for surmise.
//!
//! This crate defines the generation contract for choice-source driven test
//! data: the [`Provider`] trait, the per-example [`Source`] handle, the
//! repetition controller that sizes variable-length collections, and the
//! standard combinators built on top of them. The choice stream itself is
//! behind the [`ChoiceSource`] trait; the engine that records, replays, and
//! shrinks it lives outside this crate.

pub mod error;
pub mod provider;
pub mod providers;
pub mod repeat;
pub mod source;

// Re-export the main types
pub use error::*;
pub use provider::*;
pub use providers::*;
pub use repeat::*;
pub use source::*;

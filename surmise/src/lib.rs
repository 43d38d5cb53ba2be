//! Surmise: provider combinators for choice-source driven test generation.
//!
//! A [`Provider`] describes how to derive one value from a stream of
//! primitive choices. Compose the standard providers, then draw from them
//! through a [`Source`] wrapping any [`ChoiceSource`]:
//!
//! ```rust
//! use surmise::*;
//!
//! let pairs = arrays(integers_in(0..=9), 1..=4).map(|xs| (xs.len(), xs));
//!
//! let mut choices = RandomSource::from_seed(7);
//! let mut source = Source::new(&mut choices);
//! let (len, xs) = source.given(&pairs).unwrap();
//! assert!((1..=4).contains(&len));
//! assert!(xs.iter().all(|x| (0..=9).contains(x)));
//! ```

pub mod alphabets;

pub use surmise_core::*;

//! Curated codepoint providers for string generation.
//!
//! Each function returns an ordinary codepoint provider for use with
//! [`strings_of`]; pick the alphabet matching the shape of text a property
//! needs.
//!
//! ```rust
//! use surmise::*;
//!
//! let identifiers = strings_of(alphabets::ascii_alphanumeric(), 1..=8);
//! let mut choices = RandomSource::from_seed(11);
//! let mut source = Source::new(&mut choices);
//! let name = source.given(&identifiers).unwrap();
//! assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

use crate::*;

/// Full ASCII, control characters included.
pub fn ascii() -> Composite<u32> {
    codepoints_in(0..=127)
}

/// Printable ASCII: space through tilde.
pub fn ascii_printable() -> Composite<u32> {
    codepoints_in(32..=126)
}

/// ASCII digits and letters.
pub fn ascii_alphanumeric() -> Composite<u32> {
    mixed(vec![
        codepoints_in('0' as u32..='9' as u32),
        codepoints_in('A' as u32..='Z' as u32),
        codepoints_in('a' as u32..='z' as u32),
    ])
}

/// The Basic Multilingual Plane; surrogate codepoints are filtered out by
/// [`strings_of`] when this alphabet feeds a string provider.
pub fn basic_multilingual() -> Composite<u32> {
    codepoints_in(0..=0xFFFF)
}

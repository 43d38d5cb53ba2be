//! String and codepoint provider properties.

use crate::{draw_random, draw_scripted};
use surmise::*;

/// Property: produced text decodes back to the codepoints drawn.
pub fn test_strings_round_trip_codepoints() {
    let words = strings_of(codepoints_in(0x4E00..=0x4E0F), 2..=2);
    let text = draw_scripted(&words, vec![1, 3]).unwrap();
    let points: Vec<u32> = text.chars().map(u32::from).collect();
    assert_eq!(points, vec![0x4E01, 0x4E03]);
}

/// Property: alphabet membership holds across seeds.
pub fn test_alphabet_membership_holds() {
    let names = strings_of(alphabets::ascii_alphanumeric(), 1..=12);
    for seed in 0..40 {
        let name = draw_random(&names, seed);
        assert!((1..=12).contains(&name.len()));
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric()), "bad name {name:?}");
    }
}

/// Property: string sizes are counted in characters, not bytes.
pub fn test_string_sizes_stay_in_bounds() {
    let texts = strings_of(alphabets::basic_multilingual(), 2..=5);
    for seed in 0..40 {
        let text = draw_random(&texts, seed);
        let count = text.chars().count();
        assert!((2..=5).contains(&count), "bad length {count}");
        assert!(text.chars().all(|c| u32::from(c) <= 0xFFFF));
    }
}

/// Property: the default codepoint distribution produces well-formed text.
pub fn test_full_range_strings_are_valid_text() {
    let texts = strings(0..=6);
    for seed in 0..40 {
        let text = draw_random(&texts, seed);
        assert!(text.chars().count() <= 6);
    }
}

/// Property: an alphabet of nothing but surrogates ends in rejection.
pub fn test_surrogate_only_alphabet_rejects() {
    let broken = strings_of(codepoints_in(0xD800..=0xDFFF), 1..=1);
    assert_eq!(
        draw_scripted(&broken, vec![0, 1, 2, 3]),
        Err(DrawError::Rejected)
    );
}

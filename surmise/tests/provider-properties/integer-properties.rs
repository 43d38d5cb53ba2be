//! Integer and boolean provider properties.

use crate::{draw_random, draw_scripted};
use surmise::*;

/// Property: bounded draws stay inside the requested range.
pub fn test_bounded_integers_stay_in_range() {
    let provider = integers_in(-3..=17);
    for seed in 0..60 {
        let value = draw_random(&provider, seed);
        assert!((-3..=17).contains(&value), "out of range: {value}");
    }
}

/// Property: a single-value range is constant whatever the source holds.
pub fn test_degenerate_range_is_constant() {
    let provider = integers_in(5..=5);
    for seed in 0..20 {
        assert_eq!(draw_random(&provider, seed), 5);
    }
    assert_eq!(draw_scripted(&provider, vec![42]), Ok(5));
}

/// Property: open-ended ranges respect their closed side.
pub fn test_open_ended_ranges_respect_their_bound() {
    let lows = integers_from(10);
    let highs = integers_up_to(-10);
    for seed in 0..60 {
        assert!(draw_random(&lows, seed) >= 10);
        assert!(draw_random(&highs, seed) <= -10);
    }
}

/// Property: booleans map 1:1 from the underlying {0, 1} draw.
pub fn test_booleans_map_one_to_one() {
    assert_eq!(draw_scripted(&booleans(), vec![0]), Ok(false));
    assert_eq!(draw_scripted(&booleans(), vec![1]), Ok(true));
    let mut seen = [false, false];
    for seed in 0..40 {
        seen[usize::from(draw_random(&booleans(), seed))] = true;
    }
    assert!(seen[0] && seen[1], "both boolean values should occur");
}

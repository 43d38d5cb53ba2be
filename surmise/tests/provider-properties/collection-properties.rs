//! Sized-collection provider properties.

use crate::draw_random;
use std::collections::HashSet;
use surmise::*;

/// Property: array sizes land inside the requested bounds.
pub fn test_array_sizes_stay_in_bounds() {
    let provider = arrays(integers_in(0..=9), 2..=6);
    for seed in 0..60 {
        let values = draw_random(&provider, seed);
        assert!((2..=6).contains(&values.len()), "bad size {}", values.len());
        assert!(values.iter().all(|value| (0..=9).contains(value)));
    }
}

/// Property: a fixed-size array of a degenerate element is fully forced.
pub fn test_fixed_size_arrays_are_forced() {
    let provider = arrays(integers_in(1..=1), 3..=3);
    for seed in 0..20 {
        assert_eq!(draw_random(&provider, seed), vec![1, 1, 1]);
    }
}

/// Property: duplicate keys cost retries, not final size.
pub fn test_hash_sizes_survive_duplicate_keys() {
    let provider = hashes(integers_in(0..=3), booleans(), 3..=4);
    for seed in 0..40 {
        let map = draw_random(&provider, seed);
        assert!((3..=4).contains(&map.len()), "bad size {}", map.len());
        assert!(map.keys().all(|key| (0..=3).contains(key)));
    }
}

/// Property: a two-key domain with a forced size of two yields both keys.
pub fn test_two_key_hashes_are_exhaustive() {
    let provider = hashes(choice_of(vec!["a", "b"]), integers_in(0..=9), 2..=2);
    for seed in 0..30 {
        let map = draw_random(&provider, seed);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("a") && map.contains_key("b"));
    }
}

/// Property: fixed arrays draw one value per provider, in order.
pub fn test_fixed_arrays_are_positional() {
    let provider = fixed_arrays(vec![
        integers_in(0..=0),
        integers_in(10..=10),
        integers_in(20..=20),
    ]);
    for seed in 0..20 {
        assert_eq!(draw_random(&provider, seed), vec![0, 10, 20]);
    }
}

/// Property: fixed hashes keep exactly the declared key set.
pub fn test_fixed_hashes_keep_the_key_set() {
    let provider = fixed_hashes(vec![
        ("low", integers_in(0..=4)),
        ("high", integers_in(5..=9)),
    ]);
    for seed in 0..30 {
        let map = draw_random(&provider, seed);
        let keys: HashSet<&str> = map.keys().copied().collect();
        assert_eq!(keys, HashSet::from(["low", "high"]));
        assert!((0..=4).contains(&map["low"]));
        assert!((5..=9).contains(&map["high"]));
    }
}

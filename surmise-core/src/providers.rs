//! Constructor combinators for the standard providers.
//!
//! Free functions covering the usual generation vocabulary: scalars,
//! codepoints, collections with controlled sizes, fixed shapes, and uniform
//! selection. Each returns an ordinary [`Provider`] value that composes
//! further with [`map`](Provider::map), [`select`](Provider::select), or
//! [`composite`].

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::RangeInclusive;

use crate::error::{Draw, DrawError};
use crate::provider::{BoundedIntegers, Composite, Integers, Provider};
use crate::repeat::RepeatController;
use crate::source::Source;

/// Highest codepoint of the common printable ASCII band.
const PRINTABLE_ASCII_MAX: u32 = 126;

/// Provider built from a draw closure.
pub fn composite<T, F>(run: F) -> Composite<T>
where
    F: Fn(&mut Source<'_>) -> Draw<T> + 'static,
{
    Composite::new(run)
}

/// Provider producing clones of a fixed value, consuming no choices.
pub fn constant<T: Clone + 'static>(value: T) -> Composite<T> {
    composite(move |_source| Ok(value.clone()))
}

/// Unbounded integers.
pub fn integers() -> Integers {
    Integers
}

/// Integers bounded below: `min + |x|` for an unbounded draw `x`,
/// saturating at the upper machine limit.
pub fn integers_from(min: i64) -> Composite<i64> {
    composite(move |source| {
        let magnitude = source.given(&Integers)?.unsigned_abs();
        Ok(offset_up(min, magnitude))
    })
}

/// Integers bounded above: `max - |x|` for an unbounded draw `x`,
/// saturating at the lower machine limit.
pub fn integers_up_to(max: i64) -> Composite<i64> {
    composite(move |source| {
        let magnitude = source.given(&Integers)?.unsigned_abs();
        Ok(offset_down(max, magnitude))
    })
}

/// Integers in the inclusive `range`.
///
/// Draws from the bounded primitive over `[0, max - min]` and shifts by
/// `min`; when `min` is zero no shift is applied. A single-value range
/// still consumes one choice and always produces that value.
pub fn integers_in(range: RangeInclusive<i64>) -> Composite<i64> {
    let (min, max) = (*range.start(), *range.end());
    assert!(min <= max, "integer range {}..={} is empty", min, max);
    let span = (max as i128 - min as i128) as u64;
    let offsets = BoundedIntegers::new(span);
    if min == 0 {
        composite(move |source| Ok(source.given(&offsets)? as i64))
    } else {
        composite(move |source| {
            let offset = source.given(&offsets)?;
            Ok((min as i128 + offset as i128) as i64)
        })
    }
}

/// Booleans, mapped 1:1 from a `{0, 1}` draw.
pub fn booleans() -> Composite<bool> {
    integers_in(0..=1).map(|value| value == 1)
}

/// Unicode codepoints over the full scalar range, biased toward ASCII.
pub fn codepoints() -> Composite<u32> {
    codepoints_in(1..=char::MAX as u32)
}

/// Unicode codepoints in the inclusive `range`.
///
/// Ranges touching the printable ASCII band mix a narrow draw over
/// `[min, 126]` with a full-range draw, so common text turns up often while
/// the whole range stays reachable; other ranges draw uniformly.
pub fn codepoints_in(range: RangeInclusive<u32>) -> Composite<u32> {
    let (min, max) = (*range.start(), *range.end());
    assert!(min <= max, "codepoint range {}..={} is empty", min, max);
    assert!(
        max <= char::MAX as u32,
        "codepoint range ends past char::MAX: {}",
        max
    );
    let full = integers_in(min as i64..=max as i64).map(|value| value as u32);
    if min <= PRINTABLE_ASCII_MAX {
        let narrow_max = max.min(PRINTABLE_ASCII_MAX);
        let narrow = integers_in(min as i64..=narrow_max as i64).map(|value| value as u32);
        mixed(vec![narrow, full])
    } else {
        full
    }
}

/// Variable-length vectors of `element` draws, sized by the repetition
/// controller over `sizes` with a midpoint target.
pub fn arrays<P>(element: P, sizes: RangeInclusive<usize>) -> Composite<Vec<P::Value>>
where
    P: Provider + 'static,
    P::Value: 'static,
{
    let (min, max) = size_bounds(&sizes);
    composite(move |source| {
        let mut repeat = RepeatController::new(min, max, (min as f64 + max as f64) * 0.5);
        let mut result = Vec::new();
        while repeat.should_continue(source)? {
            result.push(source.given(&element)?);
        }
        Ok(result)
    })
}

/// Maps with unique keys, sized like [`arrays`].
///
/// A drawn key already present in the result un-counts its slot through
/// [`RepeatController::reject`] and the loop retries, so the final key count
/// lands in `sizes` and every key is distinct.
pub fn hashes<K, V>(
    keys: K,
    values: V,
    sizes: RangeInclusive<usize>,
) -> Composite<HashMap<K::Value, V::Value>>
where
    K: Provider + 'static,
    K::Value: Hash + Eq + 'static,
    V: Provider + 'static,
    V::Value: 'static,
{
    let (min, max) = size_bounds(&sizes);
    composite(move |source| {
        let mut repeat = RepeatController::new(min, max, (min as f64 + max as f64) * 0.5);
        let mut result = HashMap::new();
        while repeat.should_continue(source)? {
            let key = source.given(&keys)?;
            if result.contains_key(&key) {
                repeat.reject();
            } else {
                let value = source.given(&values)?;
                result.insert(key, value);
            }
        }
        Ok(result)
    })
}

/// Fixed-arity sequence: one draw per provider, in order.
pub fn fixed_arrays<T: 'static>(elements: Vec<Composite<T>>) -> Composite<Vec<T>> {
    composite(move |source| {
        elements
            .iter()
            .map(|element| source.given(element))
            .collect()
    })
}

/// Fixed-shape map: one draw per entry, in entry order. The result's key
/// set always equals the keys given.
pub fn fixed_hashes<K, V>(entries: Vec<(K, Composite<V>)>) -> Composite<HashMap<K, V>>
where
    K: Hash + Eq + Clone + 'static,
    V: 'static,
{
    composite(move |source| {
        let mut result = HashMap::with_capacity(entries.len());
        for (key, provider) in &entries {
            result.insert(key.clone(), source.given(provider)?);
        }
        Ok(result)
    })
}

/// Uniform choice among `branches`, then a draw from the chosen one.
pub fn mixed<T: 'static>(branches: Vec<Composite<T>>) -> Composite<T> {
    assert!(!branches.is_empty(), "mixed needs at least one branch");
    let indexes = BoundedIntegers::new(branches.len() as u64 - 1);
    composite(move |source| {
        let index = source.given(&indexes)? as usize;
        source.given(&branches[index])
    })
}

/// Uniform choice of one plain value out of `values`.
pub fn choice_of<T: Clone + 'static>(values: Vec<T>) -> Composite<T> {
    assert!(!values.is_empty(), "choice_of needs at least one value");
    let indexes = BoundedIntegers::new(values.len() as u64 - 1);
    composite(move |source| {
        let index = source.given(&indexes)? as usize;
        Ok(values[index].clone())
    })
}

/// Strings over the default codepoint distribution.
pub fn strings(sizes: RangeInclusive<usize>) -> Composite<String> {
    strings_of(codepoints(), sizes)
}

/// Strings whose characters come from the `codepoints` provider.
///
/// The codepoint provider is restricted once, at construction, to values
/// that encode as text (surrogate and other unencodable draws retry under
/// the select budget); the character count follows the same controller as
/// [`arrays`].
pub fn strings_of<P>(codepoints: P, sizes: RangeInclusive<usize>) -> Composite<String>
where
    P: Provider<Value = u32> + 'static,
{
    let encodable = codepoints.select(|point| char::from_u32(*point).is_some());
    let drawn = arrays(encodable, sizes);
    composite(move |source| {
        let points = source.given(&drawn)?;
        points
            .into_iter()
            .map(char::from_u32)
            .collect::<Option<String>>()
            .ok_or(DrawError::Rejected)
    })
}

fn size_bounds(sizes: &RangeInclusive<usize>) -> (u64, u64) {
    let (min, max) = (*sizes.start(), *sizes.end());
    assert!(min <= max, "size range {}..={} is empty", min, max);
    (min as u64, max as u64)
}

fn offset_up(base: i64, magnitude: u64) -> i64 {
    let shifted = base as i128 + magnitude as i128;
    shifted.min(i64::MAX as i128) as i64
}

fn offset_down(base: i64, magnitude: u64) -> i64 {
    let shifted = base as i128 - magnitude as i128;
    shifted.max(i64::MIN as i128) as i64
}

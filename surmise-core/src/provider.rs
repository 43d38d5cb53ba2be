//! The provider contract and its base combinators.

use std::rc::Rc;

use crate::error::{Draw, DrawError};
use crate::source::Source;

/// Number of draws [`Provider::select`] attempts before rejecting the
/// example.
pub const DEFAULT_SELECT_ATTEMPTS: usize = 4;

/// An immutable description of how to derive a value from a [`Source`].
///
/// Providers hold no mutable state: one instance may be drawn from many
/// times, across many examples, and compositions capture their
/// sub-providers for exactly that reason. The only required operation is
/// [`provide`](Provider::provide); everything else is built on it.
pub trait Provider {
    /// The type of value this provider produces.
    type Value;

    /// Produces one value, advancing the source.
    fn provide(&self, source: &mut Source<'_>) -> Draw<Self::Value>;

    /// Provider producing `transform(value)` for each value of `self`.
    fn map<U, F>(self, transform: F) -> Composite<U>
    where
        Self: Sized + 'static,
        Self::Value: 'static,
        F: Fn(Self::Value) -> U + 'static,
        U: 'static,
    {
        let base = self;
        Composite::new(move |source| Ok(transform(source.given(&base)?)))
    }

    /// Filtered draw with the default attempt budget.
    ///
    /// Draws from `self` until a value satisfies `predicate`, consuming
    /// fresh choices each time, for at most
    /// [`DEFAULT_SELECT_ATTEMPTS`] draws. A value returned by `select`
    /// always satisfies the predicate; when every draw in the budget fails,
    /// the example is rejected and the driver retries along a fresh choice
    /// path. The budget keeps a hostile predicate from looping forever;
    /// widen it with [`select_with_attempts`](Provider::select_with_attempts)
    /// when the predicate is expected to fail often.
    fn select<F>(self, predicate: F) -> Composite<Self::Value>
    where
        Self: Sized + 'static,
        Self::Value: 'static,
        F: Fn(&Self::Value) -> bool + 'static,
    {
        self.select_with_attempts(predicate, DEFAULT_SELECT_ATTEMPTS)
    }

    /// Filtered draw with an explicit attempt budget.
    fn select_with_attempts<F>(self, predicate: F, attempts: usize) -> Composite<Self::Value>
    where
        Self: Sized + 'static,
        Self::Value: 'static,
        F: Fn(&Self::Value) -> bool + 'static,
    {
        assert!(attempts >= 1, "select needs at least one attempt");
        let base = self;
        Composite::new(move |source| {
            for _ in 0..attempts {
                let value = source.given(&base)?;
                if predicate(&value) {
                    return Ok(value);
                }
            }
            Err(DrawError::Rejected)
        })
    }

    /// Erases the concrete provider type behind [`Composite`].
    fn into_composite(self) -> Composite<Self::Value>
    where
        Self: Sized + 'static,
        Self::Value: 'static,
    {
        let base = self;
        Composite::new(move |source| source.given(&base))
    }
}

/// Provider built from a draw function.
///
/// The closure may call [`Source::given`] on other providers any number of
/// times, recursively; every higher-level combinator in this crate is
/// expressed through it. The function is reference-counted, so cloning a
/// `Composite` shares one underlying provider across compositions.
pub struct Composite<T> {
    run: Rc<dyn Fn(&mut Source<'_>) -> Draw<T>>,
}

impl<T> Composite<T> {
    pub fn new<F>(run: F) -> Composite<T>
    where
        F: Fn(&mut Source<'_>) -> Draw<T> + 'static,
    {
        Composite { run: Rc::new(run) }
    }
}

impl<T> Clone for Composite<T> {
    fn clone(&self) -> Composite<T> {
        Composite {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> Provider for Composite<T> {
    type Value = T;

    fn provide(&self, source: &mut Source<'_>) -> Draw<T> {
        (self.run)(source)
    }
}

/// Provider forwarding to the unbounded-integer primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integers;

impl Provider for Integers {
    type Value = i64;

    fn provide(&self, source: &mut Source<'_>) -> Draw<i64> {
        source.next_integer()
    }
}

/// Provider forwarding to the bounded-integer primitive over `[0, max]`.
#[derive(Debug, Clone, Copy)]
pub struct BoundedIntegers {
    max_inclusive: u64,
}

impl BoundedIntegers {
    pub fn new(max_inclusive: u64) -> BoundedIntegers {
        BoundedIntegers { max_inclusive }
    }

    pub fn max_inclusive(&self) -> u64 {
        self.max_inclusive
    }
}

impl Provider for BoundedIntegers {
    type Value = u64;

    fn provide(&self, source: &mut Source<'_>) -> Draw<u64> {
        source.next_bounded(self.max_inclusive)
    }
}

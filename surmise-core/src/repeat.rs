//! Sized-repetition control for variable-length constructs.

use crate::error::Draw;
use crate::source::Source;

/// Decides how many elements a variable-length construct should contain.
///
/// One controller is created per collection draw. While the accepted count
/// is below `min_count` the loop is forced to continue, at `max_count` it is
/// forced to stop, and in between the underlying choice source decides,
/// biased toward `target_average` elements. Forced decisions are answered
/// locally; in particular a `min_count == max_count` controller never
/// consults the source at all. [`reject`](RepeatController::reject)
/// un-counts the most recent element so constructs needing uniqueness can
/// retry a slot without distorting their final size.
#[derive(Debug, Clone)]
pub struct RepeatController {
    min_count: u64,
    max_count: u64,
    target_average: f64,
    count: u64,
}

impl RepeatController {
    pub fn new(min_count: u64, max_count: u64, target_average: f64) -> RepeatController {
        assert!(
            min_count <= max_count,
            "min_count {} exceeds max_count {}",
            min_count,
            max_count
        );
        RepeatController {
            min_count,
            max_count,
            target_average,
            count: 0,
        }
    }

    /// Number of elements accepted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether the construct should draw one more element.
    pub fn should_continue(&mut self, source: &mut Source<'_>) -> Draw<bool> {
        if self.min_count == self.max_count {
            // Fully determined; nothing to consult.
            if self.count < self.max_count {
                self.count += 1;
                Ok(true)
            } else {
                Ok(false)
            }
        } else if self.count < self.min_count {
            self.count += 1;
            Ok(true)
        } else if self.count >= self.max_count {
            Ok(false)
        } else {
            let more =
                source.repeat_decision(self.min_count, self.max_count, self.target_average)?;
            if more {
                self.count += 1;
            }
            Ok(more)
        }
    }

    /// Un-counts the most recently accepted element.
    pub fn reject(&mut self) {
        assert!(self.count > 0, "reject called before any element was accepted");
        self.count -= 1;
    }
}

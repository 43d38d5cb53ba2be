//! Control signals for example generation.

use thiserror::Error;

/// Non-local outcome that aborts the current draw.
///
/// Neither variant is an ordinary failure. `Rejected` tells the driver this
/// particular choice path is unusable and it should retry the example along
/// a fresh one; `Overflow` tells it the choice source cannot supply any more
/// data and the whole run should stop. Combinators never catch either signal
/// themselves, they only propagate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// The current choice path cannot produce a usable value.
    #[error("example rejected; retry with a fresh choice sequence")]
    Rejected,

    /// The choice source has no more data for this request.
    #[error("choice source exhausted")]
    Overflow,
}

impl DrawError {
    /// True for the recoverable signal.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DrawError::Rejected)
    }

    /// True for the fatal signal.
    pub fn is_overflow(&self) -> bool {
        matches!(self, DrawError::Overflow)
    }
}

/// Result type for draw operations.
pub type Draw<T> = std::result::Result<T, DrawError>;

//! Shot outcomes and the strategy-level error taxonomy.

use core::fmt;

/// Result of resolving one shot against the hidden fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// No ship at the probed cell.
    Missed,
    /// Hit a cell of a ship that still has unhit cells.
    Harmed,
    /// Hit the last unhit cell of a ship.
    Killed,
}

/// Terminal errors a strategy call can produce.
///
/// `Failure` marks a broken caller-side precondition (asked for a shot when
/// none can exist, applied a result to an already-resolved cell). `Internal`
/// marks state the strategy itself can no longer reconcile. Abstention
/// ("no guess") is not an error: policies return `Ok(None)` and the selector
/// falls through its chain, so abstention never reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    Failure { reason: &'static str },
    Internal { reason: &'static str },
}

impl StepError {
    pub(crate) fn failure(reason: &'static str) -> Self {
        StepError::Failure { reason }
    }

    pub(crate) fn internal(reason: &'static str) -> Self {
        StepError::Internal { reason }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Failure { reason } => write!(f, "engine failure: {}", reason),
            StepError::Internal { reason } => write!(f, "internal strategy error: {}", reason),
        }
    }
}

/// Outcome of applying a shot result to a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotApplied {
    /// The game continues.
    Continue,
    /// That shot sank the last ship; no further calls are expected.
    Won,
}

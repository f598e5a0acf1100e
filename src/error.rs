//! Error taxonomy shared by every optimizer.
//!
//! Two classes of failure exist, both detected before or at the start of
//! a run and propagated immediately to the caller:
//!
//! - [`Error::Validation`]: malformed input data — a tour that is not a
//!   permutation, a non-square or negative distance matrix, fewer than
//!   two cities.
//! - [`Error::Configuration`]: malformed parameters — non-positive
//!   counts, a temperature floor at or above the ceiling, rates outside
//!   `[0, 1]`, an unknown operator name.
//!
//! Stalling, budget exhaustion, and an exhausted tabu neighborhood are
//! *not* errors; those paths complete normally with the best solution
//! found so far (see [`crate::report::Termination`]).

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input data violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration parameter is out of its legal range.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_class() {
        let e = Error::Validation("tour has 3 entries, expected 4".into());
        assert!(e.to_string().starts_with("validation error:"));

        let e = Error::Configuration("steps must be at least 1".into());
        assert!(e.to_string().starts_with("configuration error:"));
    }
}

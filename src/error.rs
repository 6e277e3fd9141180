//! Errors raised at the parsing boundary.
//!
//! The roster pipeline itself is infallible: understaffed days are data,
//! not errors. Only conversions from stored strings (dates, shift
//! identifiers, preference names, weekday indices) can fail.

use thiserror::Error;

/// Boundary parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A calendar date was not in `YYYY-MM-DD` form.
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// A weekday index outside 0 (Monday) ..= 6 (Sunday).
    #[error("weekday index {0} out of range (0 = Monday .. 6 = Sunday)")]
    InvalidWeekday(u8),
    /// A shift identifier other than `shift1`/`shift2` (or legacy `ca1`/`ca2`).
    #[error("unknown shift identifier '{0}'")]
    UnknownShift(String),
    /// A preference other than `morning`, `evening`, `off` or `any`.
    #[error("unknown preference '{0}'")]
    UnknownPreference(String),
}

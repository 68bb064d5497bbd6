//! Error types for resolver construction.
//!
//! Classification itself is total and never fails; the only failure mode is
//! a malformed pattern handed to [`Resolver::register`], which is a
//! construction-time programmer error.
//!
//! [`Resolver::register`]: crate::Resolver::register

use core::fmt;

use crate::tag::Tag;

/// Error returned when a rule registration is rejected.
#[derive(Debug, Clone)]
pub enum ResolveError {
    /// The pattern supplied for `tag` is not a valid regular expression.
    InvalidPattern {
        /// Tag the rule was being registered for.
        tag: Tag,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { tag, source } => {
                write!(f, "invalid pattern for tag {}: {}", tag, source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

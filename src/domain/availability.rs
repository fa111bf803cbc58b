//! Why a pool cannot serve a swap.

use core::fmt;

/// Reason a pool is not available for swapping.
///
/// Callers branch on the variant; the `Display` text is the message shown
/// to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnavailableReason {
    /// The pool has been frozen by its operator.
    Frozen,
    /// One of the reserves is zero.
    Empty,
    /// The pool does not trade the requested pair.
    Unknown,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Frozen => "pool is frozen",
            Self::Empty => "pool is empty, deposit first",
            Self::Unknown => "pool is not available",
        };
        f.write_str(msg)
    }
}

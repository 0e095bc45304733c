//! Error types for the list module.

use std::fmt;

use super::core::Direction;
use crate::datum::Kind;

/// Errors from list operations.
///
/// Every failure leaves the list structurally unchanged; an operation either
/// completes its relinking in full or performs none of it.
#[derive(Debug)]
pub enum ListError {
    /// Operation requires at least one element, the list has none.
    Empty,
    /// Value lookup matched no element.
    NotFound(Kind),
    /// Anchor located, but already at the list boundary in the requested
    /// direction.
    NeighborAbsent(Direction),
    /// Configured capacity reached, cannot allocate another element.
    CapacityExhausted {
        /// Maximum live element count for this list.
        max_len: usize,
    },
    /// Record datum offered to a list with no configured record width.
    RecordWidthUnset,
    /// Record payload length differs from the configured width.
    RecordWidthMismatch {
        /// Width the list was configured with.
        expected: usize,
        /// Length of the offered payload.
        actual: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => {
                write!(f, "list is empty")
            }
            ListError::NotFound(kind) => {
                write!(f, "no matching {} element", kind)
            }
            ListError::NeighborAbsent(direction) => {
                write!(f, "no element {} the anchor", direction)
            }
            ListError::CapacityExhausted { max_len } => {
                write!(f, "list full: capacity is {} elements", max_len)
            }
            ListError::RecordWidthUnset => {
                write!(f, "record width not configured for this list")
            }
            ListError::RecordWidthMismatch { expected, actual } => {
                write!(
                    f,
                    "record width mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for ListError {}

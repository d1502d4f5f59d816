//! Domain error types.
//!
//! These errors represent validation failures and structural violations in
//! the domain layer. They are raised at the point of violation and never
//! silently corrected; a failed operation leaves the model untouched.

use super::{Segment, Station};

/// Domain-level errors for validation and structural consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Segment distance below the minimum.
    #[error("segment distance must be at least {min}, got {got}", min = Segment::MIN_DISTANCE)]
    InvalidDistance { got: u32 },

    /// A segment cannot connect a station to itself.
    #[error("segment endpoints must differ: {0}")]
    LoopSegment(Station),

    /// Split point must leave at least distance 1 on both sides.
    #[error("split distance must be strictly between 0 and {total}, got {got}")]
    InvalidSplit { got: u32, total: u32 },

    /// The two segments share no linking station.
    #[error("segments do not share a linking station")]
    NoLinkingStation,

    /// Requested insertion point does not exist on the line.
    #[error("no segment connects {upstream} to {downstream} on this line")]
    InsertionPointNotFound {
        upstream: String,
        downstream: String,
    },

    /// The station to insert already lies on the line.
    #[error("station {0} is already on this line")]
    AlreadyOnLine(Station),

    /// The station to remove does not lie on the line.
    #[error("station {0} is not on this line")]
    NotOnLine(Station),

    /// A line must keep at least one segment.
    #[error("cannot remove the last remaining segment of a line")]
    LastSegment,
}

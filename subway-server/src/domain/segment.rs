//! Weighted connections between adjacent stations on a line.

use std::fmt;

use super::{DomainError, Station};

/// A distance-weighted connection from an upstream to a downstream station.
///
/// Direction matters for ordering segments within a line; the derived
/// network graph treats every segment as undirected. The distance is at
/// least [`Segment::MIN_DISTANCE`] and the endpoints differ, guaranteed by
/// construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    upstream: Station,
    downstream: Station,
    distance: u32,
}

impl Segment {
    /// Minimum distance of any segment.
    pub const MIN_DISTANCE: u32 = 1;

    /// Create a segment, validating distance and endpoints.
    pub fn new(
        upstream: Station,
        downstream: Station,
        distance: u32,
    ) -> Result<Self, DomainError> {
        if distance < Self::MIN_DISTANCE {
            return Err(DomainError::InvalidDistance { got: distance });
        }
        if upstream == downstream {
            return Err(DomainError::LoopSegment(upstream));
        }
        Ok(Segment {
            upstream,
            downstream,
            distance,
        })
    }

    /// The upstream endpoint.
    pub fn upstream(&self) -> &Station {
        &self.upstream
    }

    /// The downstream endpoint.
    pub fn downstream(&self) -> &Station {
        &self.downstream
    }

    /// The distance between the endpoints.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// True if `station` is either endpoint.
    pub fn contains(&self, station: &Station) -> bool {
        self.upstream == *station || self.downstream == *station
    }

    /// True if this segment runs exactly from `upstream` to `downstream`.
    pub fn joins(&self, upstream: &Station, downstream: &Station) -> bool {
        self.upstream == *upstream && self.downstream == *downstream
    }

    /// Split this segment around `station`.
    ///
    /// Produces `(upstream, station, distance_to_upstream)` and
    /// `(station, downstream, remainder)`. The split point must be strictly
    /// inside the segment so both halves keep a distance of at least 1.
    pub fn split(
        &self,
        station: Station,
        distance_to_upstream: u32,
    ) -> Result<(Segment, Segment), DomainError> {
        if distance_to_upstream == 0 || distance_to_upstream >= self.distance {
            return Err(DomainError::InvalidSplit {
                got: distance_to_upstream,
                total: self.distance,
            });
        }

        let first = Segment::new(self.upstream.clone(), station.clone(), distance_to_upstream)?;
        let second = Segment::new(
            station,
            self.downstream.clone(),
            self.distance - distance_to_upstream,
        )?;
        Ok((first, second))
    }

    /// Merge with an adjacent segment.
    ///
    /// The two segments must share a linking station chain-wise: this
    /// segment's downstream is `other`'s upstream, or the other way around.
    /// The result spans the two non-shared endpoints, keeping the
    /// upstream-to-downstream orientation; its distance is the sum of both.
    pub fn merge(&self, other: &Segment) -> Result<Segment, DomainError> {
        let distance = self.distance + other.distance;
        if self.downstream == other.upstream {
            return Segment::new(self.upstream.clone(), other.downstream.clone(), distance);
        }
        if other.downstream == self.upstream {
            return Segment::new(other.upstream.clone(), self.downstream.clone(), distance);
        }
        Err(DomainError::NoLinkingStation)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment({}-{}, {})",
            self.upstream, self.downstream, self.distance
        )
    }
}

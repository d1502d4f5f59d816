//! A line: a named, branch-free chain of segments.

use tracing::debug;

use super::{DomainError, LineName, Segment, Station};

/// A named, acyclic, branch-free chain of segments.
///
/// Segments are held in chain order: each segment's downstream station is
/// the next segment's upstream station, so the chain forms one simple path
/// with no repeated station. A line always contains at least one segment.
///
/// Insertion and removal are positional splices on the segment vector — a
/// mutation removes k segments and inserts m segments at the same logical
/// position, never touching the rest of the chain. Every precondition is
/// checked before the first mutation, so a failed operation leaves the line
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: LineName,
    segments: Vec<Segment>,
}

impl Line {
    /// Create a line with its first segment.
    pub fn new(name: LineName, first_segment: Segment) -> Self {
        Line {
            name,
            segments: vec![first_segment],
        }
    }

    /// The line's name.
    pub fn name(&self) -> &LineName {
        &self.name
    }

    /// The segments in chain order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True if `station` appears anywhere on the line.
    pub fn contains(&self, station: &Station) -> bool {
        self.segments.iter().any(|s| s.contains(station))
    }

    /// Stations from the upstream terminus to the downstream terminus.
    pub fn stations_in_order(&self) -> Vec<Station> {
        let mut stations = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            stations.push(first.upstream().clone());
        }
        for segment in &self.segments {
            stations.push(segment.downstream().clone());
        }
        stations
    }

    /// Insert `station` between two neighbors on this line.
    ///
    /// A `None` neighbor denotes the line end on that side:
    /// - `(Some, Some)` splits the segment joining exactly that pair, with
    ///   `distance` measured from the upstream neighbor;
    /// - `(None, Some)` extends the line at its head, `distance` being the
    ///   length of the single new segment;
    /// - `(Some, None)` extends the line at its tail, likewise.
    ///
    /// Fails if the pair does not describe an insertion point on this line,
    /// if the split distance is out of range, or if `station` already lies
    /// on the line.
    pub fn insert_station(
        &mut self,
        station: Station,
        upstream: Option<&Station>,
        downstream: Option<&Station>,
        distance: u32,
    ) -> Result<(), DomainError> {
        if self.contains(&station) {
            return Err(DomainError::AlreadyOnLine(station));
        }

        match (upstream, downstream) {
            (Some(up), Some(down)) => {
                let index = self
                    .segments
                    .iter()
                    .position(|s| s.joins(up, down))
                    .ok_or_else(|| insertion_point_not_found(Some(up), Some(down)))?;

                let (first, second) = self.segments[index].split(station.clone(), distance)?;
                self.segments.splice(index..=index, [first, second]);
            }
            (None, Some(down)) => {
                // Extend at the head: the downstream neighbor must be the
                // current upstream terminus.
                let head = self.segments[0].upstream().clone();
                if *down != head {
                    return Err(insertion_point_not_found(None, Some(down)));
                }
                let segment = Segment::new(station.clone(), head, distance)?;
                self.segments.insert(0, segment);
            }
            (Some(up), None) => {
                let tail = self.segments[self.segments.len() - 1].downstream().clone();
                if *up != tail {
                    return Err(insertion_point_not_found(Some(up), None));
                }
                let segment = Segment::new(tail, station.clone(), distance)?;
                self.segments.push(segment);
            }
            (None, None) => {
                return Err(insertion_point_not_found(None, None));
            }
        }

        debug!(line = %self.name, station = %station, "station inserted");
        Ok(())
    }

    /// Remove `station` from this line.
    ///
    /// An interior station's two adjacent segments are merged into one; an
    /// endpoint station's single segment is dropped. Removing the last
    /// remaining segment is rejected, as is a station not on the line.
    pub fn remove_station(&mut self, station: &Station) -> Result<(), DomainError> {
        let touching: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.contains(station))
            .map(|(i, _)| i)
            .collect();

        match touching.len() {
            0 => Err(DomainError::NotOnLine(station.clone())),
            1 => {
                if self.segments.len() == 1 {
                    return Err(DomainError::LastSegment);
                }
                self.segments.remove(touching[0]);
                debug!(line = %self.name, station = %station, "endpoint station removed");
                Ok(())
            }
            _ => {
                // Interior: the chain invariant makes the occurrences a pair
                // of adjacent segments.
                let (left, right) = (touching[0], touching[1]);
                let merged = self.segments[left].merge(&self.segments[right])?;
                self.segments.splice(left..=right, [merged]);
                debug!(line = %self.name, station = %station, "interior station removed");
                Ok(())
            }
        }
    }
}

fn insertion_point_not_found(
    upstream: Option<&Station>,
    downstream: Option<&Station>,
) -> DomainError {
    let render =
        |station: Option<&Station>| station.map_or_else(|| "line end".to_string(), |s| s.name().to_string());
    DomainError::InsertionPointNotFound {
        upstream: render(upstream),
        downstream: render(downstream),
    }
}

//! Distance-based fare calculation.
//!
//! Fares are a monotonic non-decreasing step function of route distance: a
//! base fare up to a first threshold, then a fixed increment per started
//! block of distance within each surcharge band. The band table is policy,
//! not algorithm — it is supplied as data and validated at construction.

/// Error returned when constructing an ill-formed fare policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare policy: {reason}")]
pub struct InvalidFarePolicy {
    reason: &'static str,
}

/// A surcharge band applying beyond a distance threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareBand {
    /// Distance beyond which this band starts charging.
    pub from: u64,

    /// Size of the distance block; every started block charges once.
    pub per: u64,

    /// Amount added per started block.
    pub increment: u64,
}

impl FareBand {
    /// Create a band charging `increment` per started `per` units beyond
    /// `from`.
    pub fn new(from: u64, per: u64, increment: u64) -> Self {
        Self {
            from,
            per,
            increment,
        }
    }
}

/// Fare policy: a base fare plus per-band surcharges.
///
/// # Examples
///
/// ```
/// use subway_server::fare::FarePolicy;
///
/// let policy = FarePolicy::default();
/// assert_eq!(policy.fare(0), 1250);
/// assert_eq!(policy.fare(10), 1250);
/// assert_eq!(policy.fare(11), 1350);
/// assert_eq!(policy.fare(50), 2050);
/// assert_eq!(policy.fare(58), 2150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarePolicy {
    base_fare: u64,
    bands: Vec<FareBand>,
}

impl FarePolicy {
    /// Create a policy from a base fare and surcharge bands.
    ///
    /// Bands must be in strictly ascending threshold order with a non-zero
    /// block size.
    pub fn new(base_fare: u64, bands: Vec<FareBand>) -> Result<Self, InvalidFarePolicy> {
        let mut previous: Option<u64> = None;
        for band in &bands {
            if band.per == 0 {
                return Err(InvalidFarePolicy {
                    reason: "band block size must be at least 1",
                });
            }
            if previous.is_some_and(|from| band.from <= from) {
                return Err(InvalidFarePolicy {
                    reason: "band thresholds must be strictly ascending",
                });
            }
            previous = Some(band.from);
        }
        Ok(Self { base_fare, bands })
    }

    /// The fare charged for a total route distance.
    ///
    /// Monotonic non-decreasing in `distance`; a distance within the first
    /// threshold costs the base fare.
    pub fn fare(&self, distance: u64) -> u64 {
        let mut fare = self.base_fare;
        for (index, band) in self.bands.iter().enumerate() {
            if distance <= band.from {
                break;
            }
            // This band bills the stretch between its own threshold and the
            // next band's threshold.
            let cap = self
                .bands
                .get(index + 1)
                .map_or(u64::MAX, |next| next.from);
            let billable = distance.min(cap) - band.from;
            fare += billable.div_ceil(band.per) * band.increment;
        }
        fare
    }

    /// The base fare.
    pub fn base_fare(&self) -> u64 {
        self.base_fare
    }

    /// The surcharge bands in ascending threshold order.
    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }
}

impl Default for FarePolicy {
    /// The Seoul metropolitan scheme: base 1250 up to distance 10, then 100
    /// per started 5 units up to 50, then 100 per started 8 units beyond.
    fn default() -> Self {
        Self {
            base_fare: 1250,
            bands: vec![FareBand::new(10, 5, 100), FareBand::new(50, 8, 100)],
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The fare is non-decreasing in distance.
        #[test]
        fn fare_is_monotonic(d1 in 0u64..500, d2 in 0u64..500) {
            let policy = FarePolicy::default();
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(policy.fare(lo) <= policy.fare(hi));
        }

        /// No distance is ever billed below the base fare.
        #[test]
        fn fare_never_below_base(distance in 0u64..10_000) {
            let policy = FarePolicy::default();
            prop_assert!(policy.fare(distance) >= policy.base_fare());
        }
    }
}

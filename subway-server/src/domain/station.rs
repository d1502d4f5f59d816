//! Station name types.

use std::fmt;

/// Error returned when validating an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A named stop on the network.
///
/// Identity and equality are by trimmed name: two `Station` values with the
/// same name are interchangeable. Names are 2 to 15 characters long after
/// trimming, guaranteed by construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Station;
///
/// let gangnam = Station::new("Gangnam").unwrap();
/// assert_eq!(gangnam.name(), "Gangnam");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(Station::new("  Gangnam ").unwrap(), gangnam);
///
/// // Out-of-bounds lengths are rejected
/// assert!(Station::new("G").is_err());
/// assert!(Station::new("A station name far too long").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Station {
    name: String,
}

impl Station {
    /// Minimum name length after trimming.
    pub const MIN_NAME_LENGTH: usize = 2;

    /// Maximum name length after trimming.
    pub const MAX_NAME_LENGTH: usize = 15;

    /// Validate a station name.
    ///
    /// The input is trimmed; the remainder must be 2 to 15 characters.
    pub fn new(name: &str) -> Result<Self, InvalidStationName> {
        let trimmed = name.trim();
        let length = trimmed.chars().count();

        if length < Self::MIN_NAME_LENGTH {
            return Err(InvalidStationName {
                reason: "must be at least 2 characters after trimming",
            });
        }
        if length > Self::MAX_NAME_LENGTH {
            return Err(InvalidStationName {
                reason: "must be at most 15 characters after trimming",
            });
        }

        Ok(Station {
            name: trimmed.to_string(),
        })
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

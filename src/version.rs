//! `RINEX` revision description
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Latest revision this decoder understands.
pub const SUPPORTED_VERSION: Version = Version { major: 2, minor: 11 };

/// Version is used to describe RINEX standards revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParsingError {
    #[error("empty version descriptor")]
    Empty,
    #[error("failed to parse version")]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl Default for Version {
    fn default() -> Self {
        SUPPORTED_VERSION
    }
}

impl Version {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns true if this revision is decoded by this crate
    pub fn is_supported(&self) -> bool {
        self.major < 3
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl std::str::FromStr for Version {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsingError::Empty);
        }
        match s.split_once('.') {
            Some((major, minor)) => {
                let major = major.trim().parse::<u8>()?;
                // "2.1" and "2.10" are the same revision
                let minor = minor.trim();
                let minor = if minor.is_empty() {
                    0
                } else if minor.len() == 1 {
                    minor.parse::<u8>()? * 10
                } else {
                    minor.get(..2).unwrap_or(minor).parse::<u8>()?
                };
                Ok(Self { major, minor })
            },
            None => Ok(Self {
                major: s.parse::<u8>()?,
                minor: 0,
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn version_parsing() {
        for (desc, expected) in [
            ("2.11", Version { major: 2, minor: 11 }),
            ("     2.11", Version { major: 2, minor: 11 }),
            ("2.10", Version { major: 2, minor: 10 }),
            ("2.1", Version { major: 2, minor: 10 }),
            ("2", Version { major: 2, minor: 0 }),
            ("1.0", Version { major: 1, minor: 0 }),
            ("3.04", Version { major: 3, minor: 4 }),
        ] {
            let version = Version::from_str(desc).unwrap();
            assert_eq!(version, expected, "failed to parse \"{}\"", desc);
        }
        assert!(Version::from_str("    ").is_err());
        assert!(Version::from_str("V2").is_err());
    }
    #[test]
    fn version_support() {
        assert!(Version { major: 2, minor: 11 }.is_supported());
        assert!(Version { major: 1, minor: 0 }.is_supported());
        assert!(!Version { major: 3, minor: 5 }.is_supported());
    }
    #[test]
    fn version_display() {
        assert_eq!(Version { major: 2, minor: 11 }.to_string(), "2.11");
        assert_eq!(Version { major: 2, minor: 0 }.to_string(), "2.00");
    }
}

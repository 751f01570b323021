use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed observable \"{0}\"")]
    MalformedDescriptor(String),
}

/// Observable describes one observation channel, identified
/// in the header "# / TYPES OF OBSERV" by a two letter code.
#[derive(Debug, Clone, PartialEq, PartialOrd, Hash, Ord, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Observable {
    /// Carrier phase observation, in cycles
    Phase(String),
    /// Doppler shift observation, in Hz
    Doppler(String),
    /// Raw signal strength observation
    SSI(String),
    /// Pseudo range observation, in meters
    PseudoRange(String),
    /// Any other observation, for example Transit Doppler "T1"
    Other(String),
}

impl Observable {
    /// Returns the code as found in the header, for example "P1"
    pub fn code(&self) -> &str {
        match self {
            Self::Phase(c)
            | Self::Doppler(c)
            | Self::SSI(c)
            | Self::PseudoRange(c)
            | Self::Other(c) => c,
        }
    }
}

impl std::fmt::Display for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Observable {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let content = content.trim().to_uppercase();
        let len = content.len();
        if !(2..4).contains(&len) || !content.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::MalformedDescriptor(content));
        }
        if content.starts_with('L') {
            Ok(Self::Phase(content))
        } else if content.starts_with('C') || content.starts_with('P') {
            Ok(Self::PseudoRange(content))
        } else if content.starts_with('S') {
            Ok(Self::SSI(content))
        } else if content.starts_with('D') {
            Ok(Self::Doppler(content))
        } else {
            Ok(Self::Other(content))
        }
    }
}

//! Description of the running server, used to gate version- or
//! flavor-specific trait rules.
//!
//! Detection itself belongs to the host; this module only carries the result.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Server software family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServerFlavor {
    #[default]
    Spigot,
    Paper,
    Purpur,
    Folia,
}

impl ServerFlavor {
    /// Paper and every fork built on top of it expose the Paper API.
    pub fn is_paper(self) -> bool {
        matches!(self, Self::Paper | Self::Purpur | Self::Folia)
    }
}

impl FromStr for ServerFlavor {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spigot" | "bukkit" => Ok(Self::Spigot),
            "paper" => Ok(Self::Paper),
            "purpur" => Ok(Self::Purpur),
            "folia" => Ok(Self::Folia),
            _ => Err(ParseVersionError(s.to_string())),
        }
    }
}

/// Game release, compared component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl GameVersion {
    /// First release with frogs.
    pub const V1_19: GameVersion = GameVersion::new(1, 19, 0);

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for GameVersion {
    fn default() -> Self {
        Self::new(1, 20, 4)
    }
}

impl std::fmt::Display for GameVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {0:?}")]
pub struct ParseVersionError(pub String);

impl FromStr for GameVersion {
    type Err = ParseVersionError;

    /// Accepts `1.19` and `1.19.2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u16, ParseVersionError> {
            match parts.next() {
                Some(p) => p.parse().map_err(|_| err()),
                None if required => Err(err()),
                None => Ok(0),
            }
        };
        let version = Self::new(next(true)?, next(true)?, next(false)?);
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(version)
    }
}

/// The running server as seen by the trait registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub flavor: ServerFlavor,
    pub version: GameVersion,
}

impl Environment {
    pub fn new(flavor: ServerFlavor, version: GameVersion) -> Self {
        Self { flavor, version }
    }

    pub fn is_paper(&self) -> bool {
        self.flavor.is_paper()
    }

    pub fn is_version_at_least(&self, version: GameVersion) -> bool {
        self.version >= version
    }
}

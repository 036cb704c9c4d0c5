//! Two-component API version.
//!
//! Example: "4.6" => Version { major: 4, minor: 6 }, "4" => Version { major: 4, minor: 0 }
//!
//! Field order matters: the derived ordering compares major first, then minor.

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse "<major>[.<minor>]". Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidVersion {
            text: s.to_string(),
        };

        let (major, minor) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, "0"),
        };

        let component = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        Ok(Self::new(component(major)?, component(minor)?))
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse optional version text. Absent or blank text means "no version",
/// which is distinct from `0.0`.
pub fn parse_version(value: Option<&str>) -> Result<Option<Version>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => Version::parse(v).map(Some),
    }
}

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^3\.(\d+)(?:\.\d+)?(?:-[0-9A-Za-z.-]+)?$").unwrap()
});

/// The OpenAPI dialect a document is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V3_0,
    V3_1,
}

impl Version {
    /// Maps a declared `openapi` value such as `3.0.3` or `3.1.0-rc1` to its
    /// dialect. The patch number is optional.
    pub fn detect(declared: &str) -> Option<Self> {
        let captures = VERSION_REGEX.captures(declared.trim())?;
        match captures.get(1)?.as_str() {
            "0" => Some(Version::V3_0),
            "1" => Some(Version::V3_1),
            _ => None,
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::detect(s).ok_or_else(|| Error::UnsupportedVersion(s.to_string()))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V3_0 => write!(f, "3.0"),
            Version::V3_1 => write!(f, "3.1"),
        }
    }
}

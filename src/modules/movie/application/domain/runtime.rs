use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

// Literal pattern, compiled once; checked by `runtime_pattern_compiles`.
static RUNTIME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) mins$").expect("runtime pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("runtime must be in the form \"<minutes> mins\"")]
pub struct InvalidRuntimeFormat;

/// Running time in whole minutes. Always positive.
///
/// On the wire it is a string such as `"102 mins"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(i32);

impl Runtime {
    pub fn from_minutes(minutes: i32) -> Result<Self, InvalidRuntimeFormat> {
        if minutes <= 0 {
            return Err(InvalidRuntimeFormat);
        }
        Ok(Self(minutes))
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }
}

impl FromStr for Runtime {
    type Err = InvalidRuntimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RUNTIME_FORMAT.captures(s).ok_or(InvalidRuntimeFormat)?;
        let minutes: i32 = caps[1].parse().map_err(|_| InvalidRuntimeFormat)?;
        Self::from_minutes(minutes)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

use crate::error::ValidationError;
use crate::format::grouped;
use crate::validator::{check_range, validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A memory size in megabytes that has passed every check.
///
/// The only ways to obtain one are [`validate`], [`FromStr`], [`TryFrom<u64>`] and
/// deserialization, all of which run the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
pub struct MemorySize(u64);

impl MemorySize {
    pub(crate) const fn new_unchecked(megabytes: u64) -> Self {
        Self(megabytes)
    }

    #[must_use]
    pub const fn megabytes(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MB", grouped(self.0))
    }
}

impl FromStr for MemorySize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<u64> for MemorySize {
    type Error = ValidationError;

    fn try_from(megabytes: u64) -> Result<Self, Self::Error> {
        check_range(megabytes)
    }
}

impl From<MemorySize> for u64 {
    fn from(size: MemorySize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_grouped_megabytes() {
        let size = MemorySize::try_from(524_288).unwrap();
        assert_eq!(size.to_string(), "524,288 MB");
    }

    #[test]
    fn try_from_runs_range_checks() {
        assert_eq!(MemorySize::try_from(2_048), Err(ValidationError::Min));
        assert_eq!(MemorySize::try_from(8_389_632), Err(ValidationError::Max));
        assert_eq!(MemorySize::try_from(5_000), Err(ValidationError::NotMultiple));
    }

    #[test]
    fn parses_grouped_text() {
        let size: MemorySize = "131,072".parse().unwrap();
        assert_eq!(size.megabytes(), 131_072);
        assert_eq!("12a".parse::<MemorySize>(), Err(ValidationError::InvalidCharacters));
    }
}

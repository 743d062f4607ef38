//! Ordered checks behind [`validate`].

use crate::error::ValidationError;
use crate::format::strip_separators;
use crate::size::MemorySize;
use composer_domain::constants::{MEMORY_MAX_MB, MEMORY_MIN_MB, MEMORY_STEP_MB};
use tracing::debug;

/// Validates the text of the memory field.
///
/// Separators are ignored, so `"524,288"` and `"524288"` give the same answer.
/// Empty input counts as invalid characters. Numbers too large for `u64` are reported
/// as [`ValidationError::Max`].
///
/// # Errors
///
/// Returns the first failing check, in the order characters, minimum, maximum, step.
pub fn validate(raw: &str) -> Result<MemorySize, ValidationError> {
    let result = parse_digits(raw).and_then(check_range);
    if let Err(err) = result {
        debug!(input = raw, kind = err.kind_name(), "memory size rejected");
    }
    result
}

fn parse_digits(raw: &str) -> Result<u64, ValidationError> {
    let digits = strip_separators(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidCharacters);
    }
    // Only digits remain, so the sole parse failure is overflow.
    digits.parse::<u64>().map_err(|_| ValidationError::Max)
}

pub(crate) fn check_range(megabytes: u64) -> Result<MemorySize, ValidationError> {
    if megabytes < MEMORY_MIN_MB {
        return Err(ValidationError::Min);
    }
    if megabytes > MEMORY_MAX_MB {
        return Err(ValidationError::Max);
    }
    if megabytes % MEMORY_STEP_MB != 0 {
        return Err(ValidationError::NotMultiple);
    }
    Ok(MemorySize::new_unchecked(megabytes))
}

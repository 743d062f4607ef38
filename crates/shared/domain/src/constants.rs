//! Fixed limits and user-facing texts of the composer form.

/// Smallest accepted memory size, in MB.
pub const MEMORY_MIN_MB: u64 = 4_096;
/// Largest accepted memory size, in MB.
pub const MEMORY_MAX_MB: u64 = 8_388_608;
/// Every accepted memory size is a multiple of this, in MB.
pub const MEMORY_STEP_MB: u64 = 1_024;

/// Thousands separator used when the memory field is displayed.
pub const GROUP_SEPARATOR: char = ',';

pub const MEMORY_HELPER_TEXT: &str = "Memory size range: 4096 MB to 8388608 MB";
pub const MEMORY_INVALID_INPUT: &str = "Please only enter numbers";
pub const MEMORY_SIZE_MIN: &str = "Memory size must be at least 4096 MB";
pub const MEMORY_SIZE_MAX: &str = "Memory size must be at most 8388608 MB";
pub const MEMORY_SIZE_NOT_MULTIPLE: &str = "Memory size must be a multiple of 1024 MB";
pub const FIX_ERROR_BEFORE_SUBMIT: &str = "Please fix the error above before submitting";

pub const FORM_TITLE: &str = "Server Composer";
pub const RESULTS_HEADING: &str = "Server Model Options";

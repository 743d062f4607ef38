//! # Memory Size
//!
//! Validation of the free-text memory field of the composer form.
//!
//! The user types a size in megabytes, usually with thousands separators (`524,288`).
//! [`validate`] turns that text into a [`MemorySize`] or reports exactly one
//! [`ValidationError`]. The checks run in a fixed order and stop at the first failure:
//!
//! 1. only digits remain after removing separators, else [`ValidationError::InvalidCharacters`]
//! 2. at least 4096 MB, else [`ValidationError::Min`]
//! 3. at most 8388608 MB, else [`ValidationError::Max`]
//! 4. a multiple of 1024 MB, else [`ValidationError::NotMultiple`]
//!
//! ```rust
//! use composer_memory::{ValidationError, validate};
//!
//! assert_eq!(validate("524,288").unwrap().megabytes(), 524_288);
//! assert_eq!(validate("4097"), Err(ValidationError::NotMultiple));
//! ```

mod error;
pub mod format;
mod size;
pub mod validator;

pub use crate::error::ValidationError;
pub use crate::format::{group_digits, strip_separators};
pub use crate::size::MemorySize;
pub use crate::validator::validate;

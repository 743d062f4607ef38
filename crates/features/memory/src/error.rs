use composer_domain::constants::{
    MEMORY_INVALID_INPUT, MEMORY_SIZE_MAX, MEMORY_SIZE_MIN, MEMORY_SIZE_NOT_MULTIPLE,
};
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

/// Why a memory size was rejected. Each kind carries one fixed user-facing message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    thiserror::Error,
    Serialize,
    Deserialize,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("{}", MEMORY_SIZE_MIN)]
    Min,
    #[error("{}", MEMORY_SIZE_MAX)]
    Max,
    #[error("{}", MEMORY_SIZE_NOT_MULTIPLE)]
    NotMultiple,
    #[error("{}", MEMORY_INVALID_INPUT)]
    InvalidCharacters,
}

impl ValidationError {
    /// Stable kind name: `MIN`, `MAX`, `NOT_MULTIPLE` or `INVALID_CHARACTERS`.
    #[must_use]
    pub fn kind_name(self) -> &'static str {
        self.into()
    }

    /// The message shown under the memory field.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Min => MEMORY_SIZE_MIN,
            Self::Max => MEMORY_SIZE_MAX,
            Self::NotMultiple => MEMORY_SIZE_NOT_MULTIPLE,
            Self::InvalidCharacters => MEMORY_INVALID_INPUT,
        }
    }
}

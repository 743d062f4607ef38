//! Facade crate for the server composer.
//! Re-exports the shared modules and the feature slices under one name.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `composer` and import [`prelude`] for the common types.
//! - Reach individual slices through [`memory`], [`selector`] and [`form`].

pub use composer_domain as domain;
pub use composer_form as form;
pub use composer_kernel as kernel;
pub use composer_memory as memory;
pub use composer_selector as selector;

/// The types most callers need.
pub mod prelude {
    pub use composer_domain::config::{ComposerConfig, FormDefaults};
    pub use composer_domain::{CpuModel, ServerModel};
    pub use composer_form::{FormEvent, FormState, FormView};
    pub use composer_memory::{MemorySize, ValidationError, validate};
    pub use composer_selector::{RULES, Rule, Selection, ServerSpec, select};
}

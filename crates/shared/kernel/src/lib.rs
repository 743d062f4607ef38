//! Kernel utilities shared by the composer apps.
//! Keep this crate lightweight: it owns the runtime plumbing (configuration loading) that the
//! pure domain crate must not know about.
//!
//! ## Config loading
//! ```rust,no_run
//! use composer_kernel::config::load_config;
//! use composer_kernel::domain::config::ComposerConfig;
//!
//! let cfg: ComposerConfig = load_config(None::<&str>).unwrap_or_default();
//! ```

pub mod config;

pub use composer_domain as domain;

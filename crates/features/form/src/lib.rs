//! # Form
//!
//! The composer form as a value. A [`FormState`] never changes in place; every user
//! interaction is a [`FormEvent`] and [`FormState::apply`] returns the next snapshot.
//! [`FormState::view`] turns a snapshot into the [`FormView`] a presentation layer draws.
//!
//! ```rust
//! use composer_domain::{CpuModel, ServerModel};
//! use composer_form::{FormEvent, FormState};
//!
//! let state = FormState::default()
//!     .apply(FormEvent::SelectCpu(CpuModel::X86))
//!     .apply(FormEvent::ChangeMemory("4096".into()))
//!     .apply(FormEvent::Submit);
//!
//! assert_eq!(state.memory_input(), "4,096");
//! assert_eq!(state.view().results, [ServerModel::TowerServer]);
//! ```

mod state;
mod view;

pub use crate::state::{FormEvent, FormState};
pub use crate::view::FormView;

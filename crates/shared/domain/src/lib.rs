//! # Domain Models
//!
//! Pure domain types for the server composer with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O and no decision logic, just data, fixed texts and simple helpers.

pub mod config;
pub mod constants;
pub mod hardware;

pub use hardware::{CpuModel, ServerModel};

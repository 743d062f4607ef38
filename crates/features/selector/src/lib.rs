//! Server model selection.
//!
//! A fixed, ordered rule table is evaluated top to bottom and the first matching rule
//! decides the models. The last rule always matches and yields
//! [`ServerModel::NoOptions`], so every configuration gets an answer.

mod rules;

pub use crate::rules::{RULES, Rule};

use composer_domain::{CpuModel, ServerModel};
use composer_memory::MemorySize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A validated server configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSpec {
    pub cpu: CpuModel,
    pub memory: MemorySize,
    pub gpu: bool,
}

/// Outcome of one rule table evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Name of the rule that matched, e.g. `rule-3a`.
    pub rule: &'static str,
    pub models: &'static [ServerModel],
}

impl Selection {
    #[must_use]
    pub fn is_no_options(&self) -> bool {
        self.models == [ServerModel::NoOptions]
    }
}

/// Picks the server models for a validated configuration.
#[must_use]
pub fn select(spec: &ServerSpec) -> Selection {
    select_megabytes(spec.cpu, spec.memory.megabytes(), spec.gpu)
}

/// Evaluates the rule table on a raw megabyte count.
///
/// No range checks happen here; callers holding user input go through [`select`].
#[must_use]
pub fn select_megabytes(cpu: CpuModel, memory_mb: u64, gpu: bool) -> Selection {
    let rule = RULES
        .iter()
        .find(|rule| rule.matches(cpu, memory_mb, gpu))
        .unwrap_or(&rules::NO_OPTIONS);

    debug!(rule = rule.name, %cpu, memory_mb, gpu, "selection made");

    Selection { rule: rule.name, models: rule.result }
}

use composer_domain::{CpuModel, ServerModel};

/// One row of the selection table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: fn(CpuModel, u64, bool) -> bool,
    pub result: &'static [ServerModel],
}

impl Rule {
    #[must_use]
    pub fn matches(&self, cpu: CpuModel, memory_mb: u64, gpu: bool) -> bool {
        (self.predicate)(cpu, memory_mb, gpu)
    }
}

const LARGE_MEMORY_MB: u64 = 131_072;

pub(crate) const NO_OPTIONS: Rule = Rule {
    name: "rule-5",
    description: "anything else",
    predicate: |_, _, _| true,
    result: &[ServerModel::NoOptions],
};

/// Rules in evaluation order. The first match wins and the last row always matches.
///
/// `rule-2` sits above `rule-3a`/`rule-3b`, so those two only fire for X86 in practice.
pub const RULES: &[Rule] = &[
    Rule {
        name: "rule-1",
        description: "GPU, ARM, at least 524288 MB",
        predicate: |cpu, memory_mb, gpu| gpu && cpu == CpuModel::Arm && memory_mb >= 524_288,
        result: &[ServerModel::HighDensityServer],
    },
    Rule {
        name: "rule-2",
        description: "no GPU, Power, at least 2048 MB",
        predicate: |cpu, memory_mb, gpu| !gpu && cpu == CpuModel::Power && memory_mb >= 2_048,
        result: &[ServerModel::Mainframe, ServerModel::RackServer, ServerModel::TowerServer],
    },
    Rule {
        name: "rule-3a",
        description: "no GPU, Power or X86, at least 131072 MB",
        predicate: |cpu, memory_mb, gpu| {
            !gpu && matches!(cpu, CpuModel::Power | CpuModel::X86) && memory_mb >= LARGE_MEMORY_MB
        },
        result: &[ServerModel::TowerServer, ServerModel::RackServer],
    },
    Rule {
        name: "rule-3b",
        description: "no GPU, Power or X86, below 131072 MB",
        predicate: |cpu, memory_mb, gpu| {
            !gpu && matches!(cpu, CpuModel::Power | CpuModel::X86) && memory_mb < LARGE_MEMORY_MB
        },
        result: &[ServerModel::TowerServer],
    },
    NO_OPTIONS,
];

use composer_domain::config::FormDefaults;
use composer_domain::{CpuModel, ServerModel};
use composer_memory::{ValidationError, group_digits, validate};
use composer_selector::{ServerSpec, select};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FormEvent {
    SelectCpu(CpuModel),
    /// New raw text of the memory field.
    ChangeMemory(String),
    ToggleGpu(bool),
    FocusMemory,
    BlurMemory,
    Submit,
}

/// Snapshot of everything the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    cpu: CpuModel,
    memory_input: String,
    gpu: bool,
    memory_error: Option<ValidationError>,
    submit_blocked: bool,
    results: Vec<ServerModel>,
    matched_rule: Option<String>,
    show_results: bool,
}

impl FormState {
    /// Fresh form with the configured CPU and GPU preselected.
    #[must_use]
    pub fn with_defaults(defaults: &FormDefaults) -> Self {
        Self { cpu: defaults.cpu, gpu: defaults.gpu, ..Self::default() }
    }

    #[must_use]
    pub fn apply(self, event: FormEvent) -> Self {
        debug!(?event, "form event");
        match event {
            FormEvent::SelectCpu(cpu) => Self { cpu, ..self },
            FormEvent::ToggleGpu(gpu) => Self { gpu, ..self },
            FormEvent::ChangeMemory(raw) => Self { memory_input: group_digits(&raw), ..self },
            FormEvent::FocusMemory => Self { memory_error: None, submit_blocked: false, ..self },
            FormEvent::BlurMemory => {
                let memory_error = validate(&self.memory_input).err();
                Self { memory_error, ..self }
            },
            FormEvent::Submit => self.submit(),
        }
    }

    fn submit(self) -> Self {
        match validate(&self.memory_input) {
            Err(err) => {
                debug!(kind = err.kind_name(), "submission blocked");
                Self {
                    memory_error: Some(err),
                    submit_blocked: true,
                    results: Vec::new(),
                    matched_rule: None,
                    show_results: false,
                    ..self
                }
            },
            Ok(memory) => {
                let selection = select(&ServerSpec { cpu: self.cpu, memory, gpu: self.gpu });
                Self {
                    memory_error: None,
                    submit_blocked: false,
                    results: selection.models.to_vec(),
                    matched_rule: Some(selection.rule.to_owned()),
                    show_results: true,
                    ..self
                }
            },
        }
    }

    #[must_use]
    pub const fn cpu(&self) -> CpuModel {
        self.cpu
    }

    /// Memory field text as displayed, with thousands separators.
    #[must_use]
    pub fn memory_input(&self) -> &str {
        &self.memory_input
    }

    #[must_use]
    pub const fn gpu(&self) -> bool {
        self.gpu
    }

    #[must_use]
    pub const fn memory_error(&self) -> Option<ValidationError> {
        self.memory_error
    }

    #[must_use]
    pub const fn submit_blocked(&self) -> bool {
        self.submit_blocked
    }

    #[must_use]
    pub fn results(&self) -> &[ServerModel] {
        &self.results
    }

    /// Rule behind the current results, if a submission went through.
    #[must_use]
    pub fn matched_rule(&self) -> Option<&str> {
        self.matched_rule.as_deref()
    }

    #[must_use]
    pub const fn show_results(&self) -> bool {
        self.show_results
    }
}

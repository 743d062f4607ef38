use crate::render;
use anyhow::Result;
use composer::domain::CpuModel;
use composer::domain::config::FormDefaults;
use composer::form::{FormEvent, FormState};
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

/// Runs one complete form pass: type the memory, leave the field, submit.
///
/// # Result
/// `ExitCode::SUCCESS` when the submission went through, `ExitCode::FAILURE` when the
/// memory size blocked it.
///
/// # Errors
/// Returns an error if the view cannot be written.
pub(crate) fn run(
    defaults: &FormDefaults,
    cpu: Option<CpuModel>,
    memory: &str,
    gpu: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let state = FormState::with_defaults(defaults)
        .apply(FormEvent::SelectCpu(cpu.unwrap_or(defaults.cpu)))
        .apply(FormEvent::ToggleGpu(gpu))
        .apply(FormEvent::ChangeMemory(memory.to_owned()))
        .apply(FormEvent::BlurMemory)
        .apply(FormEvent::Submit);

    info!(rule = state.matched_rule(), blocked = state.submit_blocked(), "form submitted");
    render::view(&state.view(), json, out)?;

    Ok(if state.submit_blocked() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

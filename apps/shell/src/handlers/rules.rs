use anyhow::Result;
use composer::domain::ServerModel;
use composer::selector::RULES;
use serde_json::json;
use std::io::Write;
use std::process::ExitCode;

/// Prints the selection rules in the order they are evaluated.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub(crate) fn run(json: bool, out: &mut impl Write) -> Result<ExitCode> {
    if json {
        let rules: Vec<_> = RULES
            .iter()
            .map(|rule| {
                json!({ "name": rule.name, "description": rule.description, "models": rule.result })
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rules)?;
        writeln!(out)?;
        return Ok(ExitCode::SUCCESS);
    }

    for rule in RULES {
        let models: Vec<_> = rule.result.iter().copied().map(ServerModel::label).collect();
        writeln!(out, "{:<8} {:<42} {}", rule.name, rule.description, models.join(", "))?;
    }
    Ok(ExitCode::SUCCESS)
}

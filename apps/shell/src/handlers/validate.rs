use anyhow::Result;
use composer::memory::validate;
use serde_json::json;
use std::io::Write;
use std::process::ExitCode;

/// Validates a single memory size and prints the verdict.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub(crate) fn run(raw: &str, json: bool, out: &mut impl Write) -> Result<ExitCode> {
    let result = validate(raw);

    if json {
        let value = match result {
            Ok(size) => json!({
                "valid": true,
                "megabytes": size.megabytes(),
                "display": size.to_string(),
            }),
            Err(err) => json!({
                "valid": false,
                "kind": err.kind_name(),
                "message": err.message(),
            }),
        };
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
    } else {
        match result {
            Ok(size) => writeln!(out, "{size}")?,
            Err(err) => writeln!(out, "{}: {err}", err.kind_name())?,
        }
    }

    Ok(if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

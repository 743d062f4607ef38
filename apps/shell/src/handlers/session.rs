//! Line-oriented form session over any reader.

use crate::render;
use anyhow::Result;
use composer::domain::CpuModel;
use composer::domain::config::FormDefaults;
use composer::form::{FormEvent, FormState};
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::debug;

const HELP: &str = "\
Commands:
  cpu <power|arm|x86>   select the CPU family
  memory <size>         type into the memory field (e.g. 524,288)
  gpu <on|off>          tick or clear the GPU checkbox
  focus                 enter the memory field
  blur                  leave the memory field
  submit                submit the form
  show                  print the form
  help                  print this help
  quit                  end the session";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(FormEvent),
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = line.trim_start().split_once(' ').unwrap_or((line.trim(), ""));
        let arg = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "cpu" => arg.parse::<CpuModel>().map_or_else(
                |_| Self::Unknown(format!("unknown CPU '{arg}', expected power, arm or x86")),
                |cpu| Self::Event(FormEvent::SelectCpu(cpu)),
            ),
            "memory" => Self::Event(FormEvent::ChangeMemory(arg.to_owned())),
            "gpu" => match arg {
                "on" | "yes" | "true" => Self::Event(FormEvent::ToggleGpu(true)),
                "off" | "no" | "false" => Self::Event(FormEvent::ToggleGpu(false)),
                _ => Self::Unknown(format!("unknown GPU setting '{arg}', expected on or off")),
            },
            "focus" => Self::Event(FormEvent::FocusMemory),
            "blur" => Self::Event(FormEvent::BlurMemory),
            "submit" => Self::Event(FormEvent::Submit),
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(format!("unknown command '{word}', type 'help' for commands")),
        }
    }
}

/// Reads commands until `quit` or end of input, rendering after `blur`, `submit` and `show`.
///
/// # Errors
/// Returns an error if reading the input or writing the output fails.
pub(crate) fn run(
    input: impl BufRead,
    out: &mut impl Write,
    defaults: &FormDefaults,
    json: bool,
) -> Result<ExitCode> {
    let mut state = FormState::with_defaults(defaults);

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Command::Event(event) => {
                let renders = matches!(event, FormEvent::BlurMemory | FormEvent::Submit);
                state = state.apply(event);
                if renders {
                    render::view(&state.view(), json, out)?;
                }
            },
            Command::Show => render::view(&state.view(), json, out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(hint) => {
                debug!(line = %line, "unrecognized session input");
                writeln!(out, "{hint}")?;
            },
        }
        out.flush()?;
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut buf = Vec::new();
        run(script.as_bytes(), &mut buf, &FormDefaults::default(), false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("cpu X86"), Command::Event(FormEvent::SelectCpu(CpuModel::X86)));
        assert_eq!(
            Command::parse("memory 524,288"),
            Command::Event(FormEvent::ChangeMemory("524,288".into()))
        );
        assert_eq!(Command::parse("gpu on"), Command::Event(FormEvent::ToggleGpu(true)));
        assert_eq!(Command::parse("  submit  "), Command::Event(FormEvent::Submit));
        assert_eq!(
            Command::parse("memory"),
            Command::Event(FormEvent::ChangeMemory(String::new()))
        );
        assert!(matches!(Command::parse("cpu sparc"), Command::Unknown(_)));
        assert!(matches!(Command::parse("launch"), Command::Unknown(_)));
    }

    #[test]
    fn renders_only_after_blur_submit_and_show() {
        let out = session("memory 4096\ncpu x86\n");
        assert!(out.is_empty());

        let out = session("memory 4096\nsubmit\n");
        assert!(out.contains("Server Model Options"));
    }

    #[test]
    fn focus_clears_a_blocked_submission() {
        let out = session("memory 4097\nsubmit\nfocus\nshow\n");
        let renders: Vec<_> = out.split("Server Composer\n").skip(1).collect();
        let [blocked, after_focus] = renders[..] else { panic!("expected two renders: {out}") };

        assert!(blocked.contains("! Please fix the error above before submitting"));
        assert!(!after_focus.contains("error:"));
        assert!(!after_focus.contains("! "));
    }

    #[test]
    fn unknown_input_keeps_state() {
        let out = session("memory 4096\ndance\nsubmit\n");
        assert!(out.contains("unknown command 'dance'"));
        assert!(out.contains("  - Mainframe"));
    }

    #[test]
    fn quit_stops_reading() {
        let out = session("quit\nshow\n");
        assert!(out.is_empty());
    }
}

//! Text and JSON rendering of form views.

use anyhow::Result;
use composer::domain::constants::{FORM_TITLE, RESULTS_HEADING};
use composer::form::FormView;
use std::io::Write;

/// Writes `view` either as pretty JSON or as the plain-text form.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub(crate) fn view(view: &FormView, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, view)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{FORM_TITLE}")?;
    writeln!(out, "  CPU:    {}", view.cpu)?;
    writeln!(out, "  Memory: {}", view.memory)?;
    if view.error_present {
        writeln!(out, "          error: {}", view.helper_text)?;
    } else {
        writeln!(out, "          {}", view.helper_text)?;
    }
    writeln!(out, "  GPU:    {}", if view.gpu { "yes" } else { "no" })?;

    if let Some(banner) = view.banner {
        writeln!(out, "! {banner}")?;
    }

    if view.show_results {
        writeln!(out)?;
        writeln!(out, "{RESULTS_HEADING}")?;
        for model in &view.results {
            writeln!(out, "  - {}", model.label())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use composer::prelude::*;

    fn text(state: &FormState) -> String {
        let mut buf = Vec::new();
        view(&state.view(), false, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn results_are_listed_under_the_heading() {
        let state = FormState::default()
            .apply(FormEvent::ChangeMemory("4096".into()))
            .apply(FormEvent::Submit);
        let out = text(&state);

        assert!(out.contains("Memory: 4,096"));
        assert!(out.ends_with(
            "Server Model Options\n  - Mainframe\n  - 4U Rack Server\n  - Tower Server\n"
        ));
        assert!(!out.contains("! "));
    }

    #[test]
    fn blocked_submit_shows_error_and_banner() {
        let state = FormState::default()
            .apply(FormEvent::ChangeMemory("4097".into()))
            .apply(FormEvent::Submit);
        let out = text(&state);

        assert!(out.contains("error: Memory size must be a multiple of 1024 MB"));
        assert!(out.contains("! Please fix the error above before submitting"));
        assert!(!out.contains("Server Model Options"));
    }

    #[test]
    fn json_output_is_the_view() {
        let state = FormState::default();
        let mut buf = Vec::new();
        view(&state.view(), true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["helper_text"], "Memory size range: 4096 MB to 8388608 MB");
        assert_eq!(value["error_present"], false);
    }
}

use crate::state::FormState;
use composer_domain::constants::{FIX_ERROR_BEFORE_SUBMIT, MEMORY_HELPER_TEXT};
use composer_domain::{CpuModel, ServerModel};
use serde::Serialize;

/// What the presentation layer draws for one [`FormState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub cpu: CpuModel,
    pub memory: String,
    pub gpu: bool,
    pub error_present: bool,
    /// `MIN`, `MAX`, `NOT_MULTIPLE` or `INVALID_CHARACTERS`.
    pub error_kind: Option<&'static str>,
    pub error_message: Option<&'static str>,
    pub submit_blocked: bool,
    pub banner: Option<&'static str>,
    /// The error message while one is present, the accepted range otherwise.
    pub helper_text: &'static str,
    pub results: Vec<ServerModel>,
    pub show_results: bool,
}

impl FormState {
    #[must_use]
    pub fn view(&self) -> FormView {
        let error = self.memory_error();
        FormView {
            cpu: self.cpu(),
            memory: self.memory_input().to_owned(),
            gpu: self.gpu(),
            error_present: error.is_some(),
            error_kind: error.map(|e| e.kind_name()),
            error_message: error.map(|e| e.message()),
            submit_blocked: self.submit_blocked(),
            banner: self.submit_blocked().then_some(FIX_ERROR_BEFORE_SUBMIT),
            helper_text: error.map_or(MEMORY_HELPER_TEXT, |e| e.message()),
            results: self.results().to_vec(),
            show_results: self.show_results(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FormEvent, FormState};
    use composer_domain::constants::{FIX_ERROR_BEFORE_SUBMIT, MEMORY_HELPER_TEXT};

    #[test]
    fn clean_form_shows_the_range_helper() {
        let view = FormState::default().view();
        assert!(!view.error_present);
        assert_eq!(view.helper_text, MEMORY_HELPER_TEXT);
        assert_eq!(view.banner, None);
        assert!(!view.show_results);
    }

    #[test]
    fn error_replaces_the_helper_text() {
        let view = FormState::default()
            .apply(FormEvent::ChangeMemory("9000000".into()))
            .apply(FormEvent::BlurMemory)
            .view();

        assert_eq!(view.error_kind, Some("MAX"));
        assert_eq!(view.helper_text, "Memory size must be at most 8388608 MB");
        assert_eq!(view.error_message, Some(view.helper_text));
    }

    #[test]
    fn blocked_submit_raises_the_banner() {
        let view = FormState::default().apply(FormEvent::Submit).view();
        assert!(view.submit_blocked);
        assert_eq!(view.banner, Some(FIX_ERROR_BEFORE_SUBMIT));
        assert_eq!(view.error_kind, Some("INVALID_CHARACTERS"));
    }

    #[test]
    fn view_serializes_for_the_output_collaborator() {
        let view = FormState::default()
            .apply(FormEvent::SelectCpu(composer_domain::CpuModel::X86))
            .apply(FormEvent::ChangeMemory("131072".into()))
            .apply(FormEvent::Submit)
            .view();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["cpu"], "x86");
        assert_eq!(json["memory"], "131,072");
        assert_eq!(json["results"], serde_json::json!(["TOWER_SERVER", "RACK_SERVER"]));
        assert_eq!(json["banner"], serde_json::Value::Null);
        assert_eq!(json["show_results"], true);
    }
}

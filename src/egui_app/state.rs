//! UI-facing state owned by the controller.

use crate::egui_app::ui::style::StatusTone;
use crate::predict::form::{FieldId, FormState};

/// Displayable outcome of a settled submission.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictionDisplay {
    /// The service classified the inputs as diabetic.
    Positive,
    /// The service classified the inputs as non-diabetic.
    Negative,
    /// Error text or a verbatim unrecognized service value.
    Message(String),
}

impl PredictionDisplay {
    /// Text shown in the result block.
    pub fn text(&self) -> &str {
        match self {
            Self::Positive => "Diabétique",
            Self::Negative => "Non diabétique",
            Self::Message(text) => text,
        }
    }
}

/// State backing the form view.
#[derive(Clone, Debug)]
pub struct FormUiState {
    /// Raw text buffers, one per field in `FieldId::ALL` order. Edits flow
    /// through the controller's coercion before touching the form state.
    pub inputs: [String; 8],
    /// Result of the last settled submission, if any.
    pub result: Option<PredictionDisplay>,
}

impl FormUiState {
    pub(crate) fn from_form(form: &FormState) -> Self {
        Self {
            inputs: FieldId::ALL.map(|field| format_field_value(form.value(field))),
            result: None,
        }
    }
}

/// Status bar state.
#[derive(Clone, Debug)]
pub struct StatusState {
    /// Message shown in the bar.
    pub text: String,
    /// Severity of the message.
    pub tone: StatusTone,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            text: "Prêt".to_string(),
            tone: StatusTone::Info,
        }
    }
}

/// Format a stored field value for its text input.
pub(crate) fn format_field_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

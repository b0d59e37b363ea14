//! Controller orchestrating the lifecycle of one form submission.
//!
//! The controller owns the form state, the in-flight flag and the displayed
//! result. It runs on the UI thread; worker threads report back only through
//! the job channel drained by [`PredictionController::poll_background_jobs`].

mod jobs;
mod submit;

pub use submit::SUBMIT_ERROR_TEXT;

use tracing::error;

use crate::config::{self, AppConfig};
use crate::egui_app::state::{FormUiState, StatusState, format_field_value};
use crate::egui_app::ui::style::StatusTone;
use crate::predict::form::{self, FieldId, FormState};

/// State the renderer reads and mutates directly.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Input buffers and the last settled result.
    pub form: FormUiState,
    /// Status bar contents.
    pub status: StatusState,
    /// Edit buffer for the endpoint base URL.
    pub endpoint_input: String,
}

/// Owns the form, the request lifecycle and the displayed result.
pub struct PredictionController {
    pub(crate) form: FormState,
    /// Active configuration; the endpoint half is editable from the UI.
    pub config: AppConfig,
    /// UI-facing state.
    pub ui: UiState,
    pub(crate) jobs: jobs::ControllerJobs,
}

impl PredictionController {
    /// Create a controller with default field values and no request in flight.
    pub fn new() -> Self {
        let form = FormState::default();
        let config = AppConfig::default();
        let ui = UiState {
            form: FormUiState::from_form(&form),
            status: StatusState::default(),
            endpoint_input: config.endpoint.base_url.clone(),
        };
        Self {
            form,
            config,
            ui,
            jobs: jobs::ControllerJobs::new(),
        }
    }

    /// Load persisted configuration and populate the endpoint editor.
    ///
    /// An unreadable config must not block startup; it is logged and the
    /// defaults stay in place, with a warning in the status bar.
    pub fn load_configuration(&mut self) {
        match config::load_or_default() {
            Ok(cfg) => {
                self.ui.endpoint_input = cfg.endpoint.base_url.clone();
                self.config = cfg;
            }
            Err(err) => {
                error!("Erreur: {err}");
                self.set_status(
                    "Configuration illisible, valeurs par défaut utilisées",
                    StatusTone::Warning,
                );
            }
        }
    }

    /// Replace one field from raw text input.
    ///
    /// Non-numeric or negative input leaves the stored value unchanged, so a
    /// field never holds anything but a finite number. No other field is
    /// touched.
    pub fn update_field(&mut self, field: FieldId, raw: &str) {
        if let Some(value) = form::parse_input(raw) {
            self.form.set(field, value);
        }
    }

    /// Current value of a field.
    pub fn field_value(&self, field: FieldId) -> f64 {
        self.form.value(field)
    }

    /// Whether a submission is currently in flight.
    pub fn submitting(&self) -> bool {
        self.jobs.predict_in_progress()
    }

    /// Whether a health check is currently in flight.
    pub fn checking_backend(&self) -> bool {
        self.jobs.health_in_progress()
    }

    /// Apply the edited endpoint URL and persist it.
    pub fn apply_endpoint(&mut self) {
        let trimmed = self.ui.endpoint_input.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            self.set_status("L'adresse du service ne peut pas être vide", StatusTone::Warning);
            self.ui.endpoint_input = self.config.endpoint.base_url.clone();
            return;
        }
        self.config.endpoint.base_url = trimmed.to_string();
        self.ui.endpoint_input = trimmed.to_string();
        match config::save(&self.config) {
            Ok(()) => self.set_status("Adresse du service enregistrée", StatusTone::Info),
            Err(err) => {
                self.set_status(format!("Échec de l'enregistrement: {err}"), StatusTone::Error);
            }
        }
    }

    /// Reset the input buffers to the stored form values. Used after edits so
    /// a rejected buffer snaps back to the value it failed to replace.
    pub fn refresh_field_inputs(&mut self) {
        self.ui.form.inputs =
            FieldId::ALL.map(|field| format_field_value(self.form.value(field)));
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}

impl Default for PredictionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn fresh_controller_is_idle_with_defaults() {
        let controller = PredictionController::new();
        assert!(!controller.submitting());
        assert!(controller.ui.form.result.is_none());
        assert_eq!(controller.field_value(FieldId::Pregnancies), 1.0);
        assert_eq!(controller.field_value(FieldId::Age), 30.0);
        assert_eq!(controller.config.endpoint.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn update_field_coerces_and_replaces() {
        let mut controller = PredictionController::new();
        controller.update_field(FieldId::Glucose, " 150.5 ");
        assert_eq!(controller.field_value(FieldId::Glucose), 150.5);
        assert_eq!(controller.field_value(FieldId::Insulin), 80.0);
    }

    #[test]
    fn update_field_keeps_previous_value_on_garbage() {
        let mut controller = PredictionController::new();
        controller.update_field(FieldId::Bmi, "not a number");
        assert_eq!(controller.field_value(FieldId::Bmi), 25.0);
        controller.update_field(FieldId::Bmi, "-4");
        assert_eq!(controller.field_value(FieldId::Bmi), 25.0);
    }

    #[test]
    fn refresh_field_inputs_snaps_buffers_back() {
        let mut controller = PredictionController::new();
        controller.ui.form.inputs[0] = "garbage".to_string();
        controller.refresh_field_inputs();
        assert_eq!(controller.ui.form.inputs[0], "1");
    }

    #[test]
    fn apply_endpoint_rejects_empty_input() {
        let mut controller = PredictionController::new();
        controller.ui.endpoint_input = "   ".to_string();
        controller.apply_endpoint();
        assert_eq!(controller.config.endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(controller.ui.endpoint_input, DEFAULT_BASE_URL);
    }
}

use tracing::{error, info};

use super::PredictionController;
use super::jobs::JobMessage;
use crate::egui_app::state::PredictionDisplay;
use crate::egui_app::ui::style::StatusTone;
use crate::predict::api::{PredictError, PredictionOutcome};
use crate::predict::health::HealthError;

/// Fixed user-facing text for any failed submission.
pub const SUBMIT_ERROR_TEXT: &str = "Erreur lors de la prédiction";

impl PredictionController {
    /// Start a submission: clear the previous result, mark the request in
    /// flight and hand a snapshot of the form to a worker thread.
    ///
    /// A no-op while another submission is in flight; the in-flight flag
    /// returns to idle exactly once per started submission.
    pub fn submit(&mut self) {
        if self.jobs.predict_in_progress() {
            return;
        }
        self.ui.form.result = None;
        self.set_status("Envoi de la demande de prédiction...", StatusTone::Info);
        self.jobs
            .begin_predict(self.config.endpoint.clone(), self.form.clone());
    }

    /// Start a connectivity check against the service's health route.
    pub fn check_backend(&mut self) {
        if self.jobs.health_in_progress() {
            return;
        }
        self.set_status("Vérification du service...", StatusTone::Info);
        self.jobs.begin_health_check(self.config.endpoint.clone());
    }

    /// Drain settlement messages from worker threads. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictionSettled(result) => {
                    self.handle_prediction_settled(result);
                }
                JobMessage::HealthChecked(result) => {
                    self.handle_health_checked(result);
                }
            }
        }
    }

    fn handle_prediction_settled(
        &mut self,
        result: Result<PredictionOutcome, PredictError>,
    ) {
        self.jobs.clear_predict();
        match result {
            Ok(PredictionOutcome::Positive) => {
                info!("Prediction settled: positive");
                self.ui.form.result = Some(PredictionDisplay::Positive);
                self.set_status("Prédiction reçue", StatusTone::Info);
            }
            Ok(PredictionOutcome::Negative) => {
                info!("Prediction settled: negative");
                self.ui.form.result = Some(PredictionDisplay::Negative);
                self.set_status("Prédiction reçue", StatusTone::Info);
            }
            Ok(PredictionOutcome::Other(text)) => {
                info!("Prediction settled with unrecognized value: {text}");
                self.ui.form.result = Some(PredictionDisplay::Message(text));
                self.set_status("Réponse inattendue du service", StatusTone::Warning);
            }
            Err(err) => {
                error!("Erreur: {err}");
                self.ui.form.result =
                    Some(PredictionDisplay::Message(SUBMIT_ERROR_TEXT.to_string()));
                self.set_status(SUBMIT_ERROR_TEXT, StatusTone::Error);
            }
        }
    }

    fn handle_health_checked(&mut self, result: Result<(), HealthError>) {
        self.jobs.clear_health_check();
        match result {
            Ok(()) => {
                self.set_status("Service de prédiction disponible", StatusTone::Info);
            }
            Err(err) => {
                error!("Erreur: {err}");
                self.set_status(
                    format!("Service de prédiction injoignable: {err}"),
                    StatusTone::Warning,
                );
            }
        }
    }
}

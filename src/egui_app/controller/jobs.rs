use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::config::EndpointConfig;
use crate::predict::api::{self, PredictError, PredictionOutcome};
use crate::predict::form::FormState;
use crate::predict::health::{self, HealthError};

/// Settlement messages sent from worker threads to the UI thread.
pub(crate) enum JobMessage {
    PredictionSettled(Result<PredictionOutcome, PredictError>),
    HealthChecked(Result<(), HealthError>),
}

/// Registry of in-flight background jobs and their shared message channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    predict_in_progress: bool,
    health_in_progress: bool,
}

impl ControllerJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            predict_in_progress: false,
            health_in_progress: false,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(crate) fn predict_in_progress(&self) -> bool {
        self.predict_in_progress
    }

    pub(crate) fn health_in_progress(&self) -> bool {
        self.health_in_progress
    }

    /// Start a prediction request on a worker thread. Exactly one settlement
    /// message is sent per started request, whatever the outcome.
    pub(crate) fn begin_predict(&mut self, endpoint: EndpointConfig, form: FormState) {
        if self.predict_in_progress {
            return;
        }
        self.predict_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = api::request_prediction(&endpoint, &form);
            let _ = tx.send(JobMessage::PredictionSettled(result));
        });
    }

    pub(crate) fn clear_predict(&mut self) {
        self.predict_in_progress = false;
    }

    /// Start a health probe on a worker thread.
    pub(crate) fn begin_health_check(&mut self, endpoint: EndpointConfig) {
        if self.health_in_progress {
            return;
        }
        self.health_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = health::check_health(&endpoint);
            let _ = tx.send(JobMessage::HealthChecked(result));
        });
    }

    pub(crate) fn clear_health_check(&mut self) {
        self.health_in_progress = false;
    }
}

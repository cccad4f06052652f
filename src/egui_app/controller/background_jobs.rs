use super::jobs::{JobMessage, PredictionResult};
use super::*;
use tracing::{info, warn};

pub(crate) const PREDICTION_SUCCESS_TEXT: &str = "Prediccion realizada exitosamente";
pub(crate) const PREDICTION_FAILURE_TEXT: &str = "Error al realizar la predicción";

impl EguiController {
    /// Apply every finished background job.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };

            match message {
                JobMessage::PredictionFinished(message) => self.finish_prediction(message),
            }
        }
    }

    fn finish_prediction(&mut self, message: PredictionResult) {
        match message.result {
            Ok(scores) => {
                let prediction = Prediction::new(
                    self.predictions.len(),
                    Some(message.preview.as_str()),
                    scores,
                );
                info!(
                    id = %prediction.id,
                    elapsed_ms = message.elapsed.as_millis() as u64,
                    "Prediction added"
                );
                self.predictions.push(prediction);
                self.table.on_data_changed();
                self.ui.session.dialog_open = false;
                self.acquirer.clear();
                self.notify(PREDICTION_SUCCESS_TEXT, ToastTone::Success);
                self.refresh_table();
            }
            Err(err) => {
                warn!(code = err.code(), "Prediction failed: {err}");
                self.notify(PREDICTION_FAILURE_TEXT, ToastTone::Error);
            }
        }
        self.jobs.clear_prediction();
        self.ui.session.loading = false;
    }
}

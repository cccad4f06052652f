use super::jobs::PredictionJob;
use super::*;
use tracing::{debug, info};

impl EguiController {
    pub fn open_dialog(&mut self) {
        self.ui.session.dialog_open = true;
    }

    /// Close the upload dialog. Refused while a prediction is in flight.
    pub fn close_dialog(&mut self) {
        if self.ui.session.loading {
            debug!("Ignoring dialog close while a prediction is running");
            return;
        }
        self.ui.session.dialog_open = false;
    }

    /// Send the staged image to the classifier.
    ///
    /// Without a staged image, or while another submission is in flight, the
    /// call does nothing. The result is applied by
    /// [`EguiController::poll_background_jobs`].
    pub fn submit(&mut self) {
        if self.ui.session.loading || self.jobs.prediction_in_progress() {
            debug!("Ignoring submit while a prediction is running");
            return;
        }
        let Some(image) = self.acquirer.staged().cloned() else {
            debug!("Ignoring submit without a staged image");
            return;
        };
        info!(file = %image.file_name(), "Submitting prediction");
        self.ui.session.loading = true;
        self.jobs
            .begin_prediction(Arc::clone(&self.gateway), PredictionJob { image });
    }

    /// Whether [`EguiController::submit`] would start a request.
    pub fn can_submit(&self) -> bool {
        !self.ui.session.loading && self.acquirer.staged().is_some()
    }
}

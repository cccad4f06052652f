use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::image_acquirer::StagedImage;
use crate::prediction::Scores;
use crate::prediction_gateway::{GatewayError, PredictionGateway};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) image: StagedImage,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    /// Preview staged when the job was submitted.
    pub(crate) preview: String,
    pub(crate) result: Result<Scores, GatewayError>,
    pub(crate) elapsed: Duration,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            prediction_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.prediction_in_progress
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }

    /// Run one classification off the frame thread.
    pub(super) fn begin_prediction(
        &mut self,
        gateway: Arc<dyn PredictionGateway>,
        job: PredictionJob,
    ) {
        if self.prediction_in_progress {
            return;
        }
        self.prediction_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let started = Instant::now();
            // A panicking gateway must still resolve the submission.
            let result = panic::catch_unwind(AssertUnwindSafe(|| gateway.classify(&job.image)))
                .unwrap_or_else(|_| {
                    error!("Prediction worker panicked");
                    Err(GatewayError::Network("prediction worker panicked".into()))
                });
            let message = PredictionResult {
                preview: job.image.preview().to_string(),
                result,
                elapsed: started.elapsed(),
            };
            if tx.send(JobMessage::PredictionFinished(message)).is_err() {
                debug!("Prediction finished after the controller was dropped");
            }
        });
    }
}

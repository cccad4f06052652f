use super::*;
use crate::image_acquirer::FilePicker;
use crate::prediction::Scores;
use crate::prediction_gateway::GatewayError;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Mutex;
use std::time::Duration;

pub(super) const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 7, 7];

/// Gateway answering from a script, optionally held until released.
pub(super) struct FakeGateway {
    responses: Mutex<VecDeque<Result<Scores, GatewayError>>>,
    calls: AtomicUsize,
    gate: Option<Mutex<Receiver<()>>>,
}

impl FakeGateway {
    pub(super) fn new(responses: Vec<Result<Scores, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            gate: None,
        })
    }

    /// Each call blocks until a `()` arrives on the returned sender.
    pub(super) fn gated(responses: Vec<Result<Scores, GatewayError>>) -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let gateway = Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            gate: Some(Mutex::new(rx)),
        });
        (gateway, tx)
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictionGateway for FakeGateway {
    fn classify(&self, _image: &StagedImage) -> Result<Scores, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted response".into())))
    }
}

/// Picker returning queued paths, then `None`.
pub(super) struct QueuedPicker(pub(super) VecDeque<PathBuf>);

impl FilePicker for QueuedPicker {
    fn pick_image(&mut self) -> Option<PathBuf> {
        self.0.pop_front()
    }
}

pub(super) fn controller_with(gateway: Arc<FakeGateway>) -> EguiController {
    EguiController::new(
        AppSettings::default(),
        gateway,
        Box::new(QueuedPicker(VecDeque::new())),
        None,
    )
}

/// Open the dialog and stage a small PNG.
pub(super) fn stage_png(controller: &mut EguiController) {
    controller.open_dialog();
    controller.stage_dropped_bytes("photo.png", PNG_BYTES.to_vec());
    assert!(controller.staged_image().is_some());
}

/// Poll until the in-flight submission is applied.
pub(super) fn wait_for_resolution(controller: &mut EguiController) {
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while controller.ui.session.loading {
        assert!(
            std::time::Instant::now() < deadline,
            "prediction did not resolve in time"
        );
        std::thread::sleep(Duration::from_millis(5));
        controller.poll_background_jobs();
    }
}

pub(super) fn scores_from(body: &str) -> Scores {
    crate::prediction_gateway::parse_prediction_response(body.as_bytes()).unwrap()
}

/// Gateway whose every call panics.
pub(super) struct PanickingGateway;

impl PredictionGateway for PanickingGateway {
    fn classify(&self, _image: &StagedImage) -> Result<Scores, GatewayError> {
        panic!("classifier exploded");
    }
}

//! Session controller bridging the prediction workflow to the egui UI.
//!
//! Every mutation of the prediction list, the staged image and the UI flags
//! happens on the frame thread. Classification runs on a worker thread and
//! reports back through [`jobs::JobMessage`], which
//! [`EguiController::poll_background_jobs`] applies once per frame.

mod background_jobs;
mod image;
mod jobs;
mod session;
mod table;
mod theme;

#[cfg(test)]
mod test_support;

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use crate::config::AppSettings;
use crate::egui_app::state::{ToastTone, UiState};
use crate::image_acquirer::{FilePicker, ImageAcquirer, RfdFilePicker, StagedImage};
use crate::prediction::Prediction;
use crate::prediction_gateway::{HttpPredictionGateway, PredictionGateway};
use crate::table::TableModel;
use crate::theme_store::ThemeStore;

use jobs::ControllerJobs;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    predictions: Vec<Prediction>,
    acquirer: ImageAcquirer,
    table: TableModel,
    gateway: Arc<dyn PredictionGateway>,
    jobs: ControllerJobs,
    theme_store: Option<ThemeStore>,
    settings: AppSettings,
}

impl EguiController {
    pub fn new(
        settings: AppSettings,
        gateway: Arc<dyn PredictionGateway>,
        picker: Box<dyn FilePicker>,
        theme_store: Option<ThemeStore>,
    ) -> Self {
        let mut controller = Self {
            ui: UiState::default(),
            predictions: Vec::new(),
            acquirer: ImageAcquirer::new(picker),
            table: TableModel::new(settings.default_page_size),
            gateway,
            jobs: ControllerJobs::new(),
            theme_store,
            settings,
        };
        controller.load_theme();
        controller.refresh_table();
        controller
    }

    /// Controller wired to the HTTP classifier, the native file dialog and
    /// the on-disk theme store.
    pub fn from_settings(settings: AppSettings) -> Self {
        let gateway = Arc::new(HttpPredictionGateway::new(
            settings.classifier_endpoint.clone(),
        ));
        let theme_store = match ThemeStore::open_default(settings.theme_storage_key.clone()) {
            Ok(store) => Some(store),
            Err(err) => {
                warn!("Theme preference will not persist: {err}");
                None
            }
        };
        Self::new(settings, gateway, Box::new(RfdFilePicker), theme_store)
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Predictions in submission order.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn staged_image(&self) -> Option<&StagedImage> {
        self.acquirer.staged()
    }

    /// Whether the renderer should keep repainting without input.
    pub fn needs_repaint(&self) -> bool {
        self.ui.session.loading || !self.ui.toasts.is_empty()
    }

    /// Per-frame housekeeping: apply finished jobs and expire toasts.
    pub fn tick(&mut self) {
        self.poll_background_jobs();
        self.ui.toasts.expire(Instant::now());
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>, tone: ToastTone) {
        self.ui.toasts.push(message, tone, Instant::now());
    }
}

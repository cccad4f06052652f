use super::*;
use crate::image_acquirer::ImageEncodeError;
use std::path::Path;
use tracing::warn;

pub(crate) const IMAGE_LOAD_FAILURE_TEXT: &str = "No se pudo cargar la imagen";

impl EguiController {
    /// Open the native picker; a dismissed dialog changes nothing.
    pub fn pick_image(&mut self) {
        if self.ui.session.loading {
            return;
        }
        let result = self.acquirer.open_picker().map(|_| ());
        self.report_image_result(result);
    }

    /// Stage a file dropped on the upload dialog.
    pub fn stage_dropped_path(&mut self, path: &Path) {
        if self.ui.session.loading {
            return;
        }
        let result = self.acquirer.select_path(path);
        self.report_image_result(result);
    }

    /// Stage dropped bytes when the platform gives no path.
    pub fn stage_dropped_bytes(&mut self, file_name: &str, bytes: Vec<u8>) {
        if self.ui.session.loading {
            return;
        }
        let result = self.acquirer.select_bytes(file_name, bytes);
        self.report_image_result(result);
    }

    /// "Eliminar": drop the staged image.
    pub fn remove_image(&mut self) {
        if self.ui.session.loading {
            return;
        }
        self.acquirer.clear();
    }

    fn report_image_result(&mut self, result: Result<(), ImageEncodeError>) {
        if let Err(err) = result {
            warn!(code = err.code(), "{err}");
            self.notify(IMAGE_LOAD_FAILURE_TEXT, ToastTone::Warning);
        }
    }
}

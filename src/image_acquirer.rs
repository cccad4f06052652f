//! Staging of the image the user wants classified.
//!
//! The acquirer owns at most one [`StagedImage`]. The raw bytes and the
//! data-URL preview live in the same value, so one is never present without
//! the other.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

const FALLBACK_MIME: &str = "application/octet-stream";
const PICKER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Failure to turn a selected file into a staged image.
#[derive(Debug, thiserror::Error)]
pub enum ImageEncodeError {
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Image {name} is empty")]
    Empty { name: String },
}

impl ImageEncodeError {
    /// Stable error code for logs.
    pub fn code(&self) -> &'static str {
        "IMAGE_ENCODE_ERROR"
    }
}

/// An image selected for upload together with its preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
    preview: String,
}

impl StagedImage {
    /// Stage in-memory bytes, sniffing the MIME type from content then name.
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ImageEncodeError> {
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(ImageEncodeError::Empty { name: file_name });
        }
        let mime = sniff_mime(&file_name, &bytes);
        let preview = encode_data_url(&mime, &bytes);
        Ok(Self {
            file_name,
            mime,
            bytes,
            preview,
        })
    }

    /// Read and stage a file from disk.
    pub fn from_path(path: &Path) -> Result<Self, ImageEncodeError> {
        let bytes = std::fs::read(path).map_err(|source| ImageEncodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "imagen".to_string());
        Self::from_bytes(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:<mime>;base64,<payload>` preview of the bytes.
    pub fn preview(&self) -> &str {
        &self.preview
    }
}

/// Native source of image paths, normally a file dialog.
pub trait FilePicker {
    /// Ask the user for one image. `None` means the dialog was dismissed.
    fn pick_image(&mut self) -> Option<PathBuf>;
}

/// [`FilePicker`] backed by the platform file dialog.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfdFilePicker;

impl FilePicker for RfdFilePicker {
    fn pick_image(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Seleccionar imagen")
            .add_filter("Imágenes", PICKER_EXTENSIONS)
            .add_filter("Todos los archivos", &["*"])
            .pick_file()
    }
}

/// Holds the staged image and drives the picker.
pub struct ImageAcquirer {
    staged: Option<StagedImage>,
    picker: Box<dyn FilePicker>,
}

impl ImageAcquirer {
    pub fn new(picker: Box<dyn FilePicker>) -> Self {
        Self {
            staged: None,
            picker,
        }
    }

    pub fn staged(&self) -> Option<&StagedImage> {
        self.staged.as_ref()
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.staged.as_ref().map(StagedImage::bytes)
    }

    pub fn preview(&self) -> Option<&str> {
        self.staged.as_ref().map(StagedImage::preview)
    }

    /// Stage `path`. On failure the previous staged image is kept.
    pub fn select_path(&mut self, path: &Path) -> Result<(), ImageEncodeError> {
        let staged = StagedImage::from_path(path)?;
        self.stage(staged);
        Ok(())
    }

    /// Stage bytes that did not come from the picker (e.g. a drop).
    pub fn select_bytes(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ImageEncodeError> {
        let staged = StagedImage::from_bytes(file_name, bytes)?;
        self.stage(staged);
        Ok(())
    }

    /// Open the picker and stage whatever it returns.
    ///
    /// Every pick re-reads the file, including the one already staged.
    /// Returns `Ok(false)` when the dialog is dismissed.
    pub fn open_picker(&mut self) -> Result<bool, ImageEncodeError> {
        let Some(path) = self.picker.pick_image() else {
            debug!("Image picker dismissed");
            return Ok(false);
        };
        self.select_path(&path)?;
        Ok(true)
    }

    /// Drop the staged image.
    pub fn clear(&mut self) {
        if self.staged.take().is_some() {
            info!("Staged image cleared");
        }
    }

    fn stage(&mut self, staged: StagedImage) {
        info!(
            file = %staged.file_name(),
            mime = %staged.mime(),
            bytes = staged.bytes().len(),
            "Image staged"
        );
        self.staged = Some(staged);
    }
}

/// Build a base64 data URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Recover the bytes of a base64 data URL. Other URLs yield `None`.
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

fn sniff_mime(file_name: &str, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }
    Path::new(file_name)
        .extension()
        .and_then(|ext| image::ImageFormat::from_extension(ext))
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

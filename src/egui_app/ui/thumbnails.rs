use std::collections::HashMap;

use eframe::egui::load::SizedTexture;
use eframe::egui::{self, ColorImage, TextureHandle, TextureId, TextureOptions};
use tracing::debug;

use crate::image_acquirer::{StagedImage, decode_data_url};

const THUMBNAIL_EDGE: u32 = 96;
const PREVIEW_EDGE: u32 = 320;

/// Textures decoded from prediction previews, keyed by prediction id.
///
/// Failed decodes are cached as `None` so they are not retried every frame.
#[derive(Default)]
pub(super) struct ThumbnailCache {
    rows: HashMap<String, Option<TextureHandle>>,
    staged: Option<(String, Option<TextureHandle>)>,
}

impl ThumbnailCache {
    pub(super) fn row_texture(
        &mut self,
        ctx: &egui::Context,
        id: &str,
        url: &str,
    ) -> Option<TextureId> {
        self.rows
            .entry(id.to_string())
            .or_insert_with(|| {
                let bytes = decode_data_url(url)?;
                load_texture(ctx, &format!("thumb-{id}"), &bytes, THUMBNAIL_EDGE)
            })
            .as_ref()
            .map(TextureHandle::id)
    }

    /// Texture for the image staged in the upload dialog.
    pub(super) fn staged_texture(
        &mut self,
        ctx: &egui::Context,
        image: &StagedImage,
    ) -> Option<SizedTexture> {
        let stale = self
            .staged
            .as_ref()
            .is_none_or(|(preview, _)| preview != image.preview());
        if stale {
            let texture = load_texture(ctx, "staged-preview", image.bytes(), PREVIEW_EDGE);
            self.staged = Some((image.preview().to_string(), texture));
        }
        self.staged
            .as_ref()
            .and_then(|(_, texture)| texture.as_ref())
            .map(SizedTexture::from_handle)
    }

    pub(super) fn clear_staged(&mut self) {
        self.staged = None;
    }
}

fn load_texture(
    ctx: &egui::Context,
    name: &str,
    bytes: &[u8],
    max_edge: u32,
) -> Option<TextureHandle> {
    let decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("Preview {name} is not a decodable image: {err}");
            return None;
        }
    };
    let rgba = decoded.thumbnail(max_edge, max_edge).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Some(ctx.load_texture(name, color_image, TextureOptions::LINEAR))
}

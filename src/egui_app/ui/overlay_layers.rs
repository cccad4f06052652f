//! Paint order for floating UI. Toasts float over the panels; the upload
//! dialog and the dimmed backdrop behind it sit above the toasts.

use eframe::egui::{self, Color32, Id, LayerId, Order, Sense};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OverlayLayer {
    Toasts,
    UploadDialog,
}

impl OverlayLayer {
    pub(super) fn order(self) -> Order {
        match self {
            Self::Toasts => Order::Foreground,
            Self::UploadDialog => Order::Tooltip,
        }
    }
}

/// Darken the whole window behind the upload dialog so clicks aimed at the
/// table never reach it.
pub(super) fn dim_behind_dialog(ctx: &egui::Context, id: Id, color: Color32) {
    let order = OverlayLayer::UploadDialog.order();
    let screen = ctx.viewport_rect();
    ctx.layer_painter(LayerId::new(order, id.with("dim")))
        .rect_filled(screen, 0.0, color);
    egui::Area::new(id.with("click_shield"))
        .order(order)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen, Sense::click_and_drag());
        });
}

use super::EguiApp;
use super::overlay_layers::OverlayLayer;
use super::style;
use eframe::egui::{self, Align2, Color32, Frame, Margin, RichText, Sense};

const TOAST_WIDTH: f32 = 320.0;

impl EguiApp {
    /// Stack of notifications in the bottom-right corner; click to dismiss.
    pub(super) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.controller.ui.toasts.is_empty() {
            return;
        }
        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(OverlayLayer::Toasts.order())
            .show(ctx, |ui| {
                ui.set_max_width(TOAST_WIDTH);
                for toast in self.controller.ui.toasts.iter() {
                    let response = Frame::new()
                        .fill(style::toast_fill(toast.tone))
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH);
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        dismissed = Some(toast.id);
                    }
                    ui.add_space(6.0);
                }
            });
        if let Some(id) = dismissed {
            self.controller.ui.toasts.dismiss(id);
        }
    }
}

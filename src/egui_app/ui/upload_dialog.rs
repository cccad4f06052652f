use super::EguiApp;
use super::overlay_layers::{self, OverlayLayer};
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, Align, Align2, Layout, RichText, Sense, Vec2};

const DIALOG_WIDTH: f32 = 420.0;
const DROP_ZONE_HEIGHT: f32 = 180.0;
const PREVIEW_MAX: Vec2 = Vec2::new(DIALOG_WIDTH, 240.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogAction {
    None,
    Pick,
    Remove,
    Close,
    Submit,
}

impl EguiApp {
    /// Modal upload dialog with drop zone, preview and submit controls.
    pub(super) fn render_upload_dialog(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.session.dialog_open {
            self.thumbnails.clear_staged();
            return;
        }
        let loading = self.controller.ui.session.loading;
        overlay_layers::dim_behind_dialog(
            ctx,
            egui::Id::new("upload_dialog"),
            style::modal_backdrop_color(),
        );
        if !loading {
            self.stage_dropped_files(ctx);
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.controller.close_dialog();
                return;
            }
        }

        let mut open = true;
        let mut action = DialogAction::None;
        egui::Window::new(view_model::DIALOG_TITLE)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::UploadDialog.order())
            .collapsible(false)
            .resizable(false)
            .default_width(DIALOG_WIDTH)
            .open(&mut open)
            .show(ctx, |ui| {
                action = self.render_upload_dialog_body(ui, loading);
            });

        if !open {
            action = DialogAction::Close;
        }
        match action {
            DialogAction::None => {}
            DialogAction::Pick => self.controller.pick_image(),
            DialogAction::Remove => self.controller.remove_image(),
            DialogAction::Close => self.controller.close_dialog(),
            DialogAction::Submit => self.controller.submit(),
        }
    }

    fn render_upload_dialog_body(&mut self, ui: &mut egui::Ui, loading: bool) -> DialogAction {
        let mut action = DialogAction::None;
        ui.set_min_width(DIALOG_WIDTH);
        ui.label(RichText::new(view_model::DIALOG_DESCRIPTION).weak());
        ui.add_space(12.0);

        match self.controller.staged_image().cloned() {
            Some(image) => {
                ui.vertical_centered(|ui| {
                    if let Some(texture) = self.thumbnails.staged_texture(ui.ctx(), &image) {
                        ui.add(
                            egui::Image::new(texture)
                                .max_size(PREVIEW_MAX)
                                .maintain_aspect_ratio(true)
                                .corner_radius(egui::CornerRadius::same(6)),
                        );
                    }
                    ui.label(RichText::new(image.file_name()).small());
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!loading, egui::Button::new("Cambiar imagen"))
                        .clicked()
                    {
                        action = DialogAction::Pick;
                    }
                    if ui
                        .add_enabled(!loading, egui::Button::new("Eliminar"))
                        .clicked()
                    {
                        action = DialogAction::Remove;
                    }
                });
            }
            None => {
                if self.render_drop_zone(ui) {
                    action = DialogAction::Pick;
                }
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let submit = egui::Button::new(view_model::submit_label(loading));
            if ui.add_enabled(self.controller.can_submit(), submit).clicked() {
                action = DialogAction::Submit;
            }
            if ui.add_enabled(!loading, egui::Button::new("Cerrar")).clicked() {
                action = DialogAction::Close;
            }
            if loading {
                ui.spinner();
            }
        });
        action
    }

    /// Returns true when clicked.
    fn render_drop_zone(&mut self, ui: &mut egui::Ui) -> bool {
        let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let size = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        let highlighted = hovering_files || response.hovered();
        let painter = ui.painter();
        painter.rect_filled(rect, 8.0, ui.visuals().faint_bg_color);
        painter.rect_stroke(
            rect,
            8.0,
            style::drop_zone_stroke(highlighted),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center() - egui::vec2(0.0, 10.0),
            Align2::CENTER_CENTER,
            view_model::DROP_ZONE_TEXT,
            egui::TextStyle::Body.resolve(ui.style()),
            ui.visuals().text_color(),
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 12.0),
            Align2::CENTER_CENTER,
            view_model::DROP_ZONE_HINT,
            egui::TextStyle::Small.resolve(ui.style()),
            ui.visuals().weak_text_color(),
        );
        response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    }

    fn stage_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(path) = file.path {
            self.controller.stage_dropped_path(&path);
        } else if let Some(bytes) = file.bytes {
            self.controller.stage_dropped_bytes(&file.name, bytes.to_vec());
        }
    }
}

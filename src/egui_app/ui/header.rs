use super::EguiApp;
use crate::egui_app::view_model;
use crate::theme_store::ThemePreference;
use eframe::egui::{self, Frame, Margin, RichText};

impl EguiApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("page_header")
            .frame(Frame::side_top_panel(&ctx.style()).inner_margin(Margin::symmetric(16, 12)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(view_model::PAGE_TITLE).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_theme_menu(ui);
                        if ui.button(view_model::ADD_PREDICTION_LABEL).clicked() {
                            self.controller.open_dialog();
                        }
                    });
                });
            });
    }

    fn render_theme_menu(&mut self, ui: &mut egui::Ui) {
        let current = self.controller.ui.theme;
        let mut choice = current;
        ui.menu_button(format!("Tema: {}", current.label()), |ui| {
            for preference in ThemePreference::ALL {
                if ui
                    .selectable_value(&mut choice, preference, preference.label())
                    .clicked()
                {
                    ui.close();
                }
            }
        });
        if choice != current {
            self.controller.set_theme(choice);
        }
    }
}

//! egui renderer for the application UI.

mod header;
mod overlay_layers;
pub mod style;
mod table_view;
mod thumbnails;
mod toasts;
mod upload_dialog;

use std::time::Duration;

use eframe::egui;

use crate::config::AppSettings;
use crate::egui_app::controller::EguiController;
use crate::theme_store::ThemePreference;
use thumbnails::ThumbnailCache;

/// Smallest window the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);
const REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    thumbnails: ThumbnailCache,
    applied_theme: Option<ThemePreference>,
    styled: bool,
}

impl EguiApp {
    /// Build the app with production collaborators.
    pub fn new(settings: AppSettings) -> Self {
        Self::with_controller(EguiController::from_settings(settings))
    }

    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            thumbnails: ThumbnailCache::default(),
            applied_theme: None,
            styled: false,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if !self.styled {
            for theme in [egui::Theme::Light, egui::Theme::Dark] {
                ctx.style_mut_of(theme, |style| style::apply_visuals(&mut style.visuals));
            }
            self.styled = true;
        }
        let theme = self.controller.ui.theme;
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_theme(style::egui_theme(theme));
        self.applied_theme = Some(theme);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.tick();
        self.apply_theme(ctx);
        self.render_header(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_table(ui);
        });
        self.render_upload_dialog(ctx);
        self.render_toasts(ctx);
        if self.controller.needs_repaint() {
            ctx.request_repaint_after(REPAINT_INTERVAL);
        }
    }
}

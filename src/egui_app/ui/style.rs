use eframe::egui::{
    self, Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
};

use crate::egui_app::state::ToastTone;
use crate::theme_store::ThemePreference;

#[derive(Clone, Copy)]
pub struct Palette {
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub swatch: Color32,
}

pub fn palette() -> Palette {
    Palette {
        accent: Color32::from_rgb(59, 130, 246),
        success: Color32::from_rgb(22, 163, 74),
        warning: Color32::from_rgb(217, 119, 6),
        error: Color32::from_rgb(220, 38, 38),
        info: Color32::from_rgb(71, 85, 105),
        swatch: Color32::from_rgb(148, 163, 184),
    }
}

/// Map the stored preference onto egui's own setting.
pub fn egui_theme(preference: ThemePreference) -> egui::ThemePreference {
    match preference {
        ThemePreference::Light => egui::ThemePreference::Light,
        ThemePreference::Dark => egui::ThemePreference::Dark,
        ThemePreference::System => egui::ThemePreference::System,
    }
}

/// Shared tweaks applied on top of both light and dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.hyperlink_color = palette.accent;
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    for widgets in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widgets.corner_radius = CornerRadius::same(6);
    }
}

pub fn toast_fill(tone: ToastTone) -> Color32 {
    let palette = palette();
    match tone {
        ToastTone::Info => palette.info,
        ToastTone::Success => palette.success,
        ToastTone::Warning => palette.warning,
        ToastTone::Error => palette.error,
    }
}

pub fn modal_backdrop_color() -> Color32 {
    Color32::from_black_alpha(160)
}

pub fn drop_zone_stroke(hovered: bool) -> Stroke {
    let palette = palette();
    if hovered {
        Stroke::new(2.0, palette.accent)
    } else {
        Stroke::new(1.0, palette.swatch)
    }
}

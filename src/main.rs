#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based Reconocimiento UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use reconocimiento::config;
use reconocimiento::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use reconocimiento::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = config::load_for_startup();

    let viewport = egui::ViewportBuilder::default()
        .with_title("Reconocimiento")
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1200.0, 760.0))
        .with_drag_and_drop(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Reconocimiento",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new(settings)))),
    )?;
    Ok(())
}

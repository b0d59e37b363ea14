#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based diapredict UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use diapredict::egui_app::ui::EguiApp;
use diapredict::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(560.0, 640.0))
        .with_min_inner_size(egui::vec2(440.0, 520.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Prédiction du diabète",
        native_options,
        Box::new(move |_cc| Ok(Box::new(EguiApp::new()))),
    )?;
    Ok(())
}

// #![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;

use iris_gui::{IrisApp, WIDTH, HEIGHT};


fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WIDTH, HEIGHT])
            .with_min_inner_size([WIDTH, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Iris",
        options,
        Box::new(|cc| Box::new(IrisApp::new(cc)))
    )
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod automation;
mod core;
mod error;
mod hydrology;
mod phases;
mod settings;
mod tools;
mod ui;

use app::RainOnGridApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_title("HEC-RAS 2D Rain on Grid Model Automation"),
        ..Default::default()
    };

    eframe::run_native(
        "Rain on Grid Automation",
        options,
        Box::new(|_cc| Box::new(RainOnGridApp::default())),
    )
}

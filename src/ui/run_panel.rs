use eframe::egui;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunUiAction {
    RequestStart,
    ConfirmStart,
    CancelStart,
    Stop,
    None,
}

pub const CONFIRMATION_TEXT: &str = "The HEC-RAS Rain-on-Grid automation will now run. \
PLEASE CLOSE ALL OTHER FILES AND PROGRAMS BEFORE CLICKING 'OK' AND DO NOT USE YOUR MOUSE \
OR KEYBOARD THERE AFTER.";

pub fn render_run_panel(
    ui: &mut egui::Ui,
    is_running: bool,
    problems: Option<&str>,
    run_folder: Option<&Path>,
    abort_label: &str,
) -> RunUiAction {
    let mut action = RunUiAction::None;

    ui.heading("Run");
    ui.add_space(10.0);

    if let Some(folder) = run_folder {
        ui.horizontal(|ui| {
            ui.label("Run folder:");
            ui.label(egui::RichText::new(folder.display().to_string()).monospace());
        });
    }
    ui.add_space(10.0);

    if let Some(problems) = problems {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Input Error").strong());
            ui.colored_label(egui::Color32::from_rgb(255, 100, 100), problems);
        });
        ui.add_space(10.0);
    }

    ui.horizontal(|ui| {
        if is_running {
            if ui.button("⏹ Stop").clicked() {
                action = RunUiAction::Stop;
            }
        } else if ui.button("▶ Proceed").clicked() {
            action = RunUiAction::RequestStart;
        }
    });

    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(format!(
            "Press {} at any time to abort the run.",
            abort_label
        ))
        .small()
        .color(egui::Color32::GRAY),
    );

    action
}

/// Warning shown before the mouse and keyboard are taken over.
pub fn render_confirmation(ctx: &egui::Context) -> RunUiAction {
    let mut action = RunUiAction::None;
    egui::Window::new("User Input Received")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(380.0);
            ui.label(CONFIRMATION_TEXT);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    action = RunUiAction::ConfirmStart;
                }
                if ui.button("Cancel").clicked() {
                    action = RunUiAction::CancelStart;
                }
            });
        });
    action
}

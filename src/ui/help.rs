use crate::core::hotkey::hotkey_label;
use crate::phases::Phase;
use crate::settings::AppSettings;
use eframe::egui;

pub fn render_help(ui: &mut egui::Ui, settings: &AppSettings) {
    ui.heading("Quick start");
    ui.label("- Fill in every field on the Configuration tab. Paths can be typed or browsed.");
    ui.label("- Leave 'User Input for Precipitation Data' unticked to use an SCS Type III storm.");
    ui.label("- Open the Run tab and press Proceed, then close every other program.");
    ui.label("- Do not touch the mouse or keyboard while the run is driving HEC-RAS.");
    ui.label(format!(
        "- Press {} (or Stop) to abort the run.",
        hotkey_label(&settings.tools.abort_hotkey)
    ));

    ui.add_space(10.0);
    ui.heading("Phases");
    for (i, phase) in Phase::ALL.iter().enumerate() {
        ui.label(format!("{}. {}", i + 1, phase.title()));
    }

    ui.add_space(10.0);
    ui.heading("Manual checkpoints");
    ui.label("- Boundary Condition Setup: draw the boundary lines in RAS Mapper.");
    ui.label("- Fix all Meshes: resolve any mesh errors left after the automatic passes.");
    ui.label("- Friction Slope Calculation: enter the slope used for the Normal Depth boundary.");
    ui.label("- Computational Settings: adjust anything else in the plan before computing.");
    ui.label("- Cancel at any checkpoint ends the run; the app stays open.");

    ui.add_space(10.0);
    ui.heading("Notes");
    ui.label("- The screen layout assumes a 1920x1080 reference; other sizes are scaled.");
    ui.label("- Raise the step delay scale on slow machines.");
    ui.label("- Outputs land in '{date time} {area}' under the output folder.");
    ui.label("- Settings save automatically.");
}

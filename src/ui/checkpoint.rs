use crate::automation::checkpoint::PendingCheckpoint;
use eframe::egui;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckpointUiAction {
    Continue(Option<String>),
    Cancel,
    /// Notice closed.
    Dismiss,
    None,
}

/// Modal-style window for a checkpoint the run is blocked on.
///
/// `entry` is the edit buffer for checkpoints that take a value; `error` holds the last
/// rejection so it stays visible until the operator fixes the entry.
pub fn render_checkpoint(
    ctx: &egui::Context,
    pending: &PendingCheckpoint,
    entry: &mut String,
    error: &mut Option<String>,
) -> CheckpointUiAction {
    let checkpoint = pending.checkpoint;
    let mut action = CheckpointUiAction::None;

    egui::Window::new(checkpoint.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.label(checkpoint.message());
            ui.add_space(8.0);

            if checkpoint.wants_entry() {
                ui.horizontal(|ui| {
                    ui.label("Friction Slope:");
                    ui.add(egui::TextEdit::singleline(entry).desired_width(100.0));
                });
                if let Some(message) = error.as_deref() {
                    ui.colored_label(egui::Color32::from_rgb(255, 100, 100), message);
                }
                ui.add_space(4.0);
            }

            ui.horizontal(|ui| {
                if checkpoint.is_notice() {
                    if ui.button("Close").clicked() {
                        action = CheckpointUiAction::Dismiss;
                    }
                    return;
                }
                if ui.button("Continue").clicked() {
                    match checkpoint.validate_entry(entry) {
                        Ok(value) => {
                            *error = None;
                            action = CheckpointUiAction::Continue(value);
                        }
                        Err(message) => *error = Some(message),
                    }
                }
                if ui.button("Cancel").clicked() {
                    action = CheckpointUiAction::Cancel;
                }
            });
        });

    action
}

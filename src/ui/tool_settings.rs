use crate::core::hotkey::hotkey_key_label;
use crate::settings::{HotkeyKey, ToolSettings};
use eframe::egui;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSettingsAction {
    /// The abort hotkey needs re-registering.
    HotkeyChanged,
    Changed,
    None,
}

const DEFAULT_POLL_TIMEOUT_SECS: u64 = 3600;

fn hotkey_row(ui: &mut egui::Ui, settings: &mut ToolSettings) -> bool {
    let hotkey = &mut settings.abort_hotkey;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Abort hotkey:");
        changed |= ui.checkbox(&mut hotkey.modifiers.ctrl, "Ctrl").changed();
        changed |= ui.checkbox(&mut hotkey.modifiers.alt, "Alt").changed();
        changed |= ui.checkbox(&mut hotkey.modifiers.shift, "Shift").changed();

        let selected = hotkey.key.map(hotkey_key_label).unwrap_or("Disabled");
        egui::ComboBox::from_id_source("abort_hotkey_key")
            .selected_text(selected)
            .width(90.0)
            .show_ui(ui, |ui| {
                if ui.selectable_label(hotkey.key.is_none(), "Disabled").clicked() && hotkey.key.is_some() {
                    hotkey.key = None;
                    changed = true;
                }
                for key in HotkeyKey::ALL {
                    let is_selected = hotkey.key == Some(key);
                    if ui.selectable_label(is_selected, hotkey_key_label(key)).clicked() && !is_selected {
                        hotkey.key = Some(key);
                        changed = true;
                    }
                }
            });
    });
    changed
}

/// Machine-specific settings: abort key, where screenshots land, pacing and the COM server.
pub fn render_tool_settings(ui: &mut egui::Ui, settings: &mut ToolSettings, enabled: bool) -> ToolSettingsAction {
    let mut action = ToolSettingsAction::None;

    ui.add_enabled_ui(enabled, |ui| {
        ui.group(|ui| {
            ui.heading(egui::RichText::new("Tool Settings").size(14.0).strong());
            ui.add_space(4.0);

            if hotkey_row(ui, settings) {
                action = ToolSettingsAction::HotkeyChanged;
            }

            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label("Screenshots folder:");
                let mut folder = settings
                    .screenshot_folder
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                let hint = settings
                    .screenshot_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "not found".to_string());
                if ui
                    .add(egui::TextEdit::singleline(&mut folder).hint_text(hint).desired_width(300.0))
                    .changed()
                {
                    let trimmed = folder.trim();
                    settings.screenshot_folder = if trimmed.is_empty() {
                        None
                    } else {
                        Some(PathBuf::from(trimmed))
                    };
                    changed = true;
                }
            });

            ui.horizontal(|ui| {
                ui.label("HEC-RAS controller ProgID:");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut settings.ras_prog_id).desired_width(200.0))
                    .changed();
            });

            ui.horizontal(|ui| {
                ui.label("Step delay scale:");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut settings.step_delay_scale)
                            .clamp_range(0.5..=5.0)
                            .speed(0.05)
                            .suffix("x"),
                    )
                    .changed();
            });

            ui.horizontal(|ui| {
                let mut limited = settings.poll_timeout_secs.is_some();
                if ui.checkbox(&mut limited, "Give up on status polls after").changed() {
                    settings.poll_timeout_secs = limited.then_some(DEFAULT_POLL_TIMEOUT_SECS);
                    changed = true;
                }
                if let Some(secs) = settings.poll_timeout_secs.as_mut() {
                    changed |= ui
                        .add(egui::DragValue::new(secs).clamp_range(60..=86_400).suffix(" s"))
                        .changed();
                }
            });

            if changed && action == ToolSettingsAction::None {
                action = ToolSettingsAction::Changed;
            }
        });
    });

    action
}

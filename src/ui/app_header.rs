use eframe::egui;

pub enum HeaderAction {
    ToggleLog,
    Help,
    None,
}

/// Title, the current phase, and the utility buttons.
pub fn render_header(ui: &mut egui::Ui, is_running: bool, status: &str) -> HeaderAction {
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("HEC-RAS 2D Rain on Grid")
                    .color(egui::Color32::from_rgb(168, 226, 187))
                    .strong(),
            );
            let line = if is_running { status } else { "Idle" };
            ui.label(
                egui::RichText::new(line)
                    .color(egui::Color32::from_rgb(140, 140, 140))
                    .small(),
            );
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 0.0);
            let compact_size = egui::vec2(66.0, 26.0);
            let help_size = egui::vec2(26.0, 26.0);

            if ui
                .add_sized(
                    help_size,
                    egui::Button::new(egui::RichText::new("?").strong())
                        .rounding(egui::Rounding::same(13.0)),
                )
                .clicked()
            {
                action = HeaderAction::Help;
            }

            if ui
                .add_sized(compact_size, egui::Button::new("Log"))
                .clicked()
            {
                action = HeaderAction::ToggleLog;
            }
        });
    });

    action
}

use crate::core::run_log::RunLog;
use eframe::egui;

/// Which run log lines the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFilter {
    #[default]
    All,
    Warnings,
}

impl LogFilter {
    fn label(self) -> &'static str {
        match self {
            LogFilter::All => "All",
            LogFilter::Warnings => "Warnings",
        }
    }

    fn keeps(self, line: &str) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Warnings => RunLog::is_warning(line),
        }
    }
}

fn visible_lines(lines: &[String], filter: LogFilter) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| filter.keeps(line))
        .collect()
}

fn line_color(line: &str) -> egui::Color32 {
    if RunLog::is_warning(line) {
        egui::Color32::from_rgb(230, 180, 80)
    } else {
        egui::Color32::from_rgb(200, 200, 200)
    }
}

/// Right-hand run log. Follows the newest line while a run is active.
pub fn render_log_panel(
    ctx: &egui::Context,
    log_snapshot: &[String],
    is_running: bool,
    filter: &mut LogFilter,
) {
    let shown = visible_lines(log_snapshot, *filter);

    egui::SidePanel::right("run_log_panel")
        .resizable(true)
        .default_width(340.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(12, 12, 12))
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Run Log")
                                .strong()
                                .color(egui::Color32::LIGHT_GRAY),
                        );
                        for option in [LogFilter::All, LogFilter::Warnings] {
                            ui.selectable_value(filter, option, option.label());
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let copy = ui.add_enabled(!shown.is_empty(), egui::Button::new("Copy").small());
                            if copy.clicked() {
                                ui.output_mut(|o| o.copied_text = shown.join("\n"));
                            }
                            ui.label(
                                egui::RichText::new(format!("{}/{}", shown.len(), log_snapshot.len()))
                                    .small()
                                    .color(egui::Color32::DARK_GRAY),
                            );
                        });
                    });

                    ui.add_space(6.0);
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .stick_to_bottom(is_running)
                        .show(ui, |ui| {
                            if shown.is_empty() {
                                let empty = match filter {
                                    LogFilter::All => "No log entries yet.",
                                    LogFilter::Warnings => "No warnings.",
                                };
                                ui.label(
                                    egui::RichText::new(empty)
                                        .italics()
                                        .color(egui::Color32::DARK_GRAY),
                                );
                            }
                            for line in &shown {
                                ui.label(egui::RichText::new(*line).monospace().color(line_color(line)));
                            }
                        });
                });
        });
}

use crate::core::hotkey::AbortHotkey;
use crate::settings::AppSettings;
use crate::tools::r#trait::Tool;
use crate::tools::rain_on_grid::RainOnGridTool;
use crate::ui::app_header::{render_header, HeaderAction};
use crate::ui::config_form::{render_config_form, FormUiAction};
use crate::ui::help::render_help;
use crate::ui::log_panel::{render_log_panel, LogFilter};
use crate::ui::status::render_status;
use crate::ui::tool_settings::{render_tool_settings, ToolSettingsAction};
use eframe::egui;
use std::time::Duration;

const REPAINT_WHILE_RUNNING: Duration = Duration::from_millis(200);

pub struct RainOnGridApp {
    settings: AppSettings,
    rain_on_grid: RainOnGridTool,

    abort_hotkey: AbortHotkey,
    hotkey_error: Option<String>,

    // Tab state
    selected_tab: Tab,
    show_log: bool,
    log_filter: LogFilter,
    settings_dirty: bool,
}

impl Default for RainOnGridApp {
    fn default() -> Self {
        let settings = AppSettings::load();
        let (mut abort_hotkey, mut hotkey_error) = match AbortHotkey::new() {
            Ok(hotkey) => (hotkey, None),
            Err(e) => (AbortHotkey::disabled(), Some(e)),
        };
        if let Err(e) = abort_hotkey.register(&settings.tools.abort_hotkey) {
            hotkey_error = Some(e);
        }
        if let Some(e) = &hotkey_error {
            tracing::warn!("{}", e);
        }

        Self {
            settings,
            rain_on_grid: RainOnGridTool::default(),
            abort_hotkey,
            hotkey_error,
            selected_tab: Tab::default(),
            show_log: true,
            log_filter: LogFilter::default(),
            settings_dirty: false,
        }
    }
}

#[derive(PartialEq, Eq, Default)]
enum Tab {
    #[default]
    Configuration,
    Run,
    Help,
}

impl RainOnGridApp {
    fn reregister_hotkey(&mut self) {
        self.hotkey_error = self
            .abort_hotkey
            .register(&self.settings.tools.abort_hotkey)
            .err();
    }

    fn render_configuration(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.rain_on_grid.is_running();

        ui.heading("Configuration");
        ui.label(
            egui::RichText::new("Please enter all the required inputs.")
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.add_space(8.0);

        if render_config_form(ui, &mut self.settings.run, enabled) == FormUiAction::Changed {
            self.settings_dirty = true;
        }

        match render_tool_settings(ui, &mut self.settings.tools, enabled) {
            ToolSettingsAction::HotkeyChanged => {
                self.reregister_hotkey();
                self.settings_dirty = true;
            }
            ToolSettingsAction::Changed => self.settings_dirty = true,
            ToolSettingsAction::None => {}
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("Proceed ▶")).clicked() {
                self.selected_tab = Tab::Run;
            }
            if ui.add_enabled(enabled, egui::Button::new("Save")).clicked() {
                match self.settings.save() {
                    Ok(()) => self.settings_dirty = false,
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        });
    }
}

impl eframe::App for RainOnGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.abort_hotkey.was_pressed() && self.rain_on_grid.is_running() {
            self.rain_on_grid.stop();
        }

        let is_running = self.rain_on_grid.is_running();
        let status = self.rain_on_grid.get_status();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            match render_header(ui, is_running, &status) {
                HeaderAction::ToggleLog => self.show_log = !self.show_log,
                HeaderAction::Help => self.selected_tab = Tab::Help,
                HeaderAction::None => {}
            }
            ui.add_space(4.0);
        });

        if self.show_log {
            render_log_panel(
                ctx,
                &self.rain_on_grid.log_snapshot(),
                is_running,
                &mut self.log_filter,
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Tab navigation bar
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.selected_tab, Tab::Configuration, "Configuration");
                ui.selectable_value(&mut self.selected_tab, Tab::Run, self.rain_on_grid.get_name());
                ui.selectable_value(&mut self.selected_tab, Tab::Help, "Help");
            });
            ui.separator();
            render_status(ui, &status, self.hotkey_error.as_deref());
            ui.separator();

            // Content area
            egui::ScrollArea::vertical().show(ui, |ui| match self.selected_tab {
                Tab::Configuration => self.render_configuration(ui),
                Tab::Run => self.rain_on_grid.update(ctx, ui, &mut self.settings),
                Tab::Help => render_help(ui, &self.settings),
            });
        });

        if self.rain_on_grid.render_windows(ctx, &self.settings) {
            self.settings.auto_save();
            self.settings_dirty = false;
        }

        if is_running {
            ctx.request_repaint_after(REPAINT_WHILE_RUNNING);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.rain_on_grid.stop();
        if self.settings_dirty {
            self.settings.auto_save();
        }
    }
}

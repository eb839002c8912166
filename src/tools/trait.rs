// Shared trait for automation tools
use crate::settings::AppSettings;
use eframe::egui;

/// Common interface of a tool the app hosts in a tab
pub trait Tool {
    /// Stop the tool (Stop button or abort hotkey)
    fn stop(&mut self);

    /// Check if the tool is currently running
    fn is_running(&self) -> bool;

    /// Get current status message
    fn get_status(&self) -> String;

    /// Start the tool with the given settings
    fn start(&mut self, settings: &AppSettings);

    /// Update loop for UI and logic
    fn update(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, settings: &mut AppSettings);

    /// Get tool name for tab identification
    fn get_name(&self) -> &str;
}

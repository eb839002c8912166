pub mod app_header;
pub mod checkpoint;
pub mod config_form;
pub mod help;
pub mod log_panel;
pub mod run_panel;
pub mod status;
pub mod tool_settings;

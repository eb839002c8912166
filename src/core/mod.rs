#[cfg(windows)]
pub mod com;
pub mod coords;
pub mod desktop;
pub mod hotkey;
pub mod input;
pub mod run_log;
pub mod window;
pub mod worker;

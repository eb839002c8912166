use crate::core::coords::Point;
use crate::error::Result;
use std::time::Duration;

/// Keys the automation presses. Names follow the key table used by the input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Up,
    Down,
    Ctrl,
    Alt,
    Shift,
    Win,
    F4,
    A,
    C,
    S,
}

impl Key {
    pub fn name(self) -> &'static str {
        match self {
            Key::Enter => "enter",
            Key::Backspace => "backspace",
            Key::Up => "up",
            Key::Down => "down",
            Key::Ctrl => "ctrl",
            Key::Alt => "alt",
            Key::Shift => "shift",
            Key::Win => "win",
            Key::F4 => "f4",
            Key::A => "a",
            Key::C => "c",
            Key::S => "s",
        }
    }
}

/// The control surface of the machine the model application runs on.
///
/// Points are in reference-screen pixels; implementations scale them to the real screen.
pub trait Desktop {
    /// Launch (or attach to) the model application through its COM controller and show it.
    fn show_application(&mut self, prog_id: &str) -> Result<()>;

    fn move_to(&mut self, point: Point) -> Result<()>;

    fn left_click(&mut self, point: Point) -> Result<()>;

    fn right_click(&mut self, point: Point) -> Result<()>;

    /// Press the left button at the current position, move to `to` and release.
    fn drag_to(&mut self, to: Point, seconds: f32) -> Result<()>;

    fn type_text(&mut self, text: &str) -> Result<()>;

    fn press(&mut self, key: Key) -> Result<()>;

    /// Hold every key but the last, tap the last one.
    fn chord(&mut self, keys: &[Key]) -> Result<()>;

    fn clipboard_text(&mut self) -> Result<String>;

    /// `None` when no foreground window could be inspected.
    fn foreground_is_maximized(&mut self) -> Option<bool>;

    fn pause(&mut self, duration: Duration);
}

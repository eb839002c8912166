use crate::core::coords::Point;
use crate::core::desktop::Key;
use std::time::Duration;

/// Presses that reliably reach the top of any HEC-RAS interval combo.
pub const COMBO_RESET_PRESSES: u32 = 100;

/// Seconds as typed in the scripts, rounded to whole milliseconds. Negative means none.
pub fn whole_millis(seconds: f32) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((f64::from(seconds) * 1000.0).round() as u64)
}

/// One scripted interaction with the desktop.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Progress message for the status line and log.
    Note(String),
    Wait(Duration),
    MoveTo(Point),
    Click(Point),
    RightClick(Point),
    /// Drag from the current cursor position.
    Drag { to: Point, seconds: f32 },
    Type(String),
    Press { key: Key, times: u32 },
    Chord(Vec<Key>),
}

/// Ordered list of steps with builder helpers for the common HEC-RAS idioms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn note(mut self, message: impl Into<String>) -> Self {
        self.steps.push(Step::Note(message.into()));
        self
    }

    pub fn wait_secs(mut self, seconds: f32) -> Self {
        self.steps.push(Step::Wait(whole_millis(seconds)));
        self
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.steps.push(Step::MoveTo(point));
        self
    }

    pub fn click(mut self, point: Point) -> Self {
        self.steps.push(Step::Click(point));
        self
    }

    /// Click, then wait.
    pub fn click_wait(self, point: Point, seconds: f32) -> Self {
        self.click(point).wait_secs(seconds)
    }

    pub fn right_click(mut self, point: Point) -> Self {
        self.steps.push(Step::RightClick(point));
        self
    }

    pub fn drag(mut self, from: Point, to: Point, seconds: f32) -> Self {
        self.steps.push(Step::MoveTo(from));
        self.steps.push(Step::Drag { to, seconds });
        self
    }

    pub fn type_text(mut self, text: impl Into<String>) -> Self {
        self.steps.push(Step::Type(text.into()));
        self
    }

    pub fn press(self, key: Key) -> Self {
        self.press_times(key, 1)
    }

    pub fn press_times(mut self, key: Key, times: u32) -> Self {
        if times > 0 {
            self.steps.push(Step::Press { key, times });
        }
        self
    }

    pub fn chord(mut self, keys: &[Key]) -> Self {
        self.steps.push(Step::Chord(keys.to_vec()));
        self
    }

    /// Pick entry `index` of the focused combo: back to the top, then down.
    pub fn select_combo(self, index: usize) -> Self {
        let script = self
            .press_times(Key::Up, COMBO_RESET_PRESSES)
            .press_times(Key::Down, index as u32);
        if index > 0 {
            script.wait_secs(1.0).press(Key::Enter)
        } else {
            script.press(Key::Enter)
        }
    }

    /// Open the combo at `point` and pick entry `index`.
    pub fn combo_at(self, point: Point, index: usize) -> Self {
        self.click_wait(point, 1.0).select_combo(index)
    }

    pub fn save(self) -> Self {
        self.chord(&[Key::Ctrl, Key::S])
    }

    pub fn close_window(self) -> Self {
        self.chord(&[Key::Alt, Key::F4])
    }

    pub fn then(mut self, other: Script) -> Self {
        self.steps.extend(other.steps);
        self
    }

}

impl IntoIterator for Script {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coords::pt;

    #[test]
    fn test_select_combo_goes_to_top_first() {
        let script = Script::new().combo_at(pt(1096, 371), 15);
        assert_eq!(
            script.steps(),
            &[
                Step::Click(pt(1096, 371)),
                Step::Wait(Duration::from_secs(1)),
                Step::Press { key: Key::Up, times: 100 },
                Step::Press { key: Key::Down, times: 15 },
                Step::Wait(Duration::from_secs(1)),
                Step::Press { key: Key::Enter, times: 1 },
            ]
        );
    }

    #[test]
    fn test_first_entry_needs_no_down_presses() {
        let script = Script::new().select_combo(0);
        assert_eq!(script.steps().len(), 2);
        assert!(!script
            .steps()
            .iter()
            .any(|s| matches!(s, Step::Press { key: Key::Down, .. })));
    }

    #[test]
    fn test_fractional_waits_are_whole_milliseconds() {
        let script = Script::new()
            .click_wait(pt(1, 1), 1.5)
            .wait_secs(0.1)
            .then(Script::new().wait_secs(-2.0));
        assert_eq!(
            script.steps(),
            &[
                Step::Click(pt(1, 1)),
                Step::Wait(Duration::from_millis(1500)),
                Step::Wait(Duration::from_millis(100)),
                Step::Wait(Duration::ZERO),
            ]
        );
    }
}

use crate::core::desktop::Desktop;
use crate::error::Result;

#[cfg(windows)]
pub use native::AutoGuiDesktop;

/// Desktop backed by the real mouse, keyboard and clipboard.
#[cfg(windows)]
pub fn native_desktop() -> Result<Box<dyn Desktop>> {
    Ok(Box::new(AutoGuiDesktop::new()?))
}

#[cfg(not(windows))]
pub fn native_desktop() -> Result<Box<dyn Desktop>> {
    Err(crate::error::AutomationError::Unsupported(
        "HEC-RAS desktop automation requires Windows".to_string(),
    ))
}

#[cfg(windows)]
mod native {
    use crate::core::com::RasController;
    use crate::core::coords::{drag_offset, scale_point, Point, REFERENCE_SCREEN};
    use crate::core::desktop::{Desktop, Key};
    use crate::core::window::foreground_is_maximized;
    use crate::error::{AutomationError, Result};
    use rustautogui::RustAutoGui;
    use std::thread;
    use std::time::Duration;

    pub struct AutoGuiDesktop {
        gui: RustAutoGui,
        screen: (u32, u32),
        controller: Option<RasController>,
    }

    impl AutoGuiDesktop {
        pub fn new() -> Result<Self> {
            let mut gui = RustAutoGui::new(false)
                .map_err(|e| AutomationError::Desktop(format!("Failed to initialize RustAutoGui: {}", e)))?;
            let (w, h) = gui.get_screen_size();
            let screen = if w > 0 && h > 0 {
                (w as u32, h as u32)
            } else {
                REFERENCE_SCREEN
            };
            if screen != REFERENCE_SCREEN {
                tracing::warn!(
                    "Screen is {}x{}, clicks are scaled from {}x{}",
                    screen.0,
                    screen.1,
                    REFERENCE_SCREEN.0,
                    REFERENCE_SCREEN.1
                );
            }
            Ok(Self {
                gui,
                screen,
                controller: None,
            })
        }

        fn to_screen(&self, point: Point) -> Point {
            scale_point(point, REFERENCE_SCREEN, self.screen)
        }

        /// Two attempts with a short back-off, like a hand that missed the first time.
        fn click_with(&mut self, point: Point, right: bool) -> Result<()> {
            let target = self.to_screen(point);
            let mut last_error = String::new();
            for attempt in 0..2 {
                if let Err(e) = self.gui.move_mouse_to_pos(target.x, target.y, 0.0) {
                    last_error = format!("{}", e);
                    if attempt == 0 {
                        thread::sleep(Duration::from_millis(50));
                    }
                    continue;
                }

                // Short sleep to stabilize cursor
                thread::sleep(Duration::from_millis(20));

                let clicked = if right {
                    self.gui.right_click()
                } else {
                    self.gui.left_click()
                };
                match clicked {
                    Ok(()) => return Ok(()),
                    Err(e) => {
                        last_error = format!("{}", e);
                        if attempt == 0 {
                            thread::sleep(Duration::from_millis(50));
                        }
                    }
                }
            }
            Err(AutomationError::Desktop(format!(
                "Click at ({}, {}) failed: {}",
                point.x, point.y, last_error
            )))
        }
    }

    impl Desktop for AutoGuiDesktop {
        fn show_application(&mut self, prog_id: &str) -> Result<()> {
            let controller = RasController::connect(prog_id)?;
            controller.show()?;
            // Dropping the controller may close the application, keep it for the run.
            self.controller = Some(controller);
            Ok(())
        }

        fn move_to(&mut self, point: Point) -> Result<()> {
            let target = self.to_screen(point);
            self.gui
                .move_mouse_to_pos(target.x, target.y, 0.0)
                .map_err(|e| AutomationError::Desktop(format!("Move failed: {}", e)))
        }

        fn left_click(&mut self, point: Point) -> Result<()> {
            self.click_with(point, false)
        }

        fn right_click(&mut self, point: Point) -> Result<()> {
            self.click_with(point, true)
        }

        fn drag_to(&mut self, to: Point, seconds: f32) -> Result<()> {
            let target = self.to_screen(to);
            // drag_mouse moves by an offset from the cursor, not to an absolute point.
            let cursor = self
                .gui
                .get_mouse_position()
                .map_err(|e| AutomationError::Desktop(format!("Cursor position unavailable: {}", e)))?;
            let (dx, dy) = drag_offset(cursor, target);
            self.gui
                .drag_mouse(dx, dy, seconds)
                .map_err(|e| AutomationError::Desktop(format!("Drag failed: {}", e)))
        }

        fn type_text(&mut self, text: &str) -> Result<()> {
            self.gui
                .keyboard_input(text)
                .map_err(|e| AutomationError::Desktop(format!("Keyboard error: {}", e)))
        }

        fn press(&mut self, key: Key) -> Result<()> {
            self.gui
                .keyboard_command(key.name())
                .map_err(|e| AutomationError::Desktop(format!("Key {} failed: {}", key.name(), e)))
        }

        fn chord(&mut self, keys: &[Key]) -> Result<()> {
            let result = match keys {
                [only] => self.gui.keyboard_command(only.name()),
                [first, second] => self.gui.keyboard_multi_key(first.name(), second.name(), None),
                [first, second, third] => {
                    self.gui
                        .keyboard_multi_key(first.name(), second.name(), Some(third.name()))
                }
                _ => {
                    return Err(AutomationError::Desktop(format!(
                        "Unsupported key chord of {} keys",
                        keys.len()
                    )))
                }
            };
            result.map_err(|e| AutomationError::Desktop(format!("Key chord failed: {}", e)))
        }

        fn clipboard_text(&mut self) -> Result<String> {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| AutomationError::Clipboard(e.to_string()))?;
            clipboard
                .get_text()
                .map_err(|e| AutomationError::Clipboard(e.to_string()))
        }

        fn foreground_is_maximized(&mut self) -> Option<bool> {
            foreground_is_maximized()
        }

        fn pause(&mut self, duration: Duration) {
            if !duration.is_zero() {
                thread::sleep(duration);
            }
        }
    }
}

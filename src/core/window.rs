#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowPlacement, SW_SHOWMAXIMIZED, WINDOWPLACEMENT,
};

/// Whether the window that currently has focus is maximized.
#[cfg(windows)]
pub fn foreground_is_maximized() -> Option<bool> {
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.0 == 0 {
            return None;
        }

        let mut placement = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        if GetWindowPlacement(hwnd, &mut placement).is_ok() {
            Some(placement.showCmd == SW_SHOWMAXIMIZED.0 as u32)
        } else {
            None
        }
    }
}

#[cfg(not(windows))]
pub fn foreground_is_maximized() -> Option<bool> {
    None
}

use crate::settings::{HotkeyConfig, HotkeyKey, HotkeyModifiers};
use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};

pub fn hotkey_label(config: &HotkeyConfig) -> String {
    let Some(key) = config.key else {
        return "Disabled".to_string();
    };

    let mut parts: Vec<&'static str> = Vec::new();
    if config.modifiers.ctrl {
        parts.push("Ctrl");
    }
    if config.modifiers.alt {
        parts.push("Alt");
    }
    if config.modifiers.shift {
        parts.push("Shift");
    }
    parts.push(hotkey_key_label(key));
    parts.join("+")
}

pub fn hotkey_from_config(config: &HotkeyConfig) -> Option<HotKey> {
    let key = config.key?;
    let code = hotkey_key_to_code(key);
    let modifiers = hotkey_modifiers_to_code(config.modifiers);
    if modifiers.is_empty() {
        Some(HotKey::new(None, code))
    } else {
        Some(HotKey::new(Some(modifiers), code))
    }
}

pub fn hotkey_key_label(key: HotkeyKey) -> &'static str {
    match key {
        HotkeyKey::F1 => "F1",
        HotkeyKey::F2 => "F2",
        HotkeyKey::F3 => "F3",
        HotkeyKey::F4 => "F4",
        HotkeyKey::F5 => "F5",
        HotkeyKey::F6 => "F6",
        HotkeyKey::F7 => "F7",
        HotkeyKey::F8 => "F8",
        HotkeyKey::F9 => "F9",
        HotkeyKey::F10 => "F10",
        HotkeyKey::F11 => "F11",
        HotkeyKey::F12 => "F12",
        HotkeyKey::Escape => "Esc",
        HotkeyKey::Pause => "Pause",
        HotkeyKey::Insert => "Insert",
        HotkeyKey::Home => "Home",
        HotkeyKey::End => "End",
    }
}

fn hotkey_key_to_code(key: HotkeyKey) -> Code {
    match key {
        HotkeyKey::F1 => Code::F1,
        HotkeyKey::F2 => Code::F2,
        HotkeyKey::F3 => Code::F3,
        HotkeyKey::F4 => Code::F4,
        HotkeyKey::F5 => Code::F5,
        HotkeyKey::F6 => Code::F6,
        HotkeyKey::F7 => Code::F7,
        HotkeyKey::F8 => Code::F8,
        HotkeyKey::F9 => Code::F9,
        HotkeyKey::F10 => Code::F10,
        HotkeyKey::F11 => Code::F11,
        HotkeyKey::F12 => Code::F12,
        HotkeyKey::Escape => Code::Escape,
        HotkeyKey::Pause => Code::Pause,
        HotkeyKey::Insert => Code::Insert,
        HotkeyKey::Home => Code::Home,
        HotkeyKey::End => Code::End,
    }
}

fn hotkey_modifiers_to_code(modifiers: HotkeyModifiers) -> Modifiers {
    let mut mods = Modifiers::empty();
    if modifiers.ctrl {
        mods |= Modifiers::CONTROL;
    }
    if modifiers.alt {
        mods |= Modifiers::ALT;
    }
    if modifiers.shift {
        mods |= Modifiers::SHIFT;
    }
    mods
}

/// System-wide hotkey that aborts a running automation even while HEC-RAS has focus.
pub struct AbortHotkey {
    manager: Option<GlobalHotKeyManager>,
    registered: Option<HotKey>,
}

impl AbortHotkey {
    pub fn new() -> Result<Self, String> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| format!("Failed to create hotkey manager: {}", e))?;
        Ok(Self {
            manager: Some(manager),
            registered: None,
        })
    }

    /// Placeholder used when the platform refuses a hotkey manager.
    pub fn disabled() -> Self {
        Self {
            manager: None,
            registered: None,
        }
    }

    /// Replace the current registration. `Ok(false)` when the hotkey is disabled.
    pub fn register(&mut self, config: &HotkeyConfig) -> Result<bool, String> {
        let Some(manager) = self.manager.as_ref() else {
            return Ok(false);
        };
        if let Some(old) = self.registered.take() {
            let _ = manager.unregister(old);
        }
        let Some(hotkey) = hotkey_from_config(config) else {
            return Ok(false);
        };
        manager
            .register(hotkey)
            .map_err(|e| format!("{} could not be registered: {}", hotkey_label(config), e))?;
        self.registered = Some(hotkey);
        Ok(true)
    }

    /// Drain pending hotkey events; true if the abort key was pressed since the last call.
    pub fn was_pressed(&self) -> bool {
        let Some(hotkey) = self.registered else {
            return false;
        };
        let mut pressed = false;
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.id == hotkey.id() && event.state == HotKeyState::Pressed {
                pressed = true;
            }
        }
        pressed
    }
}

//! User settings stored as JSON under the cache directory.
//!
//! Every section is `#[serde(default)]`, so a partial file only overrides what it names.

use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::dock::ReorderPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".zdock";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub reorder: ReorderPolicy,
    pub animation: AnimationSettings,
    pub drag: DragSettings,
    pub metrics: MetricsSettings,
    pub keybindings: KeybindingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Slide played by dock slots after a drop. 0 disables it.
    pub slide_ms: u64,
    /// Tile color/size transitions.
    pub tile_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            slide_ms: 500,
            tile_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Cells the pointer must travel before a press becomes a drag.
    pub threshold: u16,
    /// Hold time before a press may turn into a drag.
    pub long_press_ms: u64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            threshold: 2,
            long_press_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub unit_width: u16,
    pub unit_height: u16,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            unit_width: 8,
            unit_height: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingSettings {
    pub quit: Vec<String>,
    /// Cancels an active drag; quits when nothing is being dragged.
    pub cancel: Vec<String>,
}

impl Default for KeybindingSettings {
    fn default() -> Self {
        Self {
            quit: vec!["q".to_string(), "ctrl+c".to_string()],
            cancel: vec!["esc".to_string()],
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io { path: PathBuf, source: io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read settings {}: {source}", path.display())
            }
            SettingsError::Parse { path, source } => {
                write!(f, "invalid settings {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse { source, .. } => Some(source),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed quit keys. Entries that do not parse are skipped with a warning.
    pub fn quit_keys(&self) -> Vec<Key> {
        parse_keybindings(&self.keybindings.quit)
    }

    pub fn cancel_keys(&self) -> Vec<Key> {
        parse_keybindings(&self.keybindings.cancel)
    }
}

fn parse_keybindings(values: &[String]) -> Vec<Key> {
    values
        .iter()
        .filter_map(|v| {
            let key = parse_keybinding(v);
            if key.is_none() {
                tracing::warn!(binding = %v, "ignoring unparsable keybinding");
            }
            key
        })
        .collect()
}

/// Write the default settings to `path` unless a file already exists.
pub fn ensure_settings_file(path: &Path) -> io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&Settings::default()).map_err(io::Error::other)?;
    std::fs::write(path, content)
}

pub fn default_settings_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// `<cache dir>/.zdock`, home of the settings file and the logs.
pub fn app_dir() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(APP_DIR))
}

/// Parse bindings like `ctrl+c`, `Esc` or `shift+tab`. Uppercase letters imply shift.
pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "meta" | "cmd" => modifiers |= KeyModifiers::SUPER,
            _ if key_part.is_some() => return None,
            _ => key_part = Some(part),
        }
    }
    let code = parse_key_code(key_part?)?;
    Some(Key::from(crate::core::event::KeyEvent::press(code, modifiers)))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let lower = value.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ if lower.len() > 1 && lower.starts_with('f') => KeyCode::F(lower[1..].parse().ok()?),
        _ => {
            let mut chars = value.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };
    Some(code)
}

fn cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Library/Caches"))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var_os("LOCALAPPDATA")
            .or_else(|| std::env::var_os("APPDATA"))
            .map(PathBuf::from)
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        std::env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;

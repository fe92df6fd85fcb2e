//! Colors used by the shell and the icon tiles.

use crate::dock::DockStyle;
use crate::ui::core::id::stable_hash;
use crate::ui::core::style::Color;

/// Material Design primary (500) swatches.
pub const MATERIAL_PRIMARIES: [Color; 18] = [
    Color::hex(0xF44336), // red
    Color::hex(0xE91E63), // pink
    Color::hex(0x9C27B0), // purple
    Color::hex(0x673AB7), // deep purple
    Color::hex(0x3F51B5), // indigo
    Color::hex(0x2196F3), // blue
    Color::hex(0x03A9F4), // light blue
    Color::hex(0x00BCD4), // cyan
    Color::hex(0x009688), // teal
    Color::hex(0x4CAF50), // green
    Color::hex(0x8BC34A), // light green
    Color::hex(0xCDDC39), // lime
    Color::hex(0xFFEB3B), // yellow
    Color::hex(0xFFC107), // amber
    Color::hex(0xFF9800), // orange
    Color::hex(0xFF5722), // deep orange
    Color::hex(0x795548), // brown
    Color::hex(0x607D8B), // blue grey
];

/// Deterministic swatch for `name`.
pub fn swatch_for(name: &str) -> Color {
    MATERIAL_PRIMARIES[(stable_hash(name) % MATERIAL_PRIMARIES.len() as u64) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellTheme {
    pub background: Color,
    pub hint_fg: Color,
    pub dock: DockStyle,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            background: Color::hex(0x121212),
            hint_fg: Color::hex(0x757575),
            dock: DockStyle::default(),
        }
    }
}

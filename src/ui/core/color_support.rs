//! Terminal color capability detection and RGB downsampling.
//!
//! Widgets and animations work in RGB; the terminal backend maps every color through
//! [`map_color`] right before it reaches the screen.

use super::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalColorSupport {
    #[default]
    TrueColor,
    Ansi256,
    Ansi16,
}

impl TerminalColorSupport {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Some(Self::TrueColor),
            "256" | "ansi256" => Some(Self::Ansi256),
            "16" | "ansi16" | "basic" => Some(Self::Ansi16),
            _ => None,
        }
    }
}

pub const OVERRIDE_ENV: &str = "ZDOCK_COLOR_SUPPORT";

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    detect_from(
        std::env::var(OVERRIDE_ENV).ok().as_deref(),
        &std::env::var("COLORTERM").unwrap_or_default(),
        &std::env::var("TERM").unwrap_or_default(),
    )
}

/// Pure form of [`detect_terminal_color_support`]: an explicit override wins, then `COLORTERM`
/// and `TERM` hints, then 16 colors.
pub fn detect_from(overridden: Option<&str>, colorterm: &str, term: &str) -> TerminalColorSupport {
    if let Some(support) = overridden.and_then(TerminalColorSupport::parse) {
        return support;
    }

    let colorterm = colorterm.to_ascii_lowercase();
    let term = term.to_ascii_lowercase();
    let truecolor = ["truecolor", "24bit", "direct"];
    if truecolor
        .iter()
        .any(|hint| colorterm.contains(hint) || term.contains(hint))
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

pub fn map_color(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, c) | (_, c @ Color::Reset) => c,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(16..=255, (r, g, b)))
        }
        (TerminalColorSupport::Ansi256, c @ Color::Indexed(_)) => c,
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(0..=15, (r, g, b)))
        }
        (TerminalColorSupport::Ansi16, c @ Color::Indexed(0..=15)) => c,
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            Color::Indexed(nearest_index(0..=15, ansi256_to_rgb(i)))
        }
    }
}

// ANSI 0..15 depend on the terminal theme, so 256-color output only picks from the
// standardized 16..=255 range.
fn nearest_index(range: std::ops::RangeInclusive<u8>, rgb: (u8, u8, u8)) -> u8 {
    let start = *range.start();
    range
        .min_by_key(|&i| distance_sq(rgb, ansi256_to_rgb(i)))
        .unwrap_or(start)
}

pub fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI16_RGB[index as usize],
        16..=231 => {
            const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
            let offset = index - 16;
            (
                LEVELS[(offset / 36) as usize],
                LEVELS[((offset / 6) % 6) as usize],
                LEVELS[(offset % 6) as usize],
            )
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

fn distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/color_support.rs"]
mod tests;

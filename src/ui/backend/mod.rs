//! Rendering backends.
//!
//! Everything above this module speaks [`PaintCmd`]; only the terminal backend touches `ratatui`.
//! Both backends replay commands onto a [`CellGrid`] with the same rules, so what the headless
//! backend shows in tests is what the terminal shows.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

/// A rectangle of terminal cells.
pub(crate) trait CellGrid {
    fn area(&self) -> Rect;

    /// Replace the symbol at `(x, y)` and patch `style` onto the cell, keeping whatever the style
    /// leaves unset. Writes outside [`CellGrid::area`] are ignored.
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

pub(crate) fn replay(grid: &mut impl CellGrid, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::FillRect { rect, style } => fill_rect(grid, *rect, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => draw_text(grid, *pos, text, *style, *clip),
            PaintCmd::Border { rect, style } => draw_border(grid, *rect, *style),
        }
    }
}

pub(crate) fn fill_rect(grid: &mut impl CellGrid, rect: Rect, style: Style) {
    let rect = rect.intersect(grid.area());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            grid.put(x, y, " ", style);
        }
    }
}

pub(crate) fn draw_text(
    grid: &mut impl CellGrid,
    pos: Pos,
    text: &str,
    style: Style,
    clip: Option<Rect>,
) {
    let area = grid.area();
    let clip = clip.unwrap_or(area).intersect(area);
    if pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        // A wide glyph is drawn whole or not at all.
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            grid.put(x, pos.y, g, style);
            for dx in 1..w {
                grid.put(x + dx, pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

const TOP_LEFT: &str = "╭";
const TOP_RIGHT: &str = "╮";
const BOTTOM_LEFT: &str = "╰";
const BOTTOM_RIGHT: &str = "╯";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

pub(crate) fn draw_border(grid: &mut impl CellGrid, rect: Rect, style: Style) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    grid.put(rect.x, rect.y, TOP_LEFT, style);
    grid.put(right, rect.y, TOP_RIGHT, style);
    grid.put(rect.x, bottom, BOTTOM_LEFT, style);
    grid.put(right, bottom, BOTTOM_RIGHT, style);
    for x in rect.x + 1..right {
        grid.put(x, rect.y, HORIZONTAL, style);
        grid.put(x, bottom, HORIZONTAL, style);
    }
    for y in rect.y + 1..bottom {
        grid.put(rect.x, y, VERTICAL, style);
        grid.put(right, y, VERTICAL, style);
    }
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

use super::icon::Icon;
use super::theme::swatch_for;
use crate::dock::TILE_UNITS;
use crate::ui::core::anim::Easing;
use crate::ui::core::color;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::layout::CellMetrics;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::widget::{Ui, Widget};
use std::time::Duration;

pub const TILE_ANIMATION: Duration = Duration::from_millis(300);

/// HSL lightness points added to the fill while the pointer rests on the tile's slot.
pub const HOVER_LIGHTEN: u8 = 10;

/// A rounded, colored tile with the icon's glyph centered in it.
///
/// Stateless: the fill and size it shows are animated through [`Ui::anim`], keyed by the scope
/// id the tile is drawn under, so a tile whose content changes blends into its new color and a
/// hovered tile eases toward a lighter shade.
#[derive(Debug, Clone, Copy)]
pub struct IconTile {
    icon: Icon,
    metrics: CellMetrics,
    duration: Duration,
}

impl IconTile {
    pub fn new(icon: Icon, metrics: CellMetrics) -> Self {
        Self {
            icon,
            metrics,
            duration: TILE_ANIMATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn fill(&self) -> Color {
        swatch_for(self.icon.name())
    }

    /// Smallest tile, in cells. Never larger than `avail`.
    fn size(&self, avail: Rect) -> (u16, u16) {
        let w = self.metrics.cols(TILE_UNITS).min(avail.w);
        let h = self.metrics.rows(TILE_UNITS).min(avail.h);
        (w, h)
    }
}

impl Widget for IconTile {
    fn ui(&mut self, ui: &mut Ui) {
        let (target_w, target_h) = self.size(ui.rect);
        let easing = Easing::EaseInOut;
        let w = ui.anim.animate_value(
            ui.id.with("w"),
            target_w as f32,
            self.duration,
            easing,
            ui.now,
        );
        let h = ui.anim.animate_value(
            ui.id.with("h"),
            target_h as f32,
            self.duration,
            easing,
            ui.now,
        );
        let target = if ui.is_hovered() {
            color::lighten(self.fill(), HOVER_LIGHTEN)
        } else {
            self.fill()
        };
        let fill = ui
            .anim
            .animate_color(ui.id.with("fill"), target, self.duration, easing, ui.now);

        let tile = ui.rect.centered(w.round() as u16, h.round() as u16);
        paint_rounded(ui.painter, tile, fill);

        if !tile.is_empty() {
            let glyph = Style::default()
                .fg(color::contrasting(fill))
                .add_mod(Mod::BOLD);
            ui.painter
                .text(tile.center(), self.icon.glyph().to_string(), glyph);
        }
    }
}

/// Fill `r`, replacing the four corner cells with quadrant blocks so the tile reads as rounded.
fn paint_rounded(painter: &mut Painter, r: Rect, fill: Color) {
    let bg = Style::default().bg(fill);
    if r.w < 2 || r.h < 2 {
        painter.fill_rect(r, bg);
        return;
    }

    let right = r.right() - 1;
    let bottom = r.bottom() - 1;
    painter.fill_rect(Rect::new(r.x + 1, r.y, r.w - 2, 1), bg);
    painter.fill_rect(Rect::new(r.x, r.y + 1, r.w, r.h - 2), bg);
    painter.fill_rect(Rect::new(r.x + 1, bottom, r.w - 2, 1), bg);

    let corner = Style::default().fg(fill);
    painter.text(Pos::new(r.x, r.y), "▗", corner);
    painter.text(Pos::new(right, r.y), "▖", corner);
    painter.text(Pos::new(r.x, bottom), "▝", corner);
    painter.text(Pos::new(right, bottom), "▘", corner);
}

#[cfg(test)]
#[path = "../../tests/unit/app/tile.rs"]
mod tests;

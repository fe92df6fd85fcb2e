use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank every cell of `rect` and patch `style` onto it.
    FillRect { rect: Rect, style: Style },
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Option<Rect>,
    },
    /// One-cell frame with rounded corners along the edge of `rect`.
    Border { rect: Rect, style: Style },
}

/// Records paint commands for one frame.
///
/// An optional clip rect (see [`Painter::set_clip`]) is applied as commands are recorded, so
/// backends never see geometry outside of it. Borders that would be cut by the clip are dropped
/// rather than drawn with missing corners.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
    clip: Option<Rect>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
        self.clip = None;
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Replace the clip rect, returning the previous one so callers can restore it.
    pub fn set_clip(&mut self, clip: Option<Rect>) -> Option<Rect> {
        std::mem::replace(&mut self.clip, clip)
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        let rect = match self.clip {
            Some(clip) => rect.intersect(clip),
            None => rect,
        };
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::FillRect { rect, style });
        }
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        if self.clip.is_some_and(|clip| clip.is_empty()) {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip: self.clip,
        });
    }

    pub fn border(&mut self, rect: Rect, style: Style) {
        if rect.w < 2 || rect.h < 2 || self.clip.is_some_and(|clip| !clip.contains_rect(rect)) {
            return;
        }
        self.cmds.push(PaintCmd::Border { rect, style });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;

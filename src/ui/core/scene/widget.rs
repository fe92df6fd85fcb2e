use super::anim::Animator;
use super::geom::Rect;
use super::id::Id;
use super::painter::Painter;
use super::tree::UiTree;
use std::time::Instant;

/// Per-pass drawing context handed to widgets.
pub struct Ui<'a> {
    pub rect: Rect,
    /// The whole drawable area. Unlike `rect` it is kept when descending into children, so
    /// overlays (drag feedback) can be placed anywhere on screen.
    pub viewport: Rect,
    /// Scope id for implicit state (animations) of the widget being drawn.
    pub id: Id,
    /// Node under the pointer as of the last input event.
    pub hovered: Option<Id>,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
    pub anim: &'a mut Animator,
    /// Frame timestamp; every widget in one pass sees the same instant.
    pub now: Instant,
}

impl<'a> Ui<'a> {
    pub fn new(
        rect: Rect,
        painter: &'a mut Painter,
        tree: &'a mut UiTree,
        anim: &'a mut Animator,
        now: Instant,
    ) -> Self {
        Self {
            rect,
            viewport: rect,
            id: Id::raw(0),
            hovered: None,
            painter,
            tree,
            anim,
            now,
        }
    }

    pub fn with_hovered(mut self, hovered: Option<Id>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Whether the pointer rests on the node sharing this scope's id.
    pub fn is_hovered(&self) -> bool {
        self.hovered == Some(self.id)
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        self.scoped(self.id, rect, f)
    }

    /// Like [`Ui::with_rect`], also switching the scope id.
    pub fn scoped<R>(&mut self, id: Id, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            viewport: self.viewport,
            id,
            hovered: self.hovered,
            painter: self.painter,
            tree: self.tree,
            anim: self.anim,
            now: self.now,
        };
        f(&mut child)
    }

    /// Run `f` with the painter clipped to `clip` (intersected with any active clip).
    pub fn clipped<R>(&mut self, clip: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let effective = match self.painter.clip() {
            Some(outer) => clip.intersect(outer),
            None => clip,
        };
        let prev = self.painter.set_clip(Some(effective));
        let out = f(self);
        self.painter.set_clip(prev);
        out
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn ui(&mut self, ui: &mut Ui) {
        (**self).ui(ui)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/widget.rs"]
mod tests;

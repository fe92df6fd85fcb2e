#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Cell rectangle. Right and bottom edges are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn contains_rect(&self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    /// Shift horizontally by `dx` cells, saturating at the coordinate space edges.
    pub fn offset_x(self, dx: i32) -> Rect {
        let x = (self.x as i32 + dx).clamp(0, u16::MAX as i32) as u16;
        Rect::new(x, self.y, self.w, self.h)
    }

    /// A `w`×`h` rect centered on `p`, kept inside `bounds` when it fits.
    pub fn around(p: Pos, w: u16, h: u16, bounds: Rect) -> Rect {
        let w = w.min(bounds.w);
        let h = h.min(bounds.h);
        let x = p
            .x
            .saturating_sub(w / 2)
            .clamp(bounds.x, bounds.right().saturating_sub(w));
        let y = p
            .y
            .saturating_sub(h / 2)
            .clamp(bounds.y, bounds.bottom().saturating_sub(h));
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;

use super::geom::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Size of one terminal cell in logical units. Widgets specify sizes in units (like pixels on a
/// 1x display) and convert at the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub unit_width: u16,
    pub unit_height: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            unit_width: 8,
            unit_height: 16,
        }
    }
}

impl CellMetrics {
    /// Columns needed to cover `units` horizontally (rounded up).
    pub fn cols(&self, units: u16) -> u16 {
        units.div_ceil(self.unit_width.max(1))
    }

    /// Rows needed to cover `units` vertically (rounded up).
    pub fn rows(&self, units: u16) -> u16 {
        units.div_ceil(self.unit_height.max(1))
    }

    pub fn insets(&self, units: u16) -> Insets {
        Insets::xy(self.cols(units), self.rows(units))
    }
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        let x = self.x.saturating_add(insets.left);
        let y = self.y.saturating_add(insets.top);
        let w = self.w.saturating_sub(insets.horizontal());
        let h = self.h.saturating_sub(insets.vertical());
        Rect::new(x, y, w, h)
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let left_w = w.min(self.w);
        let left = Rect::new(self.x, self.y, left_w, self.h);
        let rest = Rect::new(
            self.x.saturating_add(left_w),
            self.y,
            self.w.saturating_sub(left_w),
            self.h,
        );
        (left, rest)
    }

    pub fn centered(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        let x = self.x.saturating_add(self.w.saturating_sub(w) / 2);
        let y = self.y.saturating_add(self.h.saturating_sub(h) / 2);
        Rect::new(x, y, w, h)
    }

    /// Lay out `count` cells of width `cell_w` left to right, starting at the left edge.
    pub fn columns(self, count: usize, cell_w: u16) -> Vec<Rect> {
        let mut out = Vec::with_capacity(count);
        let mut rest = self;
        for _ in 0..count {
            let (cell, next) = rest.split_left(cell_w);
            out.push(cell);
            rest = next;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;

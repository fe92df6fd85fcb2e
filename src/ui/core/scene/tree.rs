use super::geom::{Pos, Rect};
use super::id::Id;
use std::ops::{BitOr, BitOrAssign};

/// What a node reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sense(u8);

impl Sense {
    pub const NONE: Self = Self(0);
    pub const HOVER: Self = Self(1 << 0);
    pub const DRAG_SOURCE: Self = Self(1 << 1);
    pub const DROP_TARGET: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for Sense {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Sense {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Unknown,
    DockSlot { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub sense: Sense,
    pub kind: NodeKind,
}

/// Hit-test nodes recorded during the last render pass, in paint order.
#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn hit_test_with_sense(&self, p: Pos, required: Sense) -> Option<&Node> {
        self.hit_test_with_sense_where(p, required, |_| true)
    }

    /// Topmost node at `p` having every bit of `required` and accepted by `pred`. Nodes pushed
    /// later were painted later, so they sit on top.
    pub fn hit_test_with_sense_where<F>(
        &self,
        p: Pos,
        required: Sense,
        mut pred: F,
    ) -> Option<&Node>
    where
        F: FnMut(&Node) -> bool,
    {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.sense.contains(required) && n.rect.contains(p) && pred(n))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/tree.rs"]
mod tests;

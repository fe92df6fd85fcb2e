use super::reorder::ReorderPolicy;
use crate::ui::core::geom::Pos;

/// The dock's drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        from: usize,
        /// Slot currently under the pointer that would receive a drop.
        over: Option<usize>,
        /// Last known pointer position, for the floating drag feedback.
        pointer: Option<Pos>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn source(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { from, .. } => Some(from),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match *self {
            DragState::Dragging { over, .. } => over,
            DragState::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockEvent {
    DragStart { index: usize },
    DragOver { index: Option<usize>, pos: Pos },
    Drop { index: usize },
    /// End of the gesture. After a drop this is a no-op; otherwise it cancels the drag.
    DragEnd,
}

/// A reorder that was applied to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
    pub policy: ReorderPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// The view must be re-derived.
    pub state_changed: bool,
    pub reorder: Option<Reorder>,
}

impl DispatchResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            state_changed: true,
            reorder: None,
        }
    }
}

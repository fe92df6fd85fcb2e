use super::geom::Pos;
use super::id::Id;

/// What is being carried by an in-flight drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragPayload {
    DockItem { index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    HoverChanged {
        from: Option<Id>,
        to: Option<Id>,
        pos: Pos,
    },
    DragStart {
        id: Id,
        pos: Pos,
    },
    DragMove {
        id: Id,
        pos: Pos,
        over: Option<Id>,
    },
    DragEnd {
        id: Id,
        pos: Pos,
    },
    Drop {
        payload: DragPayload,
        target: Id,
        pos: Pos,
    },
}

use super::geom::Pos;
use super::id::Id;
use super::input::{DragPayload, UiEvent};
use super::tree::{Node, Sense, UiTree};
use crate::core::event::{InputEvent, MouseButton, MouseEventKind};
use std::time::{Duration, Instant};

/// Decides what can be dragged and where it may land.
pub trait DragDropRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload>;

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragConfig {
    /// Manhattan distance (cells) the pointer must travel before a drag starts.
    pub threshold: u16,
    /// How long the button must be held before movement turns into a drag. Moving past the
    /// threshold earlier cancels dragging for that press.
    pub long_press: Duration,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            long_press: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiRuntimeOutput {
    pub events: Vec<UiEvent>,
    pub needs_redraw: bool,
}

impl UiRuntimeOutput {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            needs_redraw: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PressedState {
    button: MouseButton,
    start: Pos,
    at: Instant,
    drag_source: Option<Node>,
}

#[derive(Debug, Clone)]
struct DragSession {
    source: Id,
    payload: DragPayload,
    over: Option<Id>,
}

/// Pointer state machine: turns raw mouse input into hover and drag/drop events by
/// hit-testing the tree recorded during the last render pass.
#[derive(Debug, Default)]
pub struct UiRuntime {
    config: DragConfig,
    hovered: Option<Id>,
    pressed: Option<PressedState>,
    capture: Option<Id>,
    drag: Option<DragSession>,
}

impl UiRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn hovered(&self) -> Option<Id> {
        self.hovered
    }


    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop all pointer state without emitting events. Returns the source of the drag that was
    /// abandoned, if any.
    pub fn reset_pointer_state(&mut self) -> Option<Id> {
        self.pressed = None;
        self.capture = None;
        self.drag.take().map(|d| d.source)
    }

    pub fn on_input(
        &mut self,
        input: &InputEvent,
        tree: &UiTree,
        rules: &dyn DragDropRules,
        now: Instant,
    ) -> UiRuntimeOutput {
        let mut out = UiRuntimeOutput::empty();

        let InputEvent::Mouse(me) = input else {
            return out;
        };

        let pos = Pos::new(me.column, me.row);

        let next_hover = tree.hit_test_with_sense(pos, Sense::HOVER).map(|n| n.id);
        if next_hover != self.hovered {
            out.events.push(UiEvent::HoverChanged {
                from: self.hovered,
                to: next_hover,
                pos,
            });
            self.hovered = next_hover;
            out.needs_redraw = true;
        }

        match me.kind {
            MouseEventKind::Down(button) => {
                // A second button mid-drag abandons the gesture; its source still gets DragEnd.
                if let Some(drag) = self.drag.take() {
                    out.events.push(UiEvent::DragEnd {
                        id: drag.source,
                        pos,
                    });
                    out.needs_redraw = true;
                }
                self.capture = None;
                let drag_source = tree.hit_test_with_sense(pos, Sense::DRAG_SOURCE).copied();
                self.pressed = Some(PressedState {
                    button,
                    start: pos,
                    at: now,
                    drag_source,
                });
            }
            MouseEventKind::Up(button) => {
                let pressed = self.pressed.take();
                if let Some(drag) = self.drag.take() {
                    if pressed.is_some_and(|p| p.button == button)
                        || self.capture == Some(drag.source)
                    {
                        // Drop (if any) happens before DragEnd.
                        if let Some(target) = drag.over {
                            out.events.push(UiEvent::Drop {
                                payload: drag.payload,
                                target,
                                pos,
                            });
                        }
                        out.events.push(UiEvent::DragEnd {
                            id: drag.source,
                            pos,
                        });
                        out.needs_redraw = true;
                    }
                }
                self.capture = None;
            }
            MouseEventKind::Drag(_button) => {
                self.on_drag(pos, tree, rules, now, &mut out);
            }
            MouseEventKind::Moved
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {}
        }

        out
    }

    fn on_drag(
        &mut self,
        pos: Pos,
        tree: &UiTree,
        rules: &dyn DragDropRules,
        now: Instant,
        out: &mut UiRuntimeOutput,
    ) {
        let Some(pressed) = self.pressed.as_mut() else {
            return;
        };

        if self.drag.is_none() {
            let dx = pos.x as i32 - pressed.start.x as i32;
            let dy = pos.y as i32 - pressed.start.y as i32;
            let dist = dx.unsigned_abs() + dy.unsigned_abs();
            if dist < self.config.threshold as u32 {
                return;
            }

            let Some(source) = pressed.drag_source else {
                // Not draggable.
                return;
            };

            if now.saturating_duration_since(pressed.at) < self.config.long_press {
                // Moved before the long press registered: this press never becomes a drag.
                pressed.drag_source = None;
                return;
            }

            let Some(payload) = rules.payload_for_source(&source) else {
                pressed.drag_source = None;
                return;
            };

            tracing::debug!(source = ?source.id, ?payload, "drag start");
            self.capture = Some(source.id);
            self.drag = Some(DragSession {
                source: source.id,
                payload,
                over: None,
            });
            out.events.push(UiEvent::DragStart {
                id: source.id,
                pos: pressed.start,
            });
            out.needs_redraw = true;
        }

        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let payload = &drag.payload;
        let over = tree
            .hit_test_with_sense_where(pos, Sense::DROP_TARGET, |n| rules.can_drop(payload, n))
            .map(|n| n.id);
        drag.over = over;

        out.events.push(UiEvent::DragMove {
            id: drag.source,
            pos,
            over,
        });
        out.needs_redraw = true;
    }
}

#[cfg(test)]
impl UiRuntime {
    pub(crate) fn capture(&self) -> Option<Id> {
        self.capture
    }

    pub(crate) fn drag_payload(&self) -> Option<&DragPayload> {
        self.drag.as_ref().map(|d| &d.payload)
    }

    pub(crate) fn drag_over(&self) -> Option<Id> {
        self.drag.as_ref()?.over
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/runtime.rs"]
mod tests;

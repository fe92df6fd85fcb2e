//! Reorderable dock.
//!
//! A [`Dock`] owns an ordered list of items and a render function that turns one item into a
//! [`Widget`]. Every render pass lays the items out as a row of slots, registers each slot as a
//! drag source and drop target, and calls the render function exactly once per item. The shell
//! feeds pointer gestures back in as [`DockEvent`]s; a drop rearranges the list according to the
//! configured [`ReorderPolicy`] and starts slide transitions for the slots whose content changed.

mod drag;
mod reorder;

pub use drag::{DispatchResult, DockEvent, DragState, Reorder};
pub use reorder::{ReorderPolicy, UnknownPolicy};

use crate::ui::core::anim::{Easing, Tween};
use crate::ui::core::color;
use crate::ui::core::geom::Rect;
use crate::ui::core::id::{Id, IdPath};
use crate::ui::core::layout::{CellMetrics, Insets};
use crate::ui::core::style::{Color, Style};
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use std::time::{Duration, Instant};

pub const DEFAULT_SLIDE: Duration = Duration::from_millis(500);

/// Minimum tile edge, in logical units.
pub const TILE_UNITS: u16 = 48;
const MARGIN_UNITS: u16 = 8;
const PADDING_UNITS: u16 = 4;

/// Slot geometry, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockLayout {
    pub slot_w: u16,
    pub slot_h: u16,
    /// Content size centered in a slot; also the size of the drop placeholder.
    pub tile_w: u16,
    pub tile_h: u16,
    /// Space between the frame and the slot row.
    pub padding: Insets,
}

impl DockLayout {
    /// Tiles of `tile` units with a `margin` around each and `padding` inside the frame.
    pub fn from_units(metrics: CellMetrics, tile: u16, margin: u16, padding: u16) -> Self {
        let tile_w = metrics.cols(tile);
        let tile_h = metrics.rows(tile);
        let margin = metrics.insets(margin);
        Self {
            slot_w: tile_w.saturating_add(margin.horizontal()),
            slot_h: tile_h.saturating_add(margin.vertical()),
            tile_w,
            tile_h,
            padding: metrics.insets(padding),
        }
    }

    pub fn for_metrics(metrics: CellMetrics) -> Self {
        Self::from_units(metrics, TILE_UNITS, MARGIN_UNITS, PADDING_UNITS)
    }

    /// Outer size (frame included) of a dock holding `count` items.
    pub fn size(&self, count: usize) -> (u16, u16) {
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        let w = self
            .slot_w
            .saturating_mul(count)
            .saturating_add(self.padding.horizontal())
            .saturating_add(2);
        let h = self
            .slot_h
            .saturating_add(self.padding.vertical())
            .saturating_add(2);
        (w, h)
    }

    pub fn slots(&self, area: Rect, count: usize) -> Vec<Rect> {
        let inner = area.inset(Insets::all(1)).inset(self.padding);
        let row = Rect::new(inner.x, inner.y, inner.w, self.slot_h.min(inner.h));
        row.columns(count, self.slot_w)
    }
}

impl Default for DockLayout {
    fn default() -> Self {
        Self::for_metrics(CellMetrics::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockStyle {
    pub surface: Color,
    pub frame: Color,
    pub placeholder: Color,
    /// Background of the slot a drop would land on.
    pub highlight: Color,
}

impl Default for DockStyle {
    fn default() -> Self {
        let surface = Color::hex(0x263238);
        Self {
            surface,
            frame: Color::hex(0x546E7A),
            placeholder: Color::hex(0x90A4AE),
            highlight: color::lighten(surface, 12),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockConfig {
    pub policy: ReorderPolicy,
    /// Duration of the slide played by slots whose content changed. Zero disables it.
    pub slide: Duration,
    pub layout: DockLayout,
    pub style: DockStyle,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            policy: ReorderPolicy::default(),
            slide: DEFAULT_SLIDE,
            layout: DockLayout::default(),
            style: DockStyle::default(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SlotTransition {
    started: Instant,
    /// Signed distance, in slots, the content starts from.
    from_slots: i32,
}

pub struct Dock<T, F> {
    items: Vec<T>,
    render: F,
    state: DragState,
    // Same length as `items`.
    transitions: Vec<Option<SlotTransition>>,
    config: DockConfig,
}

impl<T, F> Dock<T, F> {
    pub fn new(items: impl IntoIterator<Item = T>, render: F) -> Self {
        Self::with_config(items, render, DockConfig::default())
    }

    pub fn with_config(items: impl IntoIterator<Item = T>, render: F, config: DockConfig) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let transitions = vec![None; items.len()];
        Self {
            items,
            render,
            state: DragState::Idle,
            transitions,
            config,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Index of the item being dragged.
    pub fn cursor(&self) -> Option<usize> {
        self.state.source()
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn size(&self) -> (u16, u16) {
        self.config.layout.size(self.items.len())
    }

    pub fn slot_id(index: usize) -> Id {
        IdPath::root("dock").push_u64(index as u64).finish()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transitions
            .iter()
            .flatten()
            .any(|t| now.saturating_duration_since(t.started) < self.config.slide)
    }

    pub fn dispatch(&mut self, event: DockEvent, now: Instant) -> DispatchResult {
        let len = self.items.len();
        match (self.state, event) {
            (DragState::Idle, DockEvent::DragStart { index }) if index < len => {
                tracing::debug!(index, "dock drag start");
                self.state = DragState::Dragging {
                    from: index,
                    over: None,
                    pointer: None,
                };
                DispatchResult::changed()
            }
            (DragState::Dragging { from, .. }, DockEvent::DragOver { index, pos }) => {
                let next = DragState::Dragging {
                    from,
                    over: index.filter(|&i| i < len),
                    pointer: Some(pos),
                };
                if next == self.state {
                    return DispatchResult::unchanged();
                }
                self.state = next;
                DispatchResult::changed()
            }
            (DragState::Dragging { from, .. }, DockEvent::Drop { index }) if index < len => {
                self.state = DragState::Idle;
                let policy = self.config.policy;
                if !policy.apply(&mut self.items, from, index) {
                    return DispatchResult::changed();
                }
                tracing::info!(from, to = index, %policy, "dock reorder");
                self.start_transitions(from, index, now);
                DispatchResult {
                    state_changed: true,
                    reorder: Some(Reorder {
                        from,
                        to: index,
                        policy,
                    }),
                }
            }
            (DragState::Dragging { from, .. }, DockEvent::DragEnd) => {
                tracing::debug!(from, "dock drag cancelled");
                self.state = DragState::Idle;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        }
    }

    fn start_transitions(&mut self, from: usize, to: usize, now: Instant) {
        if self.config.slide.is_zero() {
            return;
        }
        let origins = self.config.policy.origins(self.items.len(), from, to);
        for (pos, origin) in origins.into_iter().enumerate() {
            if let Some(origin) = origin {
                self.transitions[pos] = Some(SlotTransition {
                    started: now,
                    from_slots: origin as i32 - pos as i32,
                });
            }
        }
    }

    /// Horizontal content offset of slot `index`, in cells.
    fn slide_offset(&self, index: usize, now: Instant) -> i32 {
        let Some(t) = self.transitions.get(index).copied().flatten() else {
            return 0;
        };
        let start = (t.from_slots * self.config.layout.slot_w as i32) as f32;
        Tween::new(start, 0.0, t.started, self.config.slide, Easing::CubicOut)
            .value_at(now)
            .round() as i32
    }
}

impl<T, F, V> Widget for Dock<T, F>
where
    F: Fn(&T) -> V,
    V: Widget,
{
    fn ui(&mut self, ui: &mut Ui) {
        let now = ui.now;
        let area = ui.rect;
        let DockConfig {
            layout,
            style,
            slide,
            ..
        } = self.config;

        for t in &mut self.transitions {
            if t.is_some_and(|t| now.saturating_duration_since(t.started) >= slide) {
                *t = None;
            }
        }

        ui.painter.fill_rect(area, Style::default().bg(style.surface));
        ui.painter.border(area, Style::default().fg(style.frame));

        let slots = layout.slots(area, self.items.len());
        let mut feedback = None;
        for (index, (item, &slot)) in self.items.iter().zip(slots.iter()).enumerate() {
            let id = Self::slot_id(index);
            ui.tree.push(Node {
                id,
                rect: slot,
                sense: Sense::HOVER | Sense::DRAG_SOURCE | Sense::DROP_TARGET,
                kind: NodeKind::DockSlot { index },
            });

            let mut widget = (self.render)(item);

            if self.state.source() == Some(index) {
                let outline = slot.centered(layout.tile_w, layout.tile_h);
                ui.painter
                    .border(outline, Style::default().fg(style.placeholder));
                feedback = Some((slot, widget));
                continue;
            }

            if self.state.target() == Some(index) {
                ui.painter
                    .fill_rect(slot, Style::default().bg(style.highlight));
            }

            let dx = self.slide_offset(index, now);
            ui.clipped(slot, |ui| {
                ui.scoped(id, slot.offset_x(dx), |ui| widget.ui(ui))
            });
        }

        if let Some((slot, mut widget)) = feedback {
            let pointer = match self.state {
                DragState::Dragging {
                    pointer: Some(p), ..
                } => p,
                _ => slot.center(),
            };
            let rect = Rect::around(pointer, layout.slot_w, layout.slot_h, ui.viewport);
            // Drawn last, above everything else, and outside any clip. No hit-test node.
            let prev = ui.painter.set_clip(None);
            let id = IdPath::root("dock").push_str("feedback").finish();
            ui.scoped(id, rect, |ui| widget.ui(ui));
            ui.painter.set_clip(prev);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dock/dock.rs"]
mod tests;

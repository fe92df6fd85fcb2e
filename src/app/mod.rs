//! The application shell: one full-window surface with the icon dock centered in it.

pub mod icon;
pub mod theme;
pub mod tile;

use crate::core::event::{
    EventResult, InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crate::dock::{Dock, DockConfig, DockEvent, DockLayout};
use crate::settings::Settings;
use crate::ui::backend::Backend;
use crate::ui::core::anim::Animator;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::id::Id;
use crate::ui::core::input::{DragPayload, UiEvent};
use crate::ui::core::layout::CellMetrics;
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::{DragConfig, DragDropRules, UiRuntime};
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, UiTree};
use crate::ui::core::widget::{Ui, Widget};
use icon::Icon;
use std::time::{Duration, Instant};
use theme::ShellTheme;
use tile::IconTile;
use unicode_width::UnicodeWidthStr;


/// Every slot accepts every dock item.
#[derive(Debug, Clone, Copy, Default)]
struct DockDragRules;

const DOCK_DND_RULES: DockDragRules = DockDragRules;

impl DragDropRules for DockDragRules {
    fn payload_for_source(&self, source: &Node) -> Option<DragPayload> {
        match source.kind {
            NodeKind::DockSlot { index } => Some(DragPayload::DockItem { index }),
            NodeKind::Unknown => None,
        }
    }

    fn can_drop(&self, payload: &DragPayload, target: &Node) -> bool {
        matches!(
            (payload, target.kind),
            (DragPayload::DockItem { .. }, NodeKind::DockSlot { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub dock: DockConfig,
    pub drag: DragConfig,
    pub metrics: CellMetrics,
    pub tile_animation: Duration,
    pub theme: ShellTheme,
    pub quit_keys: Vec<Key>,
    pub cancel_keys: Vec<Key>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl ShellConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let metrics = CellMetrics {
            unit_width: settings.metrics.unit_width.max(1),
            unit_height: settings.metrics.unit_height.max(1),
        };
        let theme = ShellTheme::default();
        Self {
            dock: DockConfig {
                policy: settings.reorder,
                slide: Duration::from_millis(settings.animation.slide_ms),
                layout: DockLayout::for_metrics(metrics),
                style: theme.dock,
            },
            drag: DragConfig {
                threshold: settings.drag.threshold,
                long_press: Duration::from_millis(settings.drag.long_press_ms),
            },
            metrics,
            tile_animation: Duration::from_millis(settings.animation.tile_ms),
            theme,
            quit_keys: settings.quit_keys(),
            cancel_keys: settings.cancel_keys(),
        }
    }

    /// Turn off every transition.
    pub fn without_animation(mut self) -> Self {
        self.dock.slide = Duration::ZERO;
        self.tile_animation = Duration::ZERO;
        self
    }
}

pub type TileRenderer = Box<dyn Fn(&Icon) -> IconTile>;

pub struct Shell {
    dock: Dock<Icon, TileRenderer>,
    runtime: UiRuntime,
    painter: Painter,
    tree: UiTree,
    anim: Animator,
    theme: ShellTheme,
    hint: String,
    quit_keys: Vec<Key>,
    cancel_keys: Vec<Key>,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let ShellConfig {
            dock,
            drag,
            metrics,
            tile_animation,
            theme,
            quit_keys,
            cancel_keys,
        } = config;
        let render: TileRenderer =
            Box::new(move |icon: &Icon| IconTile::new(*icon, metrics).with_duration(tile_animation));
        // Ctrl+C quits whatever the bindings say.
        let quit = quit_keys
            .first()
            .copied()
            .unwrap_or(Key::ctrl(KeyCode::Char('c')));
        Self {
            dock: Dock::with_config(Icon::ALL, render, dock),
            runtime: UiRuntime::with_config(drag),
            painter: Painter::new(),
            tree: UiTree::new(),
            anim: Animator::new(),
            theme,
            hint: format!("drag to reorder · {quit} to quit"),
            quit_keys,
            cancel_keys,
        }
    }

    pub fn dock(&self) -> &Dock<Icon, TileRenderer> {
        &self.dock
    }

    pub fn runtime(&self) -> &UiRuntime {
        &self.runtime
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.dock.is_animating(now) || self.anim.is_animating(now)
    }

    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> EventResult {
        match event {
            InputEvent::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(*key, now),
            InputEvent::Mouse(_) => self.handle_mouse(event, now),
            InputEvent::Resize(..) => EventResult::Consumed,
            // The button release may never arrive once the window lost focus.
            InputEvent::FocusLost if self.is_dragging() => self.cancel_drag(now),
            _ => EventResult::Ignored,
        }
    }

    fn is_dragging(&self) -> bool {
        self.dock.cursor().is_some() || self.runtime.is_pressed()
    }

    fn handle_key(&mut self, event: KeyEvent, now: Instant) -> EventResult {
        let key = Key::from(event);
        if self.cancel_keys.contains(&key) {
            if self.is_dragging() {
                return self.cancel_drag(now);
            }
            return EventResult::Quit;
        }
        if self.quit_keys.contains(&key) {
            return EventResult::Quit;
        }
        // Ctrl+C always quits, even when rebound away.
        if key == Key::new(KeyCode::Char('c'), KeyModifiers::CONTROL) {
            return EventResult::Quit;
        }
        EventResult::Ignored
    }

    fn cancel_drag(&mut self, now: Instant) -> EventResult {
        if let Some(source) = self.runtime.reset_pointer_state() {
            tracing::debug!(?source, "drag abandoned");
        }
        self.dock.dispatch(DockEvent::DragEnd, now);
        EventResult::Consumed
    }

    fn handle_mouse(&mut self, event: &InputEvent, now: Instant) -> EventResult {
        let out = self
            .runtime
            .on_input(event, &self.tree, &DOCK_DND_RULES, now);
        let mut changed = out.needs_redraw;

        for ev in out.events {
            let dock_event = match ev {
                UiEvent::DragStart { id, .. } => self
                    .slot_index(id)
                    .map(|index| DockEvent::DragStart { index }),
                UiEvent::DragMove { over, pos, .. } => Some(DockEvent::DragOver {
                    index: over.and_then(|id| self.slot_index(id)),
                    pos,
                }),
                UiEvent::Drop {
                    payload: DragPayload::DockItem { .. },
                    target,
                    ..
                } => self.slot_index(target).map(|index| DockEvent::Drop { index }),
                UiEvent::DragEnd { .. } => Some(DockEvent::DragEnd),
                UiEvent::HoverChanged { .. } => None,
            };
            if let Some(dock_event) = dock_event {
                changed |= self.dock.dispatch(dock_event, now).state_changed;
            }
        }

        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn slot_index(&self, id: Id) -> Option<usize> {
        match self.tree.node(id)?.kind {
            NodeKind::DockSlot { index } => Some(index),
            NodeKind::Unknown => None,
        }
    }

    /// Paint a full frame into `area` and hand it to `backend`. Also rebuilds the hit-test tree
    /// used by the next pointer event.
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect, now: Instant) {
        self.painter.clear();
        self.tree.clear();
        self.anim.begin_frame();

        self.painter
            .fill_rect(area, Style::default().bg(self.theme.background));

        let (w, h) = self.dock.size();
        let dock_rect = area.centered(w, h);

        // Below the dock, and under the drag feedback.
        let hint_w = UnicodeWidthStr::width(self.hint.as_str()) as u16;
        let hint_y = dock_rect.bottom().saturating_add(1);
        if hint_w <= area.w && hint_y < area.bottom() {
            let x = area.x + (area.w - hint_w) / 2;
            self.painter.text(
                Pos::new(x, hint_y),
                self.hint.as_str(),
                Style::default().fg(self.theme.hint_fg),
            );
        }

        {
            let hovered = self.runtime.hovered();
            let mut ui = Ui::new(area, &mut self.painter, &mut self.tree, &mut self.anim, now)
                .with_hovered(hovered);
            ui.with_rect(dock_rect, |ui| self.dock.ui(ui));
        }

        self.anim.end_frame();
        backend.draw(area, self.painter.cmds());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;

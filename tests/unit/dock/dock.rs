use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::anim::Animator;
use crate::ui::core::geom::Pos;
use crate::ui::core::painter::Painter;
use crate::ui::core::tree::UiTree;
use std::cell::Cell;

/// Paints one letter at the center of its rect.
struct Letter(char);

impl Widget for Letter {
    fn ui(&mut self, ui: &mut Ui) {
        ui.painter
            .text(ui.rect.center(), self.0.to_string(), Style::default());
    }
}

fn letter(c: &char) -> Letter {
    Letter(*c)
}

fn letters() -> Vec<char> {
    vec!['A', 'B', 'C', 'D', 'E']
}

struct Frame {
    backend: TestBackend,
    tree: UiTree,
}

impl Frame {
    /// Letters on the slot row, left to right.
    fn row(&self) -> String {
        self.backend
            .buffer()
            .row_text(4)
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect()
    }
}

fn render<T, F, V>(dock: &mut Dock<T, F>, now: Instant) -> Frame
where
    F: Fn(&T) -> V,
    V: Widget,
{
    let (w, h) = dock.size();
    let area = Rect::new(0, 0, w, h);
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut anim = Animator::new();
    anim.begin_frame();
    {
        let mut ui = Ui::new(area, &mut painter, &mut tree, &mut anim, now);
        dock.ui(&mut ui);
    }
    anim.end_frame();

    let mut backend = TestBackend::new(w, h);
    backend.draw(area, painter.cmds());
    Frame { backend, tree }
}

fn drag<T, F>(dock: &mut Dock<T, F>, from: usize, to: usize, now: Instant) -> DispatchResult {
    dock.dispatch(DockEvent::DragStart { index: from }, now);
    dock.dispatch(
        DockEvent::DragOver {
            index: Some(to),
            pos: Pos::new(0, 0),
        },
        now,
    );
    let result = dock.dispatch(DockEvent::Drop { index: to }, now);
    dock.dispatch(DockEvent::DragEnd, now);
    result
}

#[test]
fn default_layout_fits_five_tiles() {
    let layout = DockLayout::default();
    assert_eq!((layout.tile_w, layout.tile_h), (6, 3));
    assert_eq!((layout.slot_w, layout.slot_h), (8, 5));
    assert_eq!(layout.size(5), (44, 9));
    assert_eq!(
        layout.slots(Rect::new(0, 0, 44, 9), 5)[0],
        Rect::new(2, 2, 8, 5)
    );
}

#[test]
fn first_render_shows_initial_order() {
    let mut dock = Dock::new(letters(), letter);
    let frame = render(&mut dock, Instant::now());
    assert_eq!(frame.row(), "ABCDE");
    assert_eq!(dock.cursor(), None);
}

#[test]
fn every_slot_is_a_drag_source_and_drop_target() {
    let mut dock = Dock::new(letters(), letter);
    let frame = render(&mut dock, Instant::now());

    let nodes = frame.tree.nodes();
    assert_eq!(nodes.len(), 5);
    for (i, node) in nodes.iter().enumerate() {
        assert_eq!(node.kind, NodeKind::DockSlot { index: i });
        assert_eq!(node.id, Dock::<char, fn(&char) -> Letter>::slot_id(i));
        assert!(node
            .sense
            .contains(Sense::HOVER | Sense::DRAG_SOURCE | Sense::DROP_TARGET));
    }
}

#[test]
fn render_function_runs_once_per_item_per_pass() {
    let calls = Cell::new(0usize);
    let mut dock = Dock::new(letters(), |c: &char| {
        calls.set(calls.get() + 1);
        Letter(*c)
    });
    let now = Instant::now();

    render(&mut dock, now);
    assert_eq!(calls.get(), 5);

    // The dragged item is still rendered exactly once (as drag feedback).
    dock.dispatch(DockEvent::DragStart { index: 1 }, now);
    render(&mut dock, now);
    assert_eq!(calls.get(), 10);
}

#[test]
fn move_drop_reorders_items() {
    let mut dock = Dock::new(letters(), letter);
    let now = Instant::now();
    let result = drag(&mut dock, 0, 3, now);

    assert!(result.state_changed);
    assert_eq!(
        result.reorder,
        Some(Reorder {
            from: 0,
            to: 3,
            policy: ReorderPolicy::Move
        })
    );
    assert_eq!(dock.items(), &['B', 'C', 'D', 'A', 'E']);
    assert_eq!(dock.cursor(), None);
}

#[test]
fn swap_drop_exchanges_items() {
    let config = DockConfig {
        policy: ReorderPolicy::Swap,
        ..DockConfig::default()
    };
    let mut dock = Dock::with_config(letters(), letter, config);
    drag(&mut dock, 0, 3, Instant::now());
    assert_eq!(dock.items(), &['D', 'B', 'C', 'A', 'E']);
}

#[test]
fn hovering_never_reorders() {
    let config = DockConfig {
        policy: ReorderPolicy::Swap,
        ..DockConfig::default()
    };
    let mut dock = Dock::with_config(letters(), letter, config);
    let now = Instant::now();
    dock.dispatch(DockEvent::DragStart { index: 0 }, now);
    for i in 0..5 {
        dock.dispatch(
            DockEvent::DragOver {
                index: Some(i),
                pos: Pos::new(i as u16 * 8, 4),
            },
            now,
        );
    }
    assert_eq!(dock.items(), letters().as_slice());
    assert_eq!(dock.state().target(), Some(4));
}

#[test]
fn dropping_on_own_slot_is_a_noop() {
    let mut dock = Dock::new(letters(), letter);
    let result = drag(&mut dock, 2, 2, Instant::now());
    assert_eq!(result.reorder, None);
    assert_eq!(dock.items(), letters().as_slice());
    assert!(!dock.is_animating(Instant::now()));
}

#[test]
fn cancel_leaves_order_and_clears_cursor() {
    let mut dock = Dock::new(letters(), letter);
    let now = Instant::now();

    dock.dispatch(DockEvent::DragStart { index: 1 }, now);
    assert_eq!(dock.cursor(), Some(1));
    dock.dispatch(
        DockEvent::DragOver {
            index: Some(3),
            pos: Pos::new(30, 4),
        },
        now,
    );
    let result = dock.dispatch(DockEvent::DragEnd, now);

    assert!(result.state_changed);
    assert_eq!(result.reorder, None);
    assert_eq!(dock.cursor(), None);
    assert_eq!(dock.items(), letters().as_slice());
    assert_eq!(render(&mut dock, now).row(), "ABCDE");
}

#[test]
fn invalid_events_are_noops() {
    let mut dock = Dock::new(letters(), letter);
    let now = Instant::now();

    assert_eq!(
        dock.dispatch(DockEvent::DragStart { index: 5 }, now),
        DispatchResult::unchanged()
    );
    assert_eq!(
        dock.dispatch(DockEvent::Drop { index: 1 }, now),
        DispatchResult::unchanged()
    );
    assert_eq!(dock.dispatch(DockEvent::DragEnd, now), DispatchResult::unchanged());
    assert_eq!(dock.state(), DragState::Idle);

    dock.dispatch(DockEvent::DragStart { index: 0 }, now);
    // A second start while dragging is ignored.
    assert!(!dock.dispatch(DockEvent::DragStart { index: 2 }, now).state_changed);
    assert_eq!(dock.cursor(), Some(0));

    // Out-of-range targets hover nothing and cannot be dropped on.
    let pos = Pos::new(1, 1);
    dock.dispatch(DockEvent::DragOver { index: Some(9), pos }, now);
    assert_eq!(dock.state().target(), None);
    assert!(!dock.dispatch(DockEvent::DragOver { index: Some(9), pos }, now).state_changed);
    assert_eq!(
        dock.dispatch(DockEvent::Drop { index: 9 }, now),
        DispatchResult::unchanged()
    );
    assert_eq!(dock.items(), letters().as_slice());
}

#[test]
fn dragged_slot_shows_placeholder_and_target_is_highlighted() {
    let mut dock = Dock::new(letters(), letter);
    let now = Instant::now();
    dock.dispatch(DockEvent::DragStart { index: 0 }, now);
    dock.dispatch(
        DockEvent::DragOver {
            index: Some(2),
            pos: Pos::new(22, 4),
        },
        now,
    );
    let frame = render(&mut dock, now);
    let buf = frame.backend.buffer();
    let style = DockStyle::default();

    // Slot 0 = (2, 2, 8, 5); its tile outline is centered at (3, 3, 6, 3).
    assert_eq!(buf.cell(3, 3).unwrap().symbol, "╭");
    assert_eq!(buf.cell(8, 5).unwrap().symbol, "╯");
    assert_eq!(buf.cell(3, 3).unwrap().style.fg, Some(style.placeholder));

    // Slot 2 = (18, 2, 8, 5) is highlighted; slot 1 is not.
    assert_eq!(buf.cell(18, 2).unwrap().style.bg, Some(style.highlight));
    assert_eq!(buf.cell(10, 2).unwrap().style.bg, Some(style.surface));

    // Feedback follows the pointer: `A` is drawn at (22, 4), over `C`'s slot.
    assert_eq!(buf.cell(22, 4).unwrap().symbol, "A");
    assert_eq!(frame.tree.nodes().len(), 5);
}

#[test]
fn changed_slots_slide_into_place() {
    let mut dock = Dock::new(letters(), letter);
    let t0 = Instant::now();
    drag(&mut dock, 0, 3, t0);

    assert!(dock.is_animating(t0));
    // Content that moved, the dropped item included, starts at least a full slot away and is
    // clipped to its slot; untouched slots are already in place.
    assert_eq!(render(&mut dock, t0).row(), "E");

    let mid = t0 + Duration::from_millis(100);
    assert!(dock.is_animating(mid));

    let done = t0 + DEFAULT_SLIDE;
    assert_eq!(render(&mut dock, done).row(), "BCDAE");
    assert!(!dock.is_animating(done));
}

#[test]
fn swap_slides_both_exchanged_slots() {
    let config = DockConfig {
        policy: ReorderPolicy::Swap,
        ..DockConfig::default()
    };
    let mut dock = Dock::with_config(letters(), letter, config);
    let t0 = Instant::now();
    drag(&mut dock, 0, 3, t0);

    assert_eq!(render(&mut dock, t0).row(), "BCE");
    let done = t0 + DEFAULT_SLIDE;
    assert_eq!(render(&mut dock, done).row(), "DBCAE");
    assert!(!dock.is_animating(done));
}

#[test]
fn zero_slide_disables_transitions() {
    let config = DockConfig {
        slide: Duration::ZERO,
        ..DockConfig::default()
    };
    let mut dock = Dock::with_config(letters(), letter, config);
    let t0 = Instant::now();
    drag(&mut dock, 0, 3, t0);
    assert!(!dock.is_animating(t0));
    assert_eq!(render(&mut dock, t0).row(), "BCDAE");
}

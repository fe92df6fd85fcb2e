use super::*;
use crate::ui::backend::{draw_border, draw_text, fill_rect};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Color;

#[test]
fn wide_glyphs_are_drawn_whole_or_not_at_all() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 1, 1));
    draw_text(&mut buf, Pos::new(0, 0), "界", Style::default(), None);
    assert_eq!(buf.row_text(0), " ");

    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 1));
    draw_text(&mut buf, Pos::new(0, 0), "界", Style::default(), None);
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "界");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn text_respects_explicit_clip() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 6, 1));
    draw_text(
        &mut buf,
        Pos::new(0, 0),
        "abcdef",
        Style::default(),
        Some(Rect::new(2, 0, 2, 1)),
    );
    assert_eq!(buf.row_text(0), "  cd  ");
}

#[test]
fn fill_is_bounded_by_the_buffer() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 2, 2));
    buf.put(0, 0, "A", Style::default());
    fill_rect(&mut buf, Rect::new(0, 0, 10, 10), Style::default());
    assert_eq!(buf.to_text(), "  \n  ");
    assert!(buf.cell(2, 0).is_none());
}

#[test]
fn text_keeps_background_painted_underneath() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 3, 1));
    let bg = Color::hex(0x2196F3);
    fill_rect(&mut buf, Rect::new(0, 0, 3, 1), Style::default().bg(bg));
    draw_text(
        &mut buf,
        Pos::new(1, 0),
        "x",
        Style::default().fg(Color::WHITE),
        None,
    );
    let cell = buf.cell(1, 0).unwrap();
    assert_eq!(cell.symbol, "x");
    assert_eq!(cell.style.bg, Some(bg));
    assert_eq!(cell.style.fg, Some(Color::WHITE));
}

#[test]
fn border_has_rounded_corners() {
    let mut buf = TestBuffer::new(Rect::new(0, 0, 4, 3));
    draw_border(&mut buf, Rect::new(0, 0, 4, 3), Style::default());
    assert_eq!(buf.to_text(), "╭──╮\n│  │\n╰──╯");
}

#[test]
fn backend_replays_commands_in_order() {
    let mut backend = TestBackend::new(4, 1);
    backend.draw(
        Rect::new(0, 0, 4, 1),
        &[
            PaintCmd::Text {
                pos: Pos::new(0, 0),
                text: "abc".to_string(),
                style: Style::default(),
                clip: None,
            },
            PaintCmd::FillRect {
                rect: Rect::new(1, 0, 1, 1),
                style: Style::default(),
            },
        ],
    );
    assert_eq!(backend.buffer().row_text(0), "a c ");

    backend.clear();
    assert_eq!(backend.buffer().row_text(0), "    ");
}

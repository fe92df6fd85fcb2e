use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.text(Pos::new(0, 0), "hi", Style::default());
    p.border(Rect::new(0, 0, 3, 3), Style::default());
    assert_eq!(p.cmds().len(), 3);

    p.set_clip(Some(Rect::new(0, 0, 1, 1)));
    p.clear();
    assert!(p.cmds().is_empty());
    assert_eq!(p.clip(), None);
}

#[test]
fn clip_intersects_fills_and_drops_empty_ones() {
    let mut p = Painter::new();
    let prev = p.set_clip(Some(Rect::new(2, 0, 4, 4)));
    assert_eq!(prev, None);

    p.fill_rect(Rect::new(0, 0, 4, 2), Style::default());
    p.fill_rect(Rect::new(10, 0, 4, 2), Style::default());

    assert_eq!(
        p.cmds(),
        &[PaintCmd::FillRect {
            rect: Rect::new(2, 0, 2, 2),
            style: Style::default(),
        }]
    );
}

#[test]
fn clip_applies_to_text_and_borders() {
    let mut p = Painter::new();
    p.set_clip(Some(Rect::new(0, 0, 5, 5)));

    p.text(Pos::new(1, 1), "x", Style::default());
    p.border(Rect::new(3, 0, 4, 3), Style::default());
    p.border(Rect::new(0, 0, 5, 5), Style::default());

    assert_eq!(p.cmds().len(), 2);
    assert!(matches!(
        &p.cmds()[0],
        PaintCmd::Text { clip: Some(c), .. } if *c == Rect::new(0, 0, 5, 5)
    ));
    assert!(matches!(&p.cmds()[1], PaintCmd::Border { .. }));
}

#[test]
fn degenerate_borders_and_empty_clips_record_nothing() {
    let mut p = Painter::new();
    p.border(Rect::new(0, 0, 1, 4), Style::default());

    p.set_clip(Some(Rect::new(3, 3, 0, 0)));
    p.text(Pos::new(3, 3), "x", Style::default());
    assert!(p.cmds().is_empty());
}

use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn key_releases_are_dropped() {
    let mut key = ct::KeyEvent::new(ct::KeyCode::Char('q'), ct::KeyModifiers::NONE);
    key.kind = ct::KeyEventKind::Release;
    assert_eq!(into_input_event(ct::Event::Key(key)), None);

    key.kind = ct::KeyEventKind::Press;
    assert_eq!(
        into_input_event(ct::Event::Key(key)),
        Some(InputEvent::Key(KeyEvent::press(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )))
    );
}

#[test]
fn mouse_drag_keeps_position_and_modifiers() {
    let event = ct::MouseEvent {
        kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
        column: 12,
        row: 4,
        modifiers: ct::KeyModifiers::SHIFT | ct::KeyModifiers::ALT,
    };
    let converted = into_mouse_event(event);
    assert_eq!(converted.kind, MouseEventKind::Drag(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (12, 4));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT | KeyModifiers::ALT));
    assert!(!converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}

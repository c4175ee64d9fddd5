use super::*;

fn press(code: ct::KeyCode, mods: ct::KeyModifiers) -> KeyEvent {
    into_key_event(ct::KeyEvent::new(code, mods))
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let converted = press(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn backtab_drops_shift() {
    let converted = press(ct::KeyCode::BackTab, ct::KeyModifiers::SHIFT);
    assert_eq!(converted.code, KeyCode::BackTab);
    assert!(converted.modifiers.is_empty());
}

#[test]
fn modifiers_are_carried_over() {
    let converted = press(
        ct::KeyCode::Char('c'),
        ct::KeyModifiers::CONTROL | ct::KeyModifiers::ALT,
    );
    assert_eq!(converted.code, KeyCode::Char('c'));
    assert_eq!(
        converted.modifiers,
        KeyModifiers::CONTROL | KeyModifiers::ALT
    );
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn shifted_letters_keep_their_case() {
    let converted = press(ct::KeyCode::Char('A'), ct::KeyModifiers::SHIFT);
    assert_eq!(converted.text_char(), Some('A'));
}

#[test]
fn release_kind_is_preserved() {
    let mut event = ct::KeyEvent::new(ct::KeyCode::Enter, ct::KeyModifiers::NONE);
    event.kind = ct::KeyEventKind::Release;
    assert_eq!(into_key_event(event).kind, KeyEventKind::Release);
}

#[test]
fn mouse_click_converts() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: ct::KeyModifiers::NONE,
    });
    assert_eq!(
        into_input_event(event),
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        })
    );
}

#[test]
fn paste_and_resize_convert() {
    assert_eq!(
        into_input_event(ct::Event::Paste("milk".to_string())),
        InputEvent::Paste("milk".to_string())
    );
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );
}

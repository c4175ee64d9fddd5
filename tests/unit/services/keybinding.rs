use super::*;
use crate::services::settings::KeybindingRule;

fn rule(key: &str, command: &str, context: Option<&str>) -> KeybindingRule {
    KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: context.map(str::to_string),
    }
}

#[test]
fn quit_is_global() {
    let service = KeybindingService::new();
    let ctrl_c = Key::ctrl(KeyCode::Char('c'));
    for ctx in [
        KeybindingContext::Global,
        KeybindingContext::Input,
        KeybindingContext::List,
    ] {
        assert_eq!(service.resolve(ctx, &ctrl_c), Some(Command::Quit));
    }
}

#[test]
fn enter_depends_on_context() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(
        service.resolve(KeybindingContext::Input, &enter),
        Some(Command::Submit)
    );
    assert_eq!(
        service.resolve(KeybindingContext::List, &enter),
        Some(Command::ToggleSelected)
    );
    assert_eq!(service.resolve(KeybindingContext::Global, &enter), None);
}

#[test]
fn plain_letters_are_free_in_input() {
    let service = KeybindingService::new();
    for ch in ['j', 'k', 'd', 'q', 'a', ' '] {
        assert_eq!(
            service.resolve(KeybindingContext::Input, &Key::char(ch)),
            None,
            "{ch:?} must stay typeable"
        );
    }
}

#[test]
fn list_navigation_defaults() {
    let service = KeybindingService::new();
    let list = KeybindingContext::List;
    assert_eq!(service.resolve(list, &Key::char('j')), Some(Command::SelectNext));
    assert_eq!(service.resolve(list, &Key::char('k')), Some(Command::SelectPrev));
    assert_eq!(
        service.resolve(list, &Key::char(' ')),
        Some(Command::ToggleSelected)
    );
    assert_eq!(
        service.resolve(list, &Key::char('d')),
        Some(Command::DeleteSelected)
    );
    assert_eq!(service.resolve(list, &Key::char('i')), Some(Command::FocusInput));
}

#[test]
fn context_binding_shadows_global() {
    let mut service = KeybindingService::new();
    let tab = Key::simple(KeyCode::Tab);
    service.bind(KeybindingContext::List, tab, Command::SelectNext);

    assert_eq!(
        service.resolve(KeybindingContext::List, &tab),
        Some(Command::SelectNext)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Input, &tab),
        Some(Command::ToggleFocus)
    );
}

#[test]
fn unbind_removes_only_that_context() {
    let mut service = KeybindingService::new();
    let del = Key::simple(KeyCode::Delete);
    assert_eq!(
        service.unbind(KeybindingContext::List, &del),
        Some(Command::DeleteSelected)
    );
    assert_eq!(service.resolve(KeybindingContext::List, &del), None);
    assert_eq!(
        service.resolve(KeybindingContext::Input, &del),
        Some(Command::DeleteForward)
    );
}

#[test]
fn keys_for_command_prefers_short_spellings() {
    let service = KeybindingService::new();
    let keys = service.keys_for_command(KeybindingContext::List, Command::DeleteSelected);
    assert_eq!(keys.first(), Some(&Key::char('d')));
    assert!(keys.contains(&Key::simple(KeyCode::Delete)));
}

#[test]
fn keys_for_command_includes_global_fallbacks() {
    let service = KeybindingService::new();
    let keys = service.keys_for_command(KeybindingContext::Input, Command::Quit);
    assert!(keys.contains(&Key::ctrl(KeyCode::Char('c'))));
    assert!(keys.contains(&Key::ctrl(KeyCode::Char('q'))));
}

#[test]
fn keys_for_command_skips_shadowed_globals() {
    let mut service = KeybindingService::new();
    let tab = Key::simple(KeyCode::Tab);
    service.bind(KeybindingContext::List, tab, Command::SelectNext);
    let keys = service.keys_for_command(KeybindingContext::List, Command::ToggleFocus);
    assert!(!keys.contains(&tab));
}

#[test]
fn apply_rules_binds_and_skips_invalid() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        rule("ctrl+d", "delete_selected", None),
        rule("x", "toggleSelected", Some("list")),
        rule("ctrl+bogus", "quit", None),
        rule("ctrl+k", "no_such_command", None),
        rule("ctrl+k", "quit", Some("nowhere")),
    ]);

    assert_eq!(applied, 2);
    assert_eq!(
        service.resolve(KeybindingContext::Input, &Key::ctrl(KeyCode::Char('d'))),
        Some(Command::DeleteSelected)
    );
    assert_eq!(
        service.resolve(KeybindingContext::List, &Key::char('x')),
        Some(Command::ToggleSelected)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('k'))),
        None
    );
}

#[test]
fn apply_rules_can_unbind() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[rule("q", "-quit", Some("list"))]);
    assert_eq!(applied, 1);
    assert_eq!(service.resolve(KeybindingContext::List, &Key::char('q')), None);
}

#[test]
fn context_names_parse() {
    assert_eq!(
        KeybindingContext::parse(" List "),
        Some(KeybindingContext::List)
    );
    assert_eq!(
        KeybindingContext::parse("input"),
        Some(KeybindingContext::Input)
    );
    assert_eq!(
        KeybindingContext::parse("global"),
        Some(KeybindingContext::Global)
    );
    assert_eq!(KeybindingContext::parse("editor"), None);
}

#[test]
fn empty_service_resolves_nothing() {
    let service = KeybindingService::empty();
    assert_eq!(
        service.resolve(KeybindingContext::Input, &Key::ctrl(KeyCode::Char('c'))),
        None
    );
}

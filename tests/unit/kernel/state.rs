use super::*;

fn state_with(texts: &[&str]) -> TodoState {
    let mut state = TodoState::new();
    for text in texts {
        state.add_task(text);
    }
    state
}

fn ids(state: &TodoState) -> Vec<TaskId> {
    state.tasks().iter().map(|t| t.id).collect()
}

#[test]
fn add_task_appends_trimmed_incomplete_task_and_clears_input() {
    let mut state = TodoState::new();
    state.set_pending_input("Buy milk");

    let id = state.submit_pending().unwrap();

    assert_eq!(state.tasks().len(), 1);
    let task = &state.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.text, "Buy milk");
    assert!(!task.completed);
    assert_eq!(state.pending_input(), "");
    assert_eq!(state.input_cursor(), 0);
}

#[test]
fn add_task_trims_surrounding_whitespace() {
    let mut state = TodoState::new();
    state.add_task("   walk the dog  ");
    assert_eq!(state.tasks()[0].text, "walk the dog");
}

#[test]
fn whitespace_only_add_is_a_no_op() {
    let mut state = TodoState::new();
    state.set_pending_input("   ");

    assert!(state.submit_pending().is_none());
    assert!(state.add_task("\t \n").is_none());

    assert!(state.tasks().is_empty());
    // The rejected input stays in the field.
    assert_eq!(state.pending_input(), "   ");
}

#[test]
fn pending_input_is_stored_verbatim() {
    let mut state = TodoState::new();
    assert!(state.set_pending_input("  x  "));
    assert_eq!(state.pending_input(), "  x  ");
    assert_eq!(state.input_cursor(), 5);
    assert!(!state.set_pending_input("  x  "));

    state.submit_pending();
    assert_eq!(state.tasks()[0].text, "x");
}

#[test]
fn new_tasks_are_appended_in_order_with_distinct_ids() {
    let state = state_with(&["a", "b", "c", "d"]);
    let texts: Vec<&str> = state.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c", "d"]);

    let mut all = ids(&state);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut state = state_with(&["a", "b"]);
    let last = state.tasks()[1].id;
    state.delete_task(last);
    let fresh = state.add_task("c").unwrap();
    assert_ne!(fresh, last);
}

#[test]
fn toggle_twice_restores_completed_flag() {
    let mut state = state_with(&["a", "b"]);
    let id = state.tasks()[1].id;

    assert!(state.toggle_task(id));
    assert!(state.task(id).unwrap().completed);
    assert!(state.toggle_task(id));
    assert!(!state.task(id).unwrap().completed);
    assert_eq!(ids(&state)[1], id);
}

#[test]
fn delete_removes_only_that_task_and_keeps_order() {
    let mut state = state_with(&["a", "b", "c", "d"]);
    let before = ids(&state);

    assert!(state.delete_task(before[1]));

    assert_eq!(ids(&state), vec![before[0], before[2], before[3]]);
}

#[test]
fn unknown_ids_leave_the_list_untouched() {
    let mut state = state_with(&["a", "b"]);
    state.toggle_task(state.tasks()[0].id);
    let before = state.tasks().to_vec();

    assert!(!state.toggle_task(TaskId::raw(999)));
    assert!(!state.delete_task(TaskId::raw(999)));

    assert_eq!(state.tasks(), before.as_slice());
}

#[test]
fn input_editing_respects_caret_position() {
    let mut state = TodoState::new();
    for ch in "helo".chars() {
        state.insert_char(ch);
    }
    state.cursor_left();
    state.insert_char('l');
    assert_eq!(state.pending_input(), "hello");
    assert_eq!(state.input_cursor(), 4);

    state.cursor_home();
    assert!(!state.cursor_left());
    assert!(state.delete_forward());
    assert_eq!(state.pending_input(), "ello");

    state.cursor_end();
    assert!(state.backspace());
    assert_eq!(state.pending_input(), "ell");
    assert!(!state.cursor_right());
}

#[test]
fn input_editing_handles_multibyte_chars() {
    let mut state = TodoState::new();
    state.set_pending_input("café ☕");
    state.backspace();
    state.backspace();
    assert_eq!(state.pending_input(), "café");
    state.cursor_left();
    state.insert_char('ﬀ');
    assert_eq!(state.pending_input(), "cafﬀé");
}

#[test]
fn paste_flattens_line_breaks() {
    let mut state = TodoState::new();
    assert!(state.insert_str("one\r\ntwo\tthree"));
    assert_eq!(state.pending_input(), "one two three");
    assert!(!state.insert_str("\r"));
}

#[test]
fn control_chars_are_not_inserted() {
    let mut state = TodoState::new();
    assert!(!state.insert_char('\u{7}'));
    assert_eq!(state.pending_input(), "");
}

#[test]
fn clear_input_resets_caret() {
    let mut state = TodoState::new();
    state.set_pending_input("abc");
    assert!(state.clear_input());
    assert!(!state.clear_input());
    assert_eq!(state.input_cursor(), 0);
}

#[test]
fn focusing_list_selects_first_row() {
    let mut state = state_with(&["a", "b"]);
    assert_eq!(state.selected(), None);

    assert!(state.set_focus(FocusTarget::List));
    assert_eq!(state.selected(), Some(0));

    assert!(state.toggle_focus());
    assert_eq!(state.focus(), FocusTarget::Input);
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn focusing_empty_list_selects_nothing() {
    let mut state = TodoState::new();
    state.set_focus(FocusTarget::List);
    assert_eq!(state.selected(), None);
}

#[test]
fn move_selection_clamps_to_list_bounds() {
    let mut state = state_with(&["a", "b", "c"]);
    state.set_focus(FocusTarget::List);

    assert!(state.move_selection(1));
    assert_eq!(state.selected(), Some(1));
    assert!(state.move_selection(10));
    assert_eq!(state.selected(), Some(2));
    assert!(!state.move_selection(1));
    assert!(state.move_selection(-10));
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn select_row_focuses_list() {
    let mut state = state_with(&["a", "b"]);
    assert!(state.select_row(1));
    assert_eq!(state.focus(), FocusTarget::List);
    assert_eq!(state.selected(), Some(1));
    assert!(!state.select_row(5));
}

#[test]
fn deleting_last_selected_row_clamps_selection() {
    let mut state = state_with(&["a", "b", "c"]);
    state.select_row(2);

    state.delete_task(state.tasks()[2].id);

    assert_eq!(state.selected(), Some(1));
}

#[test]
fn deleting_row_above_selection_keeps_same_task_selected() {
    let mut state = state_with(&["a", "b", "c"]);
    state.select_row(2);
    let selected_id = state.selected_task().unwrap().id;

    state.delete_task(state.tasks()[0].id);

    assert_eq!(state.selected_task().unwrap().id, selected_id);
}

#[test]
fn emptying_list_clears_selection() {
    let mut state = state_with(&["a"]);
    state.select_row(0);
    state.delete_task(state.tasks()[0].id);
    assert_eq!(state.selected(), None);
    assert!(state.selected_task().is_none());
}

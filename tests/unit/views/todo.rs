use super::*;

fn task(id: u64, text: &str, completed: bool) -> Task {
    Task {
        id: TaskId::raw(id),
        text: text.to_string(),
        completed,
    }
}

#[test]
fn empty_list_shows_empty_state_only() {
    let tree = build(&[], "", &ViewConfig::default());

    assert_eq!(tree.header.title, "My Todo List");
    assert_eq!(tree.header.subtitle, "Stay organized and get things done");
    assert!(tree.stats.is_none());
    assert!(tree.progress.is_none());
    match tree.list {
        TaskList::Empty(empty) => {
            assert_eq!(empty.headline, "No tasks yet");
            assert_eq!(empty.hint, "Add your first task above to get started!");
        }
        TaskList::Rows(_) => panic!("expected empty state"),
    }
}

#[test]
fn stats_label_is_singular_for_one_task() {
    let tree = build(&[task(1, "a", false)], "", &ViewConfig::default());
    let stats = tree.stats.expect("stats");
    assert_eq!(stats.total_label, "1 task total");
    assert_eq!(stats.completed_label, "0 completed");
}

#[test]
fn stats_label_is_plural_otherwise() {
    let tasks = [task(1, "a", true), task(2, "b", false)];
    let tree = build(&tasks, "", &ViewConfig::default());
    let stats = tree.stats.expect("stats");
    assert_eq!(stats.total_label, "2 tasks total");
    assert_eq!(stats.completed_label, "1 completed");
}

#[test]
fn progress_reports_rounded_percent() {
    let tasks = [
        task(1, "a", true),
        task(2, "b", false),
        task(3, "c", false),
        task(4, "d", false),
    ];
    let progress = build(&tasks, "", &ViewConfig::default())
        .progress
        .expect("progress");
    assert_eq!(progress.label, "Progress");
    assert_eq!(progress.percent_label, "25%");
    assert!((progress.ratio - 0.25).abs() < f64::EPSILON);

    let thirds = [task(1, "a", true), task(2, "b", false), task(3, "c", false)];
    let progress = build(&thirds, "", &ViewConfig::default())
        .progress
        .expect("progress");
    assert_eq!(progress.percent_label, "33%");
}

#[test]
fn rows_follow_task_order() {
    let tasks = [task(3, "first", false), task(1, "second", true)];
    let tree = build(&tasks, "", &ViewConfig::default());
    let TaskList::Rows(rows) = tree.list else {
        panic!("expected rows");
    };
    assert_eq!(
        rows,
        vec![
            TaskRow {
                id: TaskId::raw(3),
                text: "first".to_string(),
                completed: false,
            },
            TaskRow {
                id: TaskId::raw(1),
                text: "second".to_string(),
                completed: true,
            },
        ]
    );
}

#[test]
fn input_row_mirrors_pending_text() {
    let tree = build(&[], "  milk ", &ViewConfig::default());
    assert_eq!(tree.input.text, "  milk ");
    assert_eq!(tree.input.placeholder, "Add a new task...");
    assert_eq!(tree.input.add_label, "+ Add");
    assert!(tree.input.submit_enabled);
}

#[test]
fn submit_is_disabled_for_blank_input() {
    assert!(!build(&[], "", &ViewConfig::default()).input.submit_enabled);
    assert!(!build(&[], " \t ", &ViewConfig::default()).input.submit_enabled);
}

#[test]
fn config_overrides_texts() {
    let config = ViewConfig {
        title: "Groceries".to_string(),
        placeholder: "What do we need?".to_string(),
        ..ViewConfig::default()
    };
    let tree = build(&[], "", &config);
    assert_eq!(tree.header.title, "Groceries");
    assert_eq!(tree.input.placeholder, "What do we need?");
}

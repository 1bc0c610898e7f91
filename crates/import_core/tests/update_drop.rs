use std::sync::Once;

use import_core::{
    select_dropped_file, update, DroppedFile, Effect, ImportSession, Msg, NotifyKind,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

#[test]
fn only_html_files_are_accepted() {
    assert!(DroppedFile::from_path("/tmp/page.html").is_accepted());
    assert!(DroppedFile::from_path("/tmp/PAGE.HTM").is_accepted());
    assert!(DroppedFile::from_path("/tmp/blob").with_mime("text/html; charset=utf-8").is_accepted());
    assert!(!DroppedFile::from_path("/tmp/notes.txt").is_accepted());
    assert!(!DroppedFile::from_path("/tmp/html").is_accepted());
}

#[test]
fn first_accepted_file_wins() {
    let files = vec![
        DroppedFile::from_path("/tmp/a.png"),
        DroppedFile::from_path("/tmp/b.html"),
        DroppedFile::from_path("/tmp/c.htm"),
    ];
    let picked = select_dropped_file(&files).expect("accepted file");
    assert_eq!(picked.name, "b.html");
}

#[test]
fn drop_clears_dragging_and_requests_read() {
    init_logging();
    let (state, _) = update(ImportSession::new(), Msg::DragEntered);
    assert!(state.is_dragging());

    let file = DroppedFile::from_path("/tmp/page.html");
    let (state, effects) = update(state, Msg::FilesDropped(vec![file.clone()]));
    assert!(!state.is_dragging());
    assert!(!state.is_busy());
    assert_eq!(effects, vec![Effect::ReadFile(file)]);
}

#[test]
fn empty_drop_leaves_buffer_unchanged() {
    init_logging();
    let (state, _) = update(ImportSession::new(), Msg::TextChanged("keep".to_string()));
    let (state, effects) = update(state, Msg::FilesDropped(Vec::new()));
    assert_eq!(state.text(), "keep");
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::FilesDropped(vec![DroppedFile::from_path("/tmp/readme.md")]),
    );
    assert_eq!(state.text(), "keep");
    assert!(effects.is_empty());
}

#[test]
fn file_read_replaces_whole_buffer() {
    init_logging();
    let (state, _) = update(ImportSession::new(), Msg::TextChanged("old text".to_string()));
    let (state, effects) = update(
        state,
        Msg::FileRead {
            name: "page.html".to_string(),
            result: Ok("<p>hi</p>".to_string()),
        },
    );
    assert_eq!(state.text(), "<p>hi</p>");
    assert!(effects.is_empty());
}

#[test]
fn unreadable_file_notifies_and_keeps_buffer() {
    init_logging();
    let (state, _) = update(ImportSession::new(), Msg::TextChanged("old".to_string()));
    let (state, effects) = update(
        state,
        Msg::FileRead {
            name: "page.html".to_string(),
            result: Err("permission denied".to_string()),
        },
    );
    assert_eq!(state.text(), "old");
    assert_eq!(
        effects,
        vec![Effect::Notify {
            kind: NotifyKind::Error,
            message: "Could not read page.html: permission denied".to_string(),
        }]
    );
}

#[test]
fn drag_left_clears_flag() {
    let (state, _) = update(ImportSession::new(), Msg::DragEntered);
    let (state, _) = update(state, Msg::DragLeft);
    assert!(!state.view().dragging);
}

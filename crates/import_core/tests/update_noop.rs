use import_core::{update, ImportSession, Msg};

#[test]
fn update_is_noop() {
    let state = ImportSession::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

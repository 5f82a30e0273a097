use super::*;

#[test]
fn test_progress_display_tracks_memory() {
    let mut engine = composer();
    assert_eq!(engine.progress_display(), "");

    engine.type_letter('w').unwrap();
    assert_eq!(engine.progress_display(), "田");

    engine.type_letter('i').unwrap();
    assert_eq!(engine.progress_display(), "田戈");

    engine.type_letter('r').unwrap();
    engine.type_letter('m').unwrap();
    assert_eq!(engine.progress_display(), "田戈口一");
}

#[test]
fn test_progress_display_shrinks_on_backspace() {
    let mut engine = composer();
    type_all(&mut engine, "wir");
    engine.backspace().unwrap();
    assert_eq!(engine.progress_display(), "田戈");
}

#[test]
fn test_progress_display_shows_dead_end_letters() {
    // The progress display follows memory, not the preview: a dead-end
    // letter still shows up as its radical.
    let mut engine = composer();
    type_all(&mut engine, "wix");
    assert_eq!(engine.progress_display(), "田戈難");
}

#[test]
fn test_progress_display_clears_on_commit() {
    let mut engine = composer();
    type_all(&mut engine, "wi");
    engine.commit_now().unwrap();
    assert_eq!(engine.progress_display(), "");
}

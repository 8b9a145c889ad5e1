use pattern_recipe::editor::{Document, EditCommand, EditorError, TextEditor};

const SAMPLE: &str = "The quick brown fox";

/// The canonical scenario: build "Hello World", undo the second insert, redo it.
#[test]
fn test_hello_world_undo_redo() {
    let mut editor = TextEditor::new();

    editor.execute(EditCommand::insert("Hello", 0)).unwrap();
    assert_eq!(editor.content(), "Hello");

    editor.execute(EditCommand::insert(" World", 5)).unwrap();
    assert_eq!(editor.content(), "Hello World");

    assert!(editor.undo().unwrap());
    assert_eq!(editor.content(), "Hello");

    assert!(editor.redo().unwrap());
    assert_eq!(editor.content(), "Hello World");
}

#[test]
fn test_insert_then_undo_restores_every_position() {
    let len = Document::from(SAMPLE).len();
    for position in 0..=len {
        let mut editor = TextEditor::with_document(SAMPLE);
        editor.insert("[ins]", position).unwrap();
        assert_ne!(editor.content(), SAMPLE);

        editor.undo().unwrap();
        assert_eq!(editor.content(), SAMPLE, "insert at {position} not undone");
    }
}

#[test]
fn test_delete_then_undo_restores_every_span() {
    let len = Document::from(SAMPLE).len();
    for position in 0..=len {
        for length in 0..=(len - position) {
            let mut editor = TextEditor::with_document(SAMPLE);
            editor.delete(position, length).unwrap();

            editor.undo().unwrap();
            assert_eq!(
                editor.content(),
                SAMPLE,
                "delete of {length} at {position} not undone"
            );
        }
    }
}

#[test]
fn test_undo_then_redo_is_idempotent() {
    let mut editor = TextEditor::with_document(SAMPLE);
    editor.delete(4, 6).unwrap();
    editor.insert("slow ", 4).unwrap();
    let edited = editor.content().to_string();

    editor.undo().unwrap();
    editor.redo().unwrap();
    assert_eq!(editor.content(), edited);

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.content(), SAMPLE);
    editor.redo().unwrap();
    editor.redo().unwrap();
    assert_eq!(editor.content(), edited);
    assert_eq!(editor.content(), "The slow brown fox");
}

#[test]
fn test_execute_after_undo_discards_redo() {
    let mut editor = TextEditor::new();
    editor.insert("Hello", 0).unwrap();
    editor.insert(" World", 5).unwrap();
    editor.undo().unwrap();
    assert!(editor.can_redo());

    editor.insert("!", 5).unwrap();
    assert!(!editor.can_redo());
    assert!(editor.redo_stack().is_empty());

    assert!(!editor.redo().unwrap(), "redo should be a no-op");
    assert_eq!(editor.content(), "Hello!");
}

#[test]
fn test_delete_past_end_fails_and_keeps_buffer() {
    let mut editor = TextEditor::with_document("Hello");
    editor.insert(" World", 5).unwrap();
    editor.undo().unwrap();

    let err = editor.delete(3, 10).unwrap_err();
    assert_eq!(
        err,
        EditorError::OutOfRange {
            position: 3,
            length: 10,
            len: 5
        }
    );
    assert_eq!(editor.content(), "Hello");

    // A failed command is not recorded and does not drop the redo chain
    assert!(editor.history().is_empty());
    assert!(editor.can_redo());
}

#[test]
fn test_insert_past_end_fails() {
    let mut editor = TextEditor::new();
    let result = editor.execute(EditCommand::insert("x", 1));
    assert!(matches!(result, Err(EditorError::OutOfRange { position: 1, .. })));
    assert_eq!(editor.content(), "");
    assert!(!editor.can_undo());
}

#[test]
fn test_undo_redo_on_empty_stacks_are_noops() {
    let mut editor = TextEditor::with_document("unchanged");
    assert!(!editor.undo().unwrap());
    assert!(!editor.redo().unwrap());
    assert_eq!(editor.content(), "unchanged");
}

#[test]
fn test_delete_returns_and_records_removed_text() {
    let mut editor = TextEditor::with_document("Hello World");
    let removed = editor.delete(5, 6).unwrap();
    assert_eq!(removed, " World");

    let last = editor.history().last().unwrap();
    assert_eq!(last.removed(), Some(" World"));

    editor.undo().unwrap();
    assert_eq!(editor.redo_stack().len(), 1);
    assert_eq!(editor.content(), "Hello World");
}

#[test]
fn test_multibyte_text_round_trips() {
    let mut editor = TextEditor::with_document("naïve café");
    editor.delete(2, 3).unwrap();
    assert_eq!(editor.content(), "na café");

    editor.insert("ïv€", 2).unwrap();
    assert_eq!(editor.content(), "naïv€ café");

    editor.undo().unwrap();
    editor.undo().unwrap();
    assert_eq!(editor.content(), "naïve café");
}

#[test]
fn test_history_serializes_with_kind_tags() {
    let mut editor = TextEditor::with_document("abc");
    editor.insert("x", 0).unwrap();
    editor.delete(1, 2).unwrap();

    let json = serde_json::to_value(editor.history()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "insert", "text": "x", "position": 0 },
            { "kind": "delete", "position": 1, "length": 2, "removed": "ab" },
        ])
    );

    // An unapplied delete has nothing captured yet
    let pending = serde_json::to_value(EditCommand::delete(0, 1)).unwrap();
    assert_eq!(pending, serde_json::json!({ "kind": "delete", "position": 0, "length": 1 }));
}

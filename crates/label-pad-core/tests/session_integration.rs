// End-to-end editing scenarios against EditSession, the way a view layer
// drives it: one call per user action, then render the returned state.

use label_pad_config::{EditorConfig, HexColor};
use label_pad_core::history::{EditError, Position};
use label_pad_core::EditSession;

fn default_session() -> EditSession {
    EditSession::from_config(&EditorConfig::default()).unwrap()
}

#[test]
fn test_type_undo_redo_text() {
    let mut session = default_session();

    let state = session.set_text("Hi");
    assert_eq!(state.snapshot.content(), "Hi");
    assert!(state.can_undo);

    let state = session.undo();
    assert_eq!(state.snapshot.content(), "Type your text here");

    let state = session.redo();
    assert_eq!(state.snapshot.content(), "Hi");
}

#[test]
fn test_new_edit_after_undo_drops_redo_branch() {
    let mut session = default_session();
    session.set_text("Hi");
    session.undo();

    let state = session.set_color("#ff0000").unwrap();
    assert!(!state.can_redo);
    assert_eq!(session.history().len(), 2);
    assert_eq!(state.snapshot.content(), "Type your text here");
    assert_eq!(state.snapshot.style().color(), HexColor::rgb(255, 0, 0));
}

#[test]
fn test_zero_font_size_rejected_without_side_effects() {
    let mut session = default_session();
    session.set_text("Hi");
    session.set_font_size(36).unwrap();
    let before = session.current().clone();
    let entries_before = session.history().entries().to_vec();

    let err = session.set_font_size(0).unwrap_err();
    assert!(matches!(err, EditError::InvalidFontSize(_)));
    assert_eq!(session.current(), &before);
    assert_eq!(session.history().entries(), entries_before.as_slice());
}

#[test]
fn test_drag_then_undo_restores_fractional_position() {
    let mut session = default_session();
    session.set_position(7.25, -3.5).unwrap();
    let prior = session.current().position();

    session.set_position(120.5, 40.0).unwrap();
    assert_eq!(session.current().position(), Position::new(120.5, 40.0).unwrap());

    session.undo();
    let restored = session.current().position();
    assert_eq!(restored.x(), prior.x());
    assert_eq!(restored.y(), prior.y());
}

#[test]
fn test_mixed_edits_walk_back_in_order() {
    let mut session = default_session();
    session.set_text("Sale");
    session.set_font_family("Times New Roman").unwrap();
    session.set_font_size(64).unwrap();
    session.set_position(300.0, 150.0).unwrap();
    session.set_color("#336699").unwrap();

    let state = session.undo();
    assert_eq!(state.snapshot.style().color(), HexColor::BLACK);
    let state = session.undo();
    assert_eq!(state.snapshot.position(), Position::ORIGIN);
    let state = session.undo();
    assert_eq!(state.snapshot.style().font_size().get(), 20);
    let state = session.undo();
    assert_eq!(state.snapshot.style().font_family(), "Arial");
    let state = session.undo();
    assert_eq!(state.snapshot.content(), "Type your text here");
    assert!(!state.can_undo);
    assert_eq!(session.history().redo_depth(), 5);
}

#[test]
fn test_custom_config_allow_list_enforced() {
    let config = EditorConfig {
        initial_font_family: "Courier".to_string(),
        allowed_font_families: vec!["Courier".to_string(), "Georgia".to_string()],
        ..EditorConfig::default()
    };
    let mut session = EditSession::from_config(&config).unwrap();
    assert!(session.set_font_family("Georgia").is_ok());
    assert!(session.set_font_family("Arial").is_err());
}

#[test]
fn test_bounded_history_from_config() {
    let config = EditorConfig {
        max_history_depth: 3,
        ..EditorConfig::default()
    };
    let mut session = EditSession::from_config(&config).unwrap();
    for text in ["a", "b", "c", "d", "e"] {
        session.set_text(text);
    }
    assert_eq!(session.history().len(), 3);
    session.undo();
    session.undo();
    assert!(!session.can_undo());
    assert_eq!(session.current().content(), "c");
}

#[test]
fn test_empty_text_is_a_valid_edit() {
    let mut session = default_session();
    let state = session.set_text("");
    assert_eq!(state.snapshot.content(), "");
    assert!(state.can_undo);
}

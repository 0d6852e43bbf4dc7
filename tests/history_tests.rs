//! Undo/redo history laws and editor scenarios driven through the public API.

mod fixtures;
use fixtures::*;

use emoty::app::{Intent, IntentQueue, Outcome, Politeness};
use emoty::models::PatternMode;
use emoty::services::{append_emoji, PatternHistory};

// ============================================================================
// History laws
// ============================================================================

#[test]
fn test_record_then_undo_restores_previous() {
    let s0 = concentric(&["😀"]);
    let s1 = append_emoji(&s0, "😎");
    let mut history = PatternHistory::new(s0.clone());

    history.record_and_apply(s1.clone());
    assert!(history.undo());

    assert_eq!(history.current(), &s0);
    assert_eq!(history.peek_redo(), Some(&s1));
}

#[test]
fn test_new_branch_discards_redo() {
    let s0 = concentric(&[]);
    let s1 = concentric(&["😀"]);
    let s2 = concentric(&["😎"]);
    let mut history = PatternHistory::new(s0);

    history.record_and_apply(s1);
    history.undo();
    history.record_and_apply(s2.clone());

    assert!(!history.can_redo());
    assert!(!history.redo());
    assert_eq!(history.current(), &s2);
}

#[test]
fn test_undo_redo_on_empty_stacks_are_noops() {
    let s0 = concentric(&SMILEYS);
    let mut history = PatternHistory::new(s0.clone());

    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history.current(), &s0);
    assert_eq!(history.path_len(), 1);
}

#[test]
fn test_path_length_tracks_visited_states() {
    let mut history = PatternHistory::default();
    let mut state = history.current().clone();
    for emoji in SMILEYS {
        state = append_emoji(&state, emoji);
        history.record_and_apply(state.clone());
    }
    assert_eq!(history.path_len(), 4);

    history.undo();
    history.undo();
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 2);
    assert_eq!(history.path_len(), 4);
}

// ============================================================================
// Editor scenarios
// ============================================================================

#[test]
fn test_clear_undo_redo_scenario() {
    let mut editor = editor();
    let mut log = log();
    for emoji in SMILEYS {
        editor.dispatch(Intent::SelectEmoji(emoji.into()), &mut log);
    }
    let full = editor.current().clone();
    assert_eq!(full.len(), 3);

    assert_eq!(editor.dispatch(Intent::ClearPattern, &mut log), Outcome::PatternChanged);
    assert!(editor.current().is_empty());
    assert_eq!(editor.selected_emoji(), None);

    editor.dispatch(Intent::Undo, &mut log);
    assert_eq!(editor.current(), &full);

    editor.dispatch(Intent::Redo, &mut log);
    assert!(editor.current().is_empty());
    assert_eq!(editor.current().pattern_mode(), PatternMode::Concentric);
}

#[test]
fn test_canvas_tap_needs_selection() {
    let mut editor = editor();
    let mut log = log();

    let outcome = editor.dispatch(Intent::CanvasTap { row: 0, col: 0 }, &mut log);
    assert_eq!(outcome, Outcome::Unchanged);
    assert!(editor.current().is_empty());
    assert_eq!(log.latest().map(|a| a.politeness), Some(Politeness::Assertive));

    editor.dispatch(Intent::SelectEmoji("😀".into()), &mut log);
    let outcome = editor.dispatch(Intent::CanvasTap { row: 0, col: 0 }, &mut log);
    assert_eq!(outcome, Outcome::PatternChanged);
    assert_eq!(editor.current().sequence(), seq(&["😀", "😀"]));
}

#[test]
fn test_share_and_ai_leave_history_alone() {
    let mut editor = editor();
    let mut log = log();
    editor.dispatch(Intent::SelectEmoji("😀".into()), &mut log);
    let depth = editor.history().undo_depth();

    editor.dispatch(Intent::Share, &mut log);
    editor.dispatch(Intent::AiGenerate, &mut log);

    assert_eq!(editor.history().undo_depth(), depth);
    assert_eq!(editor.current().len(), 1);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_queue_dispatches_in_posting_order() {
    let mut editor = editor();
    let mut log = log();
    let queue = IntentQueue::new();
    let sender = queue.sender();

    assert!(sender.post(Intent::SelectEmoji("😀".into())));
    queue.post(Intent::SelectEmoji("😎".into()));
    assert!(sender.post(Intent::Undo));

    let outcomes = queue.dispatch_pending(&mut editor, &mut log);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(editor.current().sequence(), seq(&["😀"]));
    assert_eq!(editor.history().redo_depth(), 1);
}

#[test]
fn test_sender_from_another_thread() {
    let mut editor = editor();
    let mut log = log();
    let queue = IntentQueue::new();
    let sender = queue.sender();

    std::thread::spawn(move || {
        sender.post(Intent::SelectEmoji("🥳".into()));
    })
    .join()
    .unwrap();

    queue.dispatch_pending(&mut editor, &mut log);
    assert_eq!(editor.current().sequence(), seq(&["🥳"]));
}

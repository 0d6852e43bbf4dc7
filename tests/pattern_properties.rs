//! Property tests for the pattern generator and history.

mod fixtures;
use fixtures::*;

use emoty::models::{PatternMode, PatternState};
use emoty::services::{
    append_emoji, create_pattern_state, generate, generate_concentric_pattern, generate_with_fill,
    FillPolicy, PatternHistory,
};
use proptest::prelude::*;

fn emoji() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["😀", "😎", "🥳", "❤️", "🌟", "👨‍👩‍👧", "🇫🇷", ""])
        .prop_map(String::from)
}

fn sequence(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(emoji(), 0..max)
}

#[derive(Debug, Clone)]
enum HistoryOp {
    Record(String),
    Undo,
    Redo,
}

fn history_op() -> impl Strategy<Value = HistoryOp> {
    prop_oneof![
        emoji().prop_map(HistoryOp::Record),
        Just(HistoryOp::Undo),
        Just(HistoryOp::Redo),
    ]
}

/// Visited path plus a position on it; recording truncates everything after.
struct LinearModel {
    path: Vec<PatternState>,
    position: usize,
}

impl LinearModel {
    fn new(initial: PatternState) -> Self {
        Self {
            path: vec![initial],
            position: 0,
        }
    }

    fn record(&mut self, next: PatternState) {
        self.path.truncate(self.position + 1);
        self.path.push(next);
        self.position += 1;
    }

    fn undo(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    fn redo(&mut self) -> bool {
        if self.position + 1 == self.path.len() {
            return false;
        }
        self.position += 1;
        true
    }
}

fn mode() -> impl Strategy<Value = PatternMode> {
    prop_oneof![Just(PatternMode::Concentric), Just(PatternMode::Sequential)]
}

#[test]
fn test_empty_sequence_has_no_cells() {
    let grid = generate_concentric_pattern::<String>(&[]);
    assert!(grid.is_empty());
    assert_eq!(grid.cells().count(), 0);
}

#[test]
fn test_single_emoji_is_the_centre() {
    let grid = generate_concentric_pattern(&["😀"]);
    let cells: Vec<_> = grid.cells().collect();
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].layer, 0);
    assert!(cells[0].is_center);
}

#[test]
fn test_last_appended_emoji_is_the_centre() {
    let grid = generate(&concentric(&["😀", "😎"]));
    assert_eq!(grid.size(), 3);

    let outer = grid.cells().find(|c| c.emoji == "😀").unwrap();
    let inner = grid.cells().find(|c| c.emoji == "😎").unwrap();
    assert_eq!(outer.layer, 1);
    assert!(!outer.is_center);
    assert_eq!(inner.layer, 0);
    assert_eq!((inner.row, inner.col), (1, 1));
}

proptest! {
    #[test]
    fn prop_one_cell_per_emoji(seq in sequence(12), mode in mode()) {
        let state = create_pattern_state(seq.clone(), mode);
        let grid = generate(&state);
        prop_assert_eq!(grid.filled_count(), seq.len());
    }

    #[test]
    fn prop_centre_exists_iff_non_empty(seq in sequence(12)) {
        let grid = generate(&create_pattern_state(seq.clone(), PatternMode::Concentric));
        let centres = grid.cells().filter(|c| c.is_center).count();
        prop_assert_eq!(centres, usize::from(!seq.is_empty()));
    }

    #[test]
    fn prop_layers_follow_reverse_insertion(seq in sequence(12)) {
        let grid = generate_concentric_pattern(&seq);
        let n = seq.len();
        if n > 0 {
            prop_assert_eq!(grid.size(), 2 * n - 1);
        }
        for cell in grid.cells() {
            prop_assert!(cell.layer < n);
            prop_assert_eq!(cell.is_center, cell.layer == 0);
            let index = n - 1 - cell.layer;
            prop_assert_eq!(&cell.emoji, &seq[index]);
            let center = n - 1;
            prop_assert_eq!((cell.row, cell.col), (center - cell.layer, center - cell.layer));
        }
    }

    #[test]
    fn prop_perimeter_fill_covers_whole_grid(seq in sequence(8)) {
        let state = create_pattern_state(seq.clone(), PatternMode::Concentric);
        let grid = generate_with_fill(&state, FillPolicy::Perimeter);
        let side = grid.size();
        prop_assert_eq!(grid.filled_count(), side * side);
        for cell in grid.cells() {
            let center = seq.len() - 1;
            let ring = cell.row.abs_diff(center).max(cell.col.abs_diff(center));
            prop_assert_eq!(cell.layer, ring);
        }
    }

    #[test]
    fn prop_state_keeps_sequence(seq in sequence(16), mode in mode()) {
        let state = create_pattern_state(seq.clone(), mode);
        prop_assert_eq!(state.sequence(), seq.as_slice());
        prop_assert_eq!(state.insertion_index(), seq.len());
        prop_assert_eq!(state.pattern_mode(), mode);
        prop_assert_eq!(state.active_insertion_mode(), mode);
    }

    #[test]
    fn prop_sequential_grid_is_row_major(seq in sequence(20)) {
        let state = create_pattern_state(seq.clone(), PatternMode::Sequential);
        let grid = generate(&state);
        let side = state.pattern_size();
        prop_assert!(side * side >= seq.len());
        for (index, emoji) in seq.iter().enumerate() {
            let cell = grid.get(index / side, index % side).unwrap();
            prop_assert_eq!(&cell.emoji, emoji);
        }
    }

    #[test]
    fn prop_append_extends_sequence(seq in sequence(10), extra in emoji()) {
        let state = create_pattern_state(seq.clone(), PatternMode::Concentric);
        let next = append_emoji(&state, extra.clone());
        prop_assert_eq!(next.len(), seq.len() + 1);
        prop_assert_eq!(&next.sequence()[..seq.len()], seq.as_slice());
        prop_assert_eq!(next.sequence().last(), Some(&extra));
    }

    #[test]
    fn prop_undo_after_record_restores(a in sequence(6), b in sequence(6)) {
        let s0 = create_pattern_state(a, PatternMode::Concentric);
        let s1 = create_pattern_state(b, PatternMode::Concentric);
        let mut history = PatternHistory::new(s0.clone());

        history.record_and_apply(s1.clone());
        history.undo();
        prop_assert_eq!(history.current(), &s0);
        prop_assert_eq!(history.peek_redo(), Some(&s1));

        history.redo();
        prop_assert_eq!(history.current(), &s1);
    }

    #[test]
    fn prop_undo_count_matches_path(steps in 0usize..12, undos in 0usize..16) {
        let mut history = PatternHistory::default();
        let mut state = history.current().clone();
        for _ in 0..steps {
            state = append_emoji(&state, "😀");
            history.record_and_apply(state.clone());
        }
        for _ in 0..undos {
            history.undo();
        }
        prop_assert_eq!(history.path_len(), steps + 1);
        prop_assert_eq!(history.undo_depth() + history.redo_depth(), steps);
        prop_assert_eq!(history.current().len(), steps.saturating_sub(undos));
    }

    #[test]
    fn prop_history_follows_linear_model(ops in prop::collection::vec(history_op(), 0..60)) {
        let mut history = PatternHistory::default();
        let mut model = LinearModel::new(history.current().clone());

        for op in ops {
            match op {
                HistoryOp::Record(emoji) => {
                    let next = append_emoji(history.current(), emoji);
                    history.record_and_apply(next.clone());
                    model.record(next);
                }
                HistoryOp::Undo => prop_assert_eq!(history.undo(), model.undo()),
                HistoryOp::Redo => prop_assert_eq!(history.redo(), model.redo()),
            }

            prop_assert_eq!(history.current(), &model.path[model.position]);
            prop_assert_eq!(history.path_len(), model.path.len());
            prop_assert_eq!(history.undo_depth(), model.position);
            prop_assert_eq!(
                history.redo_depth(),
                model.path.len() - model.position - 1
            );
            prop_assert_eq!(history.can_undo(), model.position > 0);
            prop_assert_eq!(history.peek_redo(), model.path.get(model.position + 1));
        }
    }
}

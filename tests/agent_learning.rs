//! Move selection and value backup of the learning agent

use std::{collections::HashMap, sync::OnceLock};

use td_tictactoe::{
    BoardKey,
    td_learning::{Agent, AgentParameters, ValueTable, compute_terminal_values},
    tictactoe::{GameState, Mark, Move},
};

fn initial_table() -> ValueTable {
    static TABLE: OnceLock<ValueTable> = OnceLock::new();
    TABLE.get_or_init(compute_terminal_values).clone()
}

fn position(cells: &[(usize, usize)]) -> GameState {
    let mut state = GameState::with_seed(1);
    for &(row, column) in cells {
        assert!(state.apply(Move::new(row, column, state.turn()).unwrap()));
    }
    state
}

fn snapshot(table: &ValueTable) -> HashMap<BoardKey, f64> {
    table.iter().map(|(key, value)| (key.clone(), value)).collect()
}

mod greedy_learning {
    use super::*;

    #[test]
    fn test_x_takes_win_and_backs_up() {
        let table = initial_table().into_shared();
        let mut agent = Agent::new(table.clone(), AgentParameters::learn(0.0, 0.1), Mark::X)
            .unwrap()
            .with_seed(5);
        // X X -
        // O O -
        // - - -
        let mut state = position(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let before = state.canonical_key();

        let mv = agent.try_select_move(&mut state).unwrap();

        assert_eq!((mv.row(), mv.column(), mv.mark()), (0, 2, Mark::X));
        let updated = table.borrow().value(&before).unwrap();
        assert!((updated - 0.55).abs() < 1e-12);
        // The board is probed, not played
        assert_eq!(state.canonical_key(), before);
    }

    #[test]
    fn test_o_minimizes() {
        let table = initial_table().into_shared();
        let mut agent = Agent::new(table.clone(), AgentParameters::learn(0.0, 0.5), Mark::O)
            .unwrap()
            .with_seed(5);
        // X X -
        // O O -
        // X - -
        let mut state = position(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0)]);
        let before = state.canonical_key();

        let mv = agent.try_select_move(&mut state).unwrap();

        assert_eq!((mv.row(), mv.column()), (1, 2));
        let updated = table.borrow().value(&before).unwrap();
        assert!((updated - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_full_exploration_never_backs_up() {
        let table = initial_table().into_shared();
        let original = snapshot(&table.borrow());
        let mut agent = Agent::new(table.clone(), AgentParameters::learn(1.0, 0.5), Mark::X)
            .unwrap()
            .with_seed(13);
        let mut state = position(&[(0, 0), (1, 0), (0, 1), (1, 1)]);

        for _ in 0..20 {
            let mv = agent.try_select_move(&mut state).unwrap();
            assert!(state.is_legal(&mv));
        }

        assert_eq!(snapshot(&table.borrow()), original);
    }
}

mod play_mode {
    use super::*;

    #[test]
    fn test_play_mode_is_deterministic_and_read_only() {
        let table = initial_table().into_shared();
        let original = snapshot(&table.borrow());

        let mut choices = Vec::new();
        for _ in 0..2 {
            let mut agent = Agent::new(table.clone(), AgentParameters::play(), Mark::X)
                .unwrap()
                .with_seed(42);
            let mut state = GameState::with_seed(42);
            let mut picked = Vec::new();
            while state.result().is_none() {
                let mv = if state.turn() == Mark::X {
                    agent.select_move(&mut state)
                } else {
                    state.ordered_legal_moves()[0]
                };
                assert!(state.apply(mv));
                picked.push(mv);
            }
            choices.push(picked);
        }

        assert_eq!(choices[0], choices[1]);
        assert_eq!(snapshot(&table.borrow()), original);
    }

    #[test]
    fn test_full_board_gives_sentinel() {
        let table = initial_table().into_shared();
        let mut agent = Agent::new(table, AgentParameters::play(), Mark::X).unwrap();
        let mut state = position(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);

        assert!(agent.try_select_move(&mut state).is_err());
        let mv = agent.select_move(&mut state);
        assert_eq!((mv.row(), mv.column()), (0, 0));
        assert!(!state.is_legal(&mv));
    }

    #[test]
    fn test_empty_mark_rejected() {
        let table = initial_table().into_shared();
        assert!(Agent::new(table, AgentParameters::play(), Mark::Empty).is_err());
    }
}

//! Board view model: the render surface the egui shell paints each frame.
//!
//! Mutated only through [`BoardView::apply`], [`BoardView::clear`], and
//! [`BoardView::show_connection_error`]. `apply` only ever marks cells;
//! un-marking happens exclusively through the reset path's `clear`, so a
//! stale mark can never be hidden by a sparse incoming board alone.

use shared::domain::{Coord, Mark, Outcome, BOARD_SIZE};
use shared::protocol::GameState;

pub const CONNECTION_ERROR_STATUS: &str = "Error connecting to server";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellView {
    pub mark: Option<Mark>,
    /// Set once the cell has been painted with a mark; taken cells ignore
    /// clicks.
    pub taken: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub winner: bool,
    pub draw: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BoardView {
    cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
    status: StatusView,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, coord: Coord) -> CellView {
        self.cells[coord.row()][coord.col()]
    }

    pub fn status(&self) -> &StatusView {
        &self.status
    }

    /// Paint a server state over the board. Occupied cells are marked
    /// idempotently; cells empty in `state` are left exactly as they are.
    pub fn apply(&mut self, state: &GameState) {
        for coord in Coord::all() {
            if let Some(mark) = state.cell(coord).0 {
                let cell = &mut self.cells[coord.row()][coord.col()];
                cell.mark = Some(mark);
                cell.taken = true;
            }
        }

        match state.outcome() {
            Outcome::Won(mark) => {
                self.status.text = format!("Player {mark} wins!");
                self.status.winner = true;
                self.status.draw = false;
            }
            Outcome::Draw => {
                self.status.text = "It's a draw!".to_string();
                self.status.draw = true;
                self.status.winner = false;
            }
            Outcome::InProgress(mark) => {
                self.status.text = format!("Current player: {mark}");
                self.status.winner = false;
                self.status.draw = false;
            }
        }
    }

    /// Force-clear every cell and all status styling. Runs on reset so no
    /// stale marks survive even if the fresh board is sparse.
    pub fn clear(&mut self) {
        self.cells = Default::default();
        self.status.winner = false;
        self.status.draw = false;
    }

    pub fn show_connection_error(&mut self) {
        self.status.text = CONNECTION_ERROR_STATUS.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Cell;

    fn fresh_state() -> GameState {
        GameState {
            board: Default::default(),
            current_player: Mark::X,
            game_over: false,
            winner: None,
        }
    }

    fn state_with(cells: &[(usize, usize, Mark)], current_player: Mark) -> GameState {
        let mut state = fresh_state();
        for &(row, col, mark) in cells {
            state.board[row][col] = Cell(Some(mark));
        }
        state.current_player = current_player;
        state
    }

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).expect("coordinate in range")
    }

    #[test]
    fn marks_every_occupied_cell_as_taken() {
        let mut view = BoardView::new();
        view.apply(&state_with(&[(0, 0, Mark::X), (1, 1, Mark::O)], Mark::X));

        assert_eq!(
            view.cell(coord(0, 0)),
            CellView {
                mark: Some(Mark::X),
                taken: true
            }
        );
        assert_eq!(
            view.cell(coord(1, 1)),
            CellView {
                mark: Some(Mark::O),
                taken: true
            }
        );
        assert_eq!(view.cell(coord(2, 2)), CellView::default());
    }

    #[test]
    fn applying_a_sparser_state_never_unmarks_cells() {
        let mut view = BoardView::new();
        view.apply(&state_with(&[(0, 0, Mark::X)], Mark::O));

        view.apply(&fresh_state());

        assert_eq!(view.cell(coord(0, 0)).mark, Some(Mark::X));
        assert!(view.cell(coord(0, 0)).taken);
    }

    #[test]
    fn win_state_shows_the_winner_and_drops_any_draw_marker() {
        let mut view = BoardView::new();
        let mut drawn = fresh_state();
        drawn.game_over = true;
        view.apply(&drawn);
        assert!(view.status().draw);

        let mut won = fresh_state();
        won.game_over = true;
        won.winner = Some(Mark::X);
        view.apply(&won);

        assert_eq!(view.status().text, "Player X wins!");
        assert!(view.status().winner);
        assert!(!view.status().draw);
    }

    #[test]
    fn game_over_without_a_winner_reads_as_a_draw() {
        let mut view = BoardView::new();
        let mut state = fresh_state();
        state.game_over = true;
        view.apply(&state);

        assert_eq!(view.status().text, "It's a draw!");
        assert!(view.status().draw);
        assert!(!view.status().winner);
    }

    #[test]
    fn active_game_names_the_current_player_with_no_terminal_markers() {
        let mut view = BoardView::new();
        let mut won = fresh_state();
        won.game_over = true;
        won.winner = Some(Mark::O);
        view.apply(&won);

        let mut state = fresh_state();
        state.current_player = Mark::O;
        view.apply(&state);

        assert_eq!(view.status().text, "Current player: O");
        assert!(!view.status().winner);
        assert!(!view.status().draw);
    }

    #[test]
    fn clear_wipes_every_cell_and_all_status_markers() {
        let mut view = BoardView::new();
        let mut state = state_with(
            &[(0, 0, Mark::X), (0, 1, Mark::O), (2, 2, Mark::X)],
            Mark::O,
        );
        state.game_over = true;
        state.winner = Some(Mark::X);
        view.apply(&state);

        view.clear();

        for coord in Coord::all() {
            assert_eq!(view.cell(coord), CellView::default());
        }
        assert!(!view.status().winner);
        assert!(!view.status().draw);
    }

    #[test]
    fn opening_scenario_renders_the_first_mark_and_the_next_player() {
        let mut view = BoardView::new();
        view.apply(&state_with(&[(0, 0, Mark::X)], Mark::O));

        let cell = view.cell(coord(0, 0));
        assert_eq!(cell.mark, Some(Mark::X));
        assert!(cell.taken);
        assert_eq!(view.status().text, "Current player: O");
    }

    #[test]
    fn connection_error_sets_the_fixed_status_text() {
        let mut view = BoardView::new();
        view.show_connection_error();
        assert_eq!(view.status().text, CONNECTION_ERROR_STATUS);
    }
}

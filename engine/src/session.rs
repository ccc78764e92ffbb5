use super::board::Board;
use super::bot_controller::{SearchConfig, select_move};
use super::session_rng::SessionRng;
use super::types::{GameOutcome, InvalidMoveError, Mark, Position};
use super::win_detector::evaluate_outcome;

pub const DEFAULT_DEPTH_LIMIT: u32 = 5;

/// One human-vs-computer sitting: the board, the seeded RNG, and the
/// difficulty state that persists across games. The human always plays X and
/// moves first; the computer always plays O.
pub struct GameSession {
    board: Board,
    rng: SessionRng,
    initial_depth_limit: u32,
    depth_limit: u32,
    consecutive_human_wins: u32,
    computer_has_moved: bool,
}

impl GameSession {
    pub fn new(initial_depth_limit: u32, rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            rng,
            initial_depth_limit,
            depth_limit: initial_depth_limit,
            consecutive_human_wins: 0,
            computer_has_moved: false,
        }
    }

    /// Marks `pos` with X. A human win also bumps the streak and the depth
    /// limit, so the next game's computer searches one ply deeper.
    pub fn apply_human_move(&mut self, pos: Position) -> Result<GameOutcome, InvalidMoveError> {
        if self.outcome().is_terminal() {
            return Err(InvalidMoveError::GameFinished);
        }
        if !self.board.is_cell_empty(pos) {
            return Err(InvalidMoveError::CellOccupied);
        }

        self.board.set(pos, Mark::X);
        let outcome = self.outcome();

        if outcome == GameOutcome::XWon {
            self.consecutive_human_wins += 1;
            self.depth_limit += 1;
        }

        Ok(outcome)
    }

    /// Runs the search for O and applies the chosen move. A no-op on a
    /// finished game. `None` with a full board reads as the draw the returned
    /// outcome reports.
    pub fn run_computer_turn(&mut self) -> (Option<Position>, GameOutcome) {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return (None, outcome);
        }

        let config = SearchConfig {
            depth_limit: self.depth_limit,
            // The very first computer move of a session is deterministic.
            allow_random_perturbation: self.computer_has_moved,
        };

        let chosen = select_move(&self.board, &config, &mut self.rng);
        if let Some(pos) = chosen {
            self.board.set(pos, Mark::O);
            self.computer_has_moved = true;
        }

        (chosen, self.outcome())
    }

    /// Draw / human-win path: a fresh board, streak and depth untouched.
    pub fn reset_board_keep_streak(&mut self) {
        self.board = Board::new();
    }

    /// Computer-win path: a fresh board and difficulty back to its initial
    /// value.
    pub fn reset_board_and_streak(&mut self) {
        self.board = Board::new();
        self.consecutive_human_wins = 0;
        self.depth_limit = self.initial_depth_limit;
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate_outcome(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn consecutive_human_wins(&self) -> u32 {
        self.consecutive_human_wins
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Level 1 at the default depth limit of 5.
    pub fn difficulty_level(&self) -> u32 {
        self.depth_limit.saturating_sub(4)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

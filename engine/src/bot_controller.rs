use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Mark, Position};
use super::win_detector::has_won;

/// Rolls at or above this value (out of 0..=100) replace a non-terminal
/// evaluation with a random score, so the computer occasionally misjudges a
/// position instead of converging to optimal play.
pub const MISTAKE_ROLL_THRESHOLD: i32 = 95;

#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub depth_limit: u32,
    pub allow_random_perturbation: bool,
}

/// Picks O's move: scores every empty cell in row-major order and keeps the
/// strictly best one, so ties go to the first cell found. Returns `None` iff
/// the board has no empty cell.
pub fn select_move(board: &Board, config: &SearchConfig, rng: &mut SessionRng) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in board.available_moves() {
        let mut child = *board;
        child.set(pos, Mark::O);
        let score = minimax(&child, 0, false, config, rng);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &Board,
    depth: u32,
    is_maximizing: bool,
    config: &SearchConfig,
    rng: &mut SessionRng,
) -> i32 {
    // Horizon first: a position past the depth limit scores neutral even if
    // it happens to be terminal.
    if depth > config.depth_limit {
        return 0;
    }

    if let Some(score) = evaluate_board(board, config, rng) {
        return score;
    }

    // evaluate_board reports full boards, so at least one move exists here.
    if is_maximizing {
        let mut best = i32::MIN;
        for pos in board.available_moves() {
            let mut child = *board;
            child.set(pos, Mark::O);
            best = best.max(minimax(&child, depth + 1, false, config, rng));
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.available_moves() {
            let mut child = *board;
            child.set(pos, Mark::X);
            best = best.min(minimax(&child, depth + 1, true, config, rng));
        }
        best
    }
}

fn evaluate_board(board: &Board, config: &SearchConfig, rng: &mut SessionRng) -> Option<i32> {
    if has_won(board, Mark::O) {
        return Some(1);
    }
    if has_won(board, Mark::X) {
        return Some(-1);
    }
    if board.is_full() {
        return Some(0);
    }

    if config.allow_random_perturbation {
        let roll: i32 = rng.random_range(0..=100);
        if roll >= MISTAKE_ROLL_THRESHOLD {
            return Some(rng.random_range(-1..=1));
        }
    }

    None
}

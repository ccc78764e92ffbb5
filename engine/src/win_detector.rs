use super::board::Board;
use super::types::{GameOutcome, Mark, Position, WinningLine};

/// The 8 winning lines of the 3x3 grid: rows, columns, both diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }

    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(Position::new(row, col)) == mark)
    })
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let (row, col) = line[0];
        let mark = board.get(Position::new(row, col));
        if mark == Mark::Empty {
            continue;
        }

        if line
            .iter()
            .all(|&(row, col)| board.get(Position::new(row, col)) == mark)
        {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[2];
            return Some(WinningLine::new(
                mark,
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            ));
        }
    }

    None
}

/// Derives the outcome from the board. O's win is checked before X's,
/// matching the evaluation order inside the search.
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    if has_won(board, Mark::O) {
        return GameOutcome::OWon;
    }
    if has_won(board, Mark::X) {
        return GameOutcome::XWon;
    }
    if board.is_full() {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}

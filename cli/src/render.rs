use tictactoe_engine::{BOARD_SIZE, Board, Position, WinningLine};

/// Draws the grid with 1-based row and column labels, matching the
/// coordinates the player types in.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   1   2   3\n");

    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| board.get(Position::new(row, col)).to_string())
            .collect();
        out.push_str(&format!("{}  {}\n", row + 1, cells.join(" | ")));
        if row + 1 < BOARD_SIZE {
            out.push_str("  ---+---+---\n");
        }
    }

    out
}

pub fn describe_winning_line(line: &WinningLine) -> String {
    format!(
        "three {} in a row from row {} col {} to row {} col {}",
        line.mark,
        line.start.row + 1,
        line.start.col + 1,
        line.end.row + 1,
        line.end.col + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Mark;

    #[test]
    fn test_render_contains_marks_in_place() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Mark::X);
        board.set(Position::new(2, 2), Mark::O);

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "1  X | . | .");
        assert_eq!(lines[5], "3  . | . | O");
    }

    #[test]
    fn test_winning_line_description_is_one_based() {
        let line = WinningLine::new(Mark::X, Position::new(0, 0), Position::new(2, 2));
        assert_eq!(
            describe_winning_line(&line),
            "three X in a row from row 1 col 1 to row 3 col 3"
        );
    }
}

pub mod config;
pub mod logger;

mod board;
mod bot_controller;
mod session;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{MISTAKE_ROLL_THRESHOLD, SearchConfig, select_move};
pub use session::{DEFAULT_DEPTH_LIMIT, GameSession};
pub use session_rng::SessionRng;
pub use types::{GameOutcome, InvalidMoveError, Mark, Position, WinningLine};
pub use win_detector::{check_win_with_line, evaluate_outcome, has_won};

mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tictactoe_engine::{
    GameOutcome, GameSession, Position, SessionRng, check_win_with_line, log, logger,
};

use config::GameConfig;
use render::{describe_winning_line, render_board};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the cosmetic pause before the computer's move.
    #[arg(long)]
    no_delay: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let manager = config::get_config_manager(args.config.as_deref());
    if !std::path::Path::new(manager.file_path()).exists() {
        manager.set_config(&GameConfig::default())?;
        log!("Wrote default config to {}", manager.file_path());
    }
    let game_config = manager.get_config()?;

    let rng = match args.seed.or(game_config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let think_delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(game_config.think_delay_ms)
    };

    let mut session = GameSession::new(game_config.initial_depth_limit, rng);

    println!("You are X, the computer is O.");
    println!("Enter moves as `row col` (1-3 each), or q to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("{}", render_board(session.board()));
        println!(
            "Win streak: {}  |  Difficulty level: {}",
            session.consecutive_human_wins(),
            session.difficulty_level()
        );
        print!("Your move: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(pos) = parse_move(input) else {
            println!("Enter a row and a column from 1 to 3, e.g. `2 3`.");
            continue;
        };

        let outcome = match session.apply_human_move(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if handle_game_end(&mut session, outcome) {
            continue;
        }

        if !think_delay.is_zero() {
            thread::sleep(think_delay);
        }

        let started = Instant::now();
        let (chosen, outcome) = session.run_computer_turn();
        if let Some(reply) = chosen {
            log!(
                "Computer played {} in {}ms at depth {}",
                reply,
                started.elapsed().as_millis(),
                session.depth_limit()
            );
            println!("Computer plays row {} col {}.", reply.row + 1, reply.col + 1);
        }

        handle_game_end(&mut session, outcome);
    }

    log!("Session ended");
    Ok(())
}

fn parse_move(input: &str) -> Option<Position> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
        return None;
    }
    Some(Position::new(row - 1, col - 1))
}

/// Announces a finished game and applies the matching reset policy: a human
/// win or draw keeps the streak, a computer win resets it along with the
/// difficulty. Returns true when the game ended.
fn handle_game_end(session: &mut GameSession, outcome: GameOutcome) -> bool {
    match outcome {
        GameOutcome::InProgress => false,
        GameOutcome::XWon => {
            announce(session, "You win!");
            println!(
                "Win streak is now {}; difficulty raised to level {}.",
                session.consecutive_human_wins(),
                session.difficulty_level()
            );
            log!(
                "Human won; streak {}, depth limit {}",
                session.consecutive_human_wins(),
                session.depth_limit()
            );
            session.reset_board_keep_streak();
            true
        }
        GameOutcome::OWon => {
            announce(session, "Computer wins!");
            println!("Win streak and difficulty reset.");
            log!("Computer won; session difficulty reset");
            session.reset_board_and_streak();
            true
        }
        GameOutcome::Draw => {
            println!();
            println!("{}", render_board(session.board()));
            println!("Draw! Streak and difficulty carry over.");
            log!("Game drawn");
            session.reset_board_keep_streak();
            true
        }
    }
}

fn announce(session: &GameSession, headline: &str) {
    println!();
    println!("{}", render_board(session.board()));
    match check_win_with_line(session.board()) {
        Some(winning) => println!("{} ({})", headline, describe_winning_line(&winning)),
        None => println!("{}", headline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_is_one_based() {
        assert_eq!(parse_move("1 1"), Some(Position::new(0, 0)));
        assert_eq!(parse_move("3 1"), Some(Position::new(2, 0)));
        assert_eq!(parse_move("  2   3 "), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move("0 1"), None);
        assert_eq!(parse_move("4 2"), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("a b"), None);
    }
}

use std::env;
use std::process::ExitCode;

use chess_core::Position;
use chess_puzzle::{GameStatus, ParsePolicy, Puzzle, Verdict};

const USAGE: &str = "usage: chess-clock <position> [expected-move [submitted-move]]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(fen) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let position = match Position::from_fen(fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let moves: Vec<String> = position.legal_moves().iter().map(|mv| mv.to_uci()).collect();
    println!("{:?} to move: {:?}", position.active_color(), GameStatus::of(&position));
    println!("{} legal moves: {}", moves.len(), moves.join(" "));

    let Some(expected) = args.get(1) else {
        return ExitCode::SUCCESS;
    };
    let puzzle = match Puzzle::from_fen(fen, expected, ParsePolicy::Strict) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let submitted = args.get(2).map(String::as_str).unwrap_or(expected.as_str());
    let verdict = puzzle.evaluate(submitted);
    println!("{submitted}: {verdict:?}");
    match puzzle.solution() {
        Some(after) => println!("after {expected}: {:?}", GameStatus::of(&after)),
        None => eprintln!("expected move {expected} is not legal here"),
    }

    match verdict {
        Verdict::Correct => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use battleships::{init_logging, Game, Outcome, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Parser)]
#[command(author, version, about = "Single-player battleships on the command line", long_about = None)]
struct Cli {
    /// Board size (5-26). Prompted for interactively when omitted.
    #[arg(long)]
    size: Option<usize>,
    /// Fix the RNG seed for reproducible fleet placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let size = match cli.size {
        Some(size) => size,
        None => {
            prompt("enter board size: ")?;
            match lines.next() {
                Some(line) => line?.trim().parse().unwrap_or(0),
                None => 0,
            }
        }
    };
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        eprintln!(
            "Illegal board size, needs to be an int between {} and {}.",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        );
        return Ok(ExitCode::FAILURE);
    }

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut game = Game::new(size, &mut rng)?;

    println!("Ready to play");
    print!("{}", game.board().render());

    while !game.is_over() {
        prompt("enter coordinates: ")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input == "exit" {
            break;
        }
        let Some((row, col)) = parse_move(input, size) else {
            println!("Invalid move, try again");
            continue;
        };
        let outcome = game.probe(row, col);
        println!("{}", outcome_message(outcome));
        print!("{}", game.board().render());
    }

    println!("Game over");
    Ok(ExitCode::SUCCESS)
}

fn prompt(msg: &str) -> io::Result<()> {
    print!("{}", msg);
    io::stdout().flush()
}

/// Parse a move like `c7`: row letter then 1-based column number. Bounds are
/// checked here so the core only ever sees valid coordinates.
fn parse_move(input: &str, size: usize) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let row_ch = chars.next()?;
    if !row_ch.is_ascii_lowercase() {
        return None;
    }
    let row = (row_ch as u8 - b'a') as usize;
    let col: usize = chars.as_str().parse().ok()?;
    if row >= size || col == 0 || col > size {
        return None;
    }
    Some((row, col - 1))
}

fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Miss | Outcome::AlreadyMiss => "Miss",
        Outcome::Hit => "Hit!",
        Outcome::Sunk => "Hit and sunk.",
        Outcome::AlreadyHit => "Already been hit.",
    }
}

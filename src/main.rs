//! Play Indigo against the computer on the console.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use indigo::{Game, console};

/// Indigo card game: you against the computer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the shuffle and the computer's choices.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");

    let mut game = Game::new(seed);
    match console::run(&mut game, io::stdin().lock(), io::stdout().lock()) {
        Ok(outcome) => {
            log::debug!("session ended: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

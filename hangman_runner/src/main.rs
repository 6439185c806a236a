use std::{io, process::ExitCode};

use clap::{Parser, Subcommand};
use env_logger::Env;
use hangman_rs::{harness::Harness, solver::Alphabetical, words, Game, HangmanError};
use hangman_solvers::{Frequency, Narrowing};
use log::{error, info};

mod play;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game, one guess per line on stdin.
    Play {
        /// Secret word to use instead of a random one.
        #[arg(long)]
        word: Option<String>,

        /// Print the final state of the game as JSON.
        #[arg(long)]
        snapshot: bool,
    },

    /// Run the built-in solvers against the word list and print a report.
    Bench {
        /// Number of random words to test each solver on.
        #[arg(long, default_value_t = 100)]
        num: usize,

        /// Test each solver on every word instead.
        #[arg(long, conflicts_with = "num")]
        all: bool,

        /// Show a progress bar while running.
        #[arg(long)]
        verbose: bool,

        /// Also print a table of every game.
        #[arg(long)]
        details: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let result = match args.command {
        Command::Play { word, snapshot } => play(word, snapshot),
        Command::Bench {
            num,
            all,
            verbose,
            details,
        } => bench(num, all, verbose, details),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn play(word: Option<String>, snapshot: bool) -> Result<(), HangmanError> {
    let word = word.unwrap_or_else(|| words::random_word(&mut rand::thread_rng()).to_string());
    let mut game = Game::new(&word)?;
    info!("starting a game with a {} letter word", game.len());

    let status = play::play(&mut game, io::stdin().lock(), io::stdout().lock(), snapshot)?;
    info!("game finished with {}", status);
    Ok(())
}

fn bench(num: usize, all: bool, verbose: bool, details: bool) -> Result<(), HangmanError> {
    let mut harness = Harness::new()
        .add_baseline(Box::new(Alphabetical))
        .add_solver(Box::new(Frequency))
        .add_solver(Box::new(Narrowing::new()))
        .add_solver(Box::new(Narrowing::new().guess_words()));

    harness = if all {
        harness.test_all()
    } else {
        harness.test_num(num)
    };
    if verbose {
        harness = harness.verbose();
    }

    let record = harness.run()?;
    record.print_report()?;

    if details {
        for perf in record.iter() {
            perf.print();
        }
    }

    Ok(())
}

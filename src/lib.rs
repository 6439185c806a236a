#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod game;
pub use game::{Game, Status};

pub mod solver;
pub use solver::Solver;

pub mod words;

pub mod harness;
pub use harness::Harness;

pub mod perf;
pub use perf::{Perf, Summary};

/// A result whose error defaults to [`HangmanError`].
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

/// The errors that `hangman_rs` can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("general IO error")]
    Printing(#[from] std::io::Error),

    #[error("the test harness encountered an error")]
    Harness {
        #[from]
        kind: HarnessError,
    },
}

/// Ways a caller can break the rules of a [`Game`].
///
/// None of these are transient. Each one means the caller asked the game
/// for something the state machine does not allow, and the game was left
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum GameError {
    /// The secret word given to [`Game::new()`] was empty.
    #[error("the secret word cannot be empty")]
    EmptyWord,

    /// A guess was made after the game was won or lost.
    #[error("the game has already ended")]
    GameAlreadyEnded,

    /// A letter guess was not exactly one ASCII letter.
    #[error("\"{0}\" is not a single letter")]
    InvalidCharacter(String),

    /// The letter was already guessed in this game.
    #[error("the letter '{0}' has already been tried")]
    AlreadyTried(char),

    /// [`Game::word()`] was called while the game was still running.
    #[error("no peeking at the word while the game is running")]
    Cheating,
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no solvers have been added to the harness")]
    NoSolversAdded,

    #[error("the harness has no words to test with")]
    NoWords,

    /// A solver broke the rules of the game it was playing.
    #[error("the solver {solver} broke the rules on \"{word}\"")]
    SolverFailed {
        solver: String,
        word: String,
        source: GameError,
    },

    /// A solver returned before its game was won or lost.
    #[error("the solver {solver} gave up on \"{word}\" while it was still running")]
    SolverGaveUp { solver: String, word: String },
}

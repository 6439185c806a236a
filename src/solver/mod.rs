//! Tools for defining hangman solvers.

use std::fmt::{Debug, Display};

use crate::{Game, GameError};

pub mod alphabetical;
pub use alphabetical::Alphabetical;

/// Trait defining a hangman solver.
///
/// A solver plays one [`Game`] until it is won or lost. It only sees what
/// any player sees (the revealed pattern, the letters it has tried and the
/// mistakes it has left), so there is no way for it to peek at the answer.
///
/// # How to implement
///
/// Make a new struct, implement [`Display`] on it (the
/// [test harness](crate::Harness) uses it to name the solver, so keep it on
/// one line) and then implement [`Solver`]:
///
/// ```rust
/// use std::fmt::Display;
/// use hangman_rs::{Game, GameError, Solver};
///
/// #[derive(Debug)]
/// struct Vowels;
///
/// impl Display for Vowels {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Vowels")
///     }
/// }
///
/// impl Solver for Vowels {
///     fn solve(&self, game: &mut Game) -> Result<(), GameError> {
///         for letter in "aeioubcdfghjklmnpqrstvwxyz".chars() {
///             if !game.is_running() {
///                 break;
///             }
///             game.guess_char(letter)?;
///         }
///         Ok(())
///     }
///
///     fn version(&self) -> &'static str {
///         "0.1.0"
///     }
/// }
///
/// let mut game = Game::new("tea")?;
/// Vowels.solve(&mut game)?;
/// assert!(!game.is_running());
/// #
/// # Ok::<_, hangman_rs::GameError>(())
/// ```
pub trait Solver: Display + Debug + Sync {
    /// Plays `game` until it is no longer running.
    ///
    /// Errors returned by the game, such as guessing a letter twice, should
    /// be passed on; the harness reports them as a broken solver.
    fn solve(&self, game: &mut Game) -> Result<(), GameError>;

    /// Provides a version for this solver.
    ///
    /// Change this whenever the logic of the solver changes so that reports
    /// from different versions are not confused.
    fn version(&self) -> &'static str;
}

/// Guesses each letter of `order` that has not been tried yet until the
/// game ends.
///
/// Letters that are not ASCII letters are skipped.
pub fn guess_in_order(
    game: &mut Game,
    order: impl IntoIterator<Item = char>,
) -> Result<(), GameError> {
    for letter in order {
        if !game.is_running() {
            break;
        }
        if !letter.is_ascii_alphabetic() || game.already_tried(letter.encode_utf8(&mut [0; 4])) {
            continue;
        }
        game.guess_char(letter)?;
    }

    Ok(())
}

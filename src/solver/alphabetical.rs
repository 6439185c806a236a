//! A single bad solver to show how they are written.

use std::fmt::Display;

use crate::{
    solver::{guess_in_order, Solver},
    Game, GameError,
};

/// A hangman solver that guesses letters from `a` to `z`.
///
/// This exists to show how [`Solver`](super::Solver) is implemented and to
/// serve as a baseline. For better solvers, check out the
/// `hangman_solvers` crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alphabetical;

impl Solver for Alphabetical {
    fn solve(&self, game: &mut Game) -> Result<(), GameError> {
        guess_in_order(game, 'a'..='z')
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Alphabetical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_rs::Alphabetical")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Status;

    #[test]
    fn early_letters_win() -> Result<(), GameError> {
        let mut game = Game::new("cab")?;
        Alphabetical.solve(&mut game)?;
        assert_eq!(game.status(), Status::Win);
        assert_eq!(game.word()?, "cab");
        Ok(())
    }

    #[test]
    fn late_letters_lose() -> Result<(), GameError> {
        let mut game = Game::new("zoo")?;
        Alphabetical.solve(&mut game)?;
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.mistakes_left(), 0);
        Ok(())
    }
}

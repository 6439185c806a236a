use std::fmt::Display;

use hangman_rs::{
    solver::{guess_in_order, Solver},
    words::WORDS,
    Game, GameError,
};
use itertools::Itertools;
use lazy_static::lazy_static;

use crate::util::letter_occurrences;

lazy_static! {
    /// Every letter, ordered by how many built-in words contain it.
    static ref ORDER: Vec<char> = {
        let occurrences = letter_occurrences(WORDS.iter().copied());
        ('a'..='z')
            .sorted_by_key(|c| std::cmp::Reverse(occurrences.get(c).copied().unwrap_or(0)))
            .collect()
    };
}

/// A hangman solver that guesses the most common letters first.
///
/// Letters are ranked once, by how many words in the built-in word list
/// contain them, and the solver works down that ranking without looking at
/// the revealed pattern at all.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Frequency;

impl Frequency {
    /// Returns the order in which this solver guesses letters.
    pub fn order(&self) -> &'static [char] {
        &ORDER
    }
}

impl Solver for Frequency {
    fn solve(&self, game: &mut Game) -> Result<(), GameError> {
        guess_in_order(game, ORDER.iter().copied())
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_solvers::Frequency")
    }
}

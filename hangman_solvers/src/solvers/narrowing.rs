use std::{cmp::Reverse, fmt::Display};

use hangman_rs::{words::WORDS, Game, GameError, Solver};

use crate::{
    solvers::Frequency,
    util::{candidates, letter_occurrences, tried},
};

/// A hangman solver that guesses the letter found in the most words that
/// could still be the answer.
///
/// Each round, the solver filters its dictionary down to the words that fit
/// the revealed pattern and the letters already tried, then guesses the
/// untried letter that the most of those words contain. When the answer is
/// not in the dictionary and no candidate is left, it falls back to the
/// [`Frequency`] ranking.
///
/// With [`guess_words()`](Narrowing::guess_words()), the solver guesses the
/// whole word as soon as only one candidate remains. This wins without
/// further mistakes when the answer is in the dictionary, and loses
/// outright when it is not.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Narrowing {
    dictionary: Vec<String>,
    guess_words: bool,
}

impl Default for Narrowing {
    fn default() -> Self {
        Narrowing {
            dictionary: WORDS.iter().map(|s| s.to_string()).collect(),
            guess_words: false,
        }
    }
}

impl Narrowing {
    /// Creates a solver using the built-in word list that only guesses
    /// letters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the dictionary of possible answers.
    pub fn dictionary<S: Into<String>>(self, words: impl IntoIterator<Item = S>) -> Self {
        Narrowing {
            dictionary: words
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
            ..self
        }
    }

    /// Makes the solver guess the whole word once one candidate is left.
    pub fn guess_words(self) -> Self {
        Narrowing {
            guess_words: true,
            ..self
        }
    }

    fn next_letter(&self, game: &Game, candidates: &[&str]) -> Option<char> {
        letter_occurrences(candidates.iter().copied())
            .into_iter()
            .filter(|&(c, _)| !tried(game, c))
            .max_by_key(|&(c, n)| (n, Reverse(c)))
            .map(|(c, _)| c)
            .or_else(|| {
                Frequency
                    .order()
                    .iter()
                    .copied()
                    .find(|&c| !tried(game, c))
            })
    }
}

impl Solver for Narrowing {
    fn solve(&self, game: &mut Game) -> Result<(), GameError> {
        while game.is_running() {
            let candidates = candidates(game, &self.dictionary);

            if let [only] = candidates.as_slice() {
                if self.guess_words {
                    game.guess_word(only)?;
                    break;
                }
            }

            match self.next_letter(game, &candidates) {
                Some(letter) => {
                    game.guess_char(letter)?;
                }
                None => break,
            }
        }

        Ok(())
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Narrowing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hangman_solvers::Narrowing")?;
        if self.guess_words {
            write!(f, " (guess words)")?;
        }
        Ok(())
    }
}

//! Helpers shared by the solvers.

use std::collections::BTreeMap;

use hangman_rs::{game::PLACEHOLDER, Game};
use itertools::Itertools;
use regex::bytes::{Regex, RegexBuilder};

/// Builds a regex matching every word that could be behind `pattern`.
///
/// Revealed letters must match exactly. A hidden position can hold any
/// letter except one that has already been `tried`: a tried letter that is
/// in the word is revealed everywhere it appears, so it cannot be hiding.
pub fn generate_regex(
    pattern: &[char],
    tried: impl IntoIterator<Item = char>,
) -> Result<Regex, regex::Error> {
    let tried: String = tried.into_iter().collect();
    let hidden = if tried.is_empty() {
        String::from("[a-z]")
    } else {
        format!("[^{}]", tried)
    };

    let mut str = String::from("^");
    for &c in pattern {
        if c == PLACEHOLDER {
            str.push_str(&hidden);
        } else {
            str.push(c);
        }
    }
    str.push('$');

    let mut rb = RegexBuilder::new(&str);
    rb.unicode(false);

    rb.build()
}

/// Counts, for each letter, how many of `words` contain it.
///
/// A letter appearing twice in one word is counted once, since one guess
/// reveals every copy.
pub fn letter_occurrences<'a>(words: impl IntoIterator<Item = &'a str>) -> BTreeMap<char, u32> {
    let mut map = BTreeMap::new();

    words
        .into_iter()
        .flat_map(|s| s.chars().unique())
        .for_each(|c| {
            let key = map.entry(c).or_insert(0);
            *key += 1;
        });

    map
}

/// Returns true if `letter` has been guessed in `game`.
pub fn tried(game: &Game, letter: char) -> bool {
    game.attempted().any(|c| c == letter)
}

/// Returns the words of `dictionary` that could still be the answer to
/// `game`.
///
/// If the pattern cannot be turned into a regex, nothing is a candidate.
pub fn candidates<'a>(game: &Game, dictionary: &'a [String]) -> Vec<&'a str> {
    let regex = match generate_regex(game.state(), game.attempted()) {
        Ok(regex) => regex,
        Err(_) => return Vec::new(),
    };

    dictionary
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().count() == game.len())
        .filter(|word| regex.is_match(word.as_bytes()))
        .collect()
}

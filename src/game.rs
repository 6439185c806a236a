//! The rules of a single game of hangman.

use std::{
    collections::BTreeSet,
    fmt::{Debug, Display},
};

use itertools::Itertools;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GameError;

/// The number of wrong letter guesses a player may make.
///
/// The guess after the last allowed mistake loses the game.
pub const MAX_WRONG_GUESS: u32 = 6;

/// Marks a position of the secret word that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Where a [`Game`] is in its lifecycle.
///
/// A game starts [`Running`](Status::Running) and moves to exactly one of
/// the other two states, after which it never changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "UPPERCASE")
)]
pub enum Status {
    /// The game still accepts guesses.
    Running,

    /// The word was revealed or guessed.
    Win,

    /// The player ran out of mistakes or guessed the wrong word.
    Lost,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Running => write!(f, "RUNNING"),
            Status::Win => write!(f, "WIN"),
            Status::Lost => write!(f, "LOST"),
        }
    }
}

/// One round of hangman.
///
/// The game owns a secret word and exposes only what a player is allowed
/// to see: the revealed pattern, the letters tried so far and how many
/// mistakes are left. The word itself is only handed out once the game is
/// over, and even the [`Debug`] output keeps it hidden until then.
///
/// Letters and words are compared without regard to ASCII case. Every
/// guess is lower-cased before it is stored or revealed, so the pattern
/// always matches the (lower-cased) secret word exactly once every letter
/// has been found.
///
/// # Examples
///
/// ```rust
/// use hangman_rs::{Game, Status};
///
/// let mut game = Game::new("cat")?;
/// assert!(game.guess_letter("c")?);
/// assert!(!game.guess_letter("x")?);
/// assert_eq!(game.state(), ['c', '_', '_']);
/// assert_eq!(game.mistakes_left(), 5);
///
/// assert!(game.guess_word("CAT")?);
/// assert_eq!(game.status(), Status::Win);
/// assert_eq!(game.word()?, "cat");
/// #
/// # Ok::<_, hangman_rs::GameError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Game {
    word: String,
    status: Status,
    wrong_guesses: u32,
    state: Vec<char>,
    attempted: BTreeSet<char>,
}

impl Game {
    /// Starts a new game with `word` as the secret.
    ///
    /// Returns [`GameError::EmptyWord`] if `word` has no characters.
    pub fn new(word: &str) -> Result<Self, GameError> {
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }

        let word = word.to_ascii_lowercase();
        let state = vec![PLACEHOLDER; word.chars().count()];

        Ok(Game {
            word,
            status: Status::Running,
            wrong_guesses: 0,
            state,
            attempted: BTreeSet::new(),
        })
    }

    /// Guesses a single letter.
    ///
    /// Returns `true` if the letter is in the word, revealing it everywhere
    /// it appears, and `false` if it is not, which costs one mistake.
    ///
    /// The checks happen in this order, and a failing check leaves the game
    /// untouched:
    ///
    /// 1. A game that is over returns [`GameError::GameAlreadyEnded`].
    /// 2. Anything but a single ASCII letter returns
    ///    [`GameError::InvalidCharacter`].
    /// 3. If no mistakes are left, the game is lost and this returns
    ///    `Ok(false)`. This is the normal way a game runs out of chances,
    ///    not an error.
    /// 4. A letter that was already tried, in either case, returns
    ///    [`GameError::AlreadyTried`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hangman_rs::{Game, GameError, Status};
    ///
    /// let mut game = Game::new("dog")?;
    /// for letter in ["a", "b", "c", "e", "f", "h"] {
    ///     assert!(!game.guess_letter(letter)?);
    /// }
    /// assert_eq!(game.mistakes_left(), 0);
    /// assert_eq!(game.status(), Status::Running);
    ///
    /// assert!(!game.guess_letter("d")?);
    /// assert_eq!(game.status(), Status::Lost);
    /// assert_eq!(game.guess_letter("o"), Err(GameError::GameAlreadyEnded));
    /// #
    /// # Ok::<_, hangman_rs::GameError>(())
    /// ```
    pub fn guess_letter(&mut self, letter: &str) -> Result<bool, GameError> {
        if !self.is_running() {
            return Err(GameError::GameAlreadyEnded);
        }

        let guess =
            parse_letter(letter).ok_or_else(|| GameError::InvalidCharacter(letter.to_string()))?;

        if self.mistakes_left() == 0 {
            self.finish(Status::Lost);
            return Ok(false);
        }

        if !self.attempted.insert(guess) {
            return Err(GameError::AlreadyTried(guess));
        }

        let mut found = false;
        for (slot, c) in self.state.iter_mut().zip(self.word.chars()) {
            if c == guess {
                *slot = c;
                found = true;
            }
        }

        if !found {
            self.wrong_guesses += 1;
            return Ok(false);
        }

        if self.state.iter().copied().eq(self.word.chars()) {
            self.finish(Status::Win);
        }

        Ok(true)
    }

    /// Guesses a single letter given as a [`char`].
    ///
    /// This behaves exactly like [`guess_letter()`](Game::guess_letter()).
    pub fn guess_char(&mut self, letter: char) -> Result<bool, GameError> {
        self.guess_letter(letter.encode_utf8(&mut [0; 4]))
    }

    /// Guesses the whole word.
    ///
    /// A correct guess wins the game and an incorrect one loses it on the
    /// spot; there is no second try and no mistake is counted.
    ///
    /// Returns [`GameError::GameAlreadyEnded`] if the game is already over.
    pub fn guess_word(&mut self, word: &str) -> Result<bool, GameError> {
        if !self.is_running() {
            return Err(GameError::GameAlreadyEnded);
        }

        if word.to_ascii_lowercase() == self.word {
            self.finish(Status::Win);
            Ok(true)
        } else {
            self.finish(Status::Lost);
            Ok(false)
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Returns how many more letters can be guessed wrong.
    pub fn mistakes_left(&self) -> u32 {
        MAX_WRONG_GUESS - self.wrong_guesses
    }

    /// Returns how many letters have been guessed wrong.
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Returns the revealed pattern.
    ///
    /// Each element is either a letter of the word or [`PLACEHOLDER`], and
    /// there is always one element per character of the word.
    pub fn state(&self) -> &[char] {
        &self.state
    }

    /// Returns the length of the secret word in characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns the secret word.
    ///
    /// Returns [`GameError::Cheating`] while the game is running.
    pub fn word(&self) -> Result<&str, GameError> {
        if self.is_running() {
            Err(GameError::Cheating)
        } else {
            Ok(&self.word)
        }
    }

    /// Returns true if `letter` has already been guessed, in either case.
    ///
    /// Input that is not a single ASCII letter has never been tried.
    pub fn already_tried(&self, letter: &str) -> bool {
        parse_letter(letter).map_or(false, |c| self.attempted.contains(&c))
    }

    /// Returns the letters guessed so far in alphabetical order.
    pub fn attempted(&self) -> impl Iterator<Item = char> + '_ {
        self.attempted.iter().copied()
    }

    /// Captures what can be shown about this game right now.
    ///
    /// The secret word is only included once the game is over.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            secret_word: self.word().ok().map(str::to_string),
            status: self.status,
            wrong_guess_count: self.wrong_guesses,
            revealed_pattern: self.state.clone(),
            attempted_letters: self.attempted().collect(),
        }
    }

    fn finish(&mut self, status: Status) {
        self.status = status;
        debug!(
            "game over with {} on \"{}\" after {} wrong guesses",
            status, self.word, self.wrong_guesses
        );
    }
}

fn parse_letter(letter: &str) -> Option<char> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

impl Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("word", &self.word().unwrap_or("<hidden>"))
            .field("status", &self.status)
            .field("wrong_guesses", &self.wrong_guesses)
            .field("state", &self.to_string())
            .field("attempted", &self.attempted)
            .finish()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.iter().join(" "))
    }
}

/// Everything a front end may show or store about a [`Game`].
///
/// `secret_word` is `None` while the game is running.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Snapshot {
    pub secret_word: Option<String>,
    pub status: Status,
    pub wrong_guess_count: u32,
    pub revealed_pattern: Vec<char>,
    pub attempted_letters: Vec<char>,
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn pattern(game: &Game) -> String {
        game.state().iter().collect()
    }

    macro_rules! game_test {
        ($fn_name:ident[$word:expr => $( [$guess:expr, $res:expr, $state:expr] );*] $status:expr
            $(; then word $after:expr => $after_res:expr)?) => {
            #[test]
            fn $fn_name() -> Result<(), GameError> {
                let mut game = Game::new($word)?;

                $(
                    assert_eq!(game.guess_letter($guess), $res);
                    assert_eq!(pattern(&game), $state);
                )*

                assert_eq!(game.status(), $status);

                $(
                    assert_eq!(game.guess_word($after), $after_res);
                    assert_eq!(game.status(), $status);
                )?

                Ok(())
            }
        };
    }

    game_test! { reveal_cat ["cat" =>
        ["c", Ok(true), "c__"];
        ["a", Ok(true), "ca_"];
        ["t", Ok(true), "cat"]]
        Status::Win;
        then word "cat" => Err(GameError::GameAlreadyEnded)
    }

    game_test! { run_out_of_chances ["cat" =>
        ["x", Ok(false), "___"];
        ["y", Ok(false), "___"];
        ["z", Ok(false), "___"];
        ["q", Ok(false), "___"];
        ["w", Ok(false), "___"];
        ["e", Ok(false), "___"];
        ["r", Ok(false), "___"]]
        Status::Lost;
        then word "cat" => Err(GameError::GameAlreadyEnded)
    }

    game_test! { reveal_every_occurrence ["banana" =>
        ["a", Ok(true), "_a_a_a"];
        ["n", Ok(true), "_anana"];
        ["b", Ok(true), "banana"]]
        Status::Win
    }

    game_test! { uppercase_guesses_win ["Cat" =>
        ["C", Ok(true), "c__"];
        ["A", Ok(true), "ca_"];
        ["T", Ok(true), "cat"]]
        Status::Win
    }

    game_test! { repeats_rejected ["cat" =>
        ["a", Ok(true), "_a_"];
        ["A", Err(GameError::AlreadyTried('a')), "_a_"];
        ["x", Ok(false), "_a_"];
        ["X", Err(GameError::AlreadyTried('x')), "_a_"]]
        Status::Running
    }

    game_test! { invalid_characters ["cat" =>
        ["", Err(GameError::InvalidCharacter("".into())), "___"];
        ["ca", Err(GameError::InvalidCharacter("ca".into())), "___"];
        ["1", Err(GameError::InvalidCharacter("1".into())), "___"];
        [" ", Err(GameError::InvalidCharacter(" ".into())), "___"];
        ["é", Err(GameError::InvalidCharacter("é".into())), "___"]]
        Status::Running
    }

    // With no mistakes left the game is lost before repeats are checked.
    game_test! { out_of_chances_before_repeat ["cat" =>
        ["b", Ok(false), "___"];
        ["d", Ok(false), "___"];
        ["e", Ok(false), "___"];
        ["f", Ok(false), "___"];
        ["g", Ok(false), "___"];
        ["h", Ok(false), "___"];
        ["h", Ok(false), "___"];
        ["c", Err(GameError::GameAlreadyEnded), "___"]]
        Status::Lost
    }

    #[test]
    fn empty_word() {
        assert_eq!(Game::new(""), Err(GameError::EmptyWord));
    }

    #[test]
    fn zero_and_whitespace_are_words() -> Result<(), GameError> {
        assert_eq!(Game::new("0")?.state(), ['_']);
        assert_eq!(Game::new("  ")?.len(), 2);
        Ok(())
    }

    #[test]
    fn mistakes_count_down() -> Result<(), GameError> {
        let mut game = Game::new("cat")?;
        for (i, letter) in "xyzqwe".chars().enumerate() {
            assert_eq!(game.mistakes_left(), MAX_WRONG_GUESS - i as u32);
            assert!(!game.guess_char(letter)?);
        }
        assert_eq!(game.mistakes_left(), 0);
        assert_eq!(game.wrong_guesses(), MAX_WRONG_GUESS);
        assert!(game.is_running());

        assert!(!game.guess_letter("r")?);
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.mistakes_left(), 0);
        assert!(!game.already_tried("r"));
        Ok(())
    }

    #[test]
    fn correct_guesses_are_free() -> Result<(), GameError> {
        let mut game = Game::new("cat")?;
        game.guess_letter("c")?;
        game.guess_letter("a")?;
        assert_eq!(game.mistakes_left(), MAX_WRONG_GUESS);
        Ok(())
    }

    #[test]
    fn guess_word_wins() -> Result<(), GameError> {
        let mut game = Game::new("dog")?;
        assert!(game.guess_word("DOG")?);
        assert_eq!(game.status(), Status::Win);
        assert_eq!(game.guess_word("dog"), Err(GameError::GameAlreadyEnded));
        assert_eq!(game.guess_letter("d"), Err(GameError::GameAlreadyEnded));
        Ok(())
    }

    #[test]
    fn guess_word_loses() -> Result<(), GameError> {
        let mut game = Game::new("dog")?;
        assert!(!game.guess_word("cat")?);
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.mistakes_left(), MAX_WRONG_GUESS);
        assert_eq!(game.word()?, "dog");
        assert_eq!(game.guess_letter("d"), Err(GameError::GameAlreadyEnded));
        assert_eq!(game.guess_word("dog"), Err(GameError::GameAlreadyEnded));
        assert_eq!(game.status(), Status::Lost);
        Ok(())
    }

    #[test]
    fn no_cheating() -> Result<(), GameError> {
        let mut game = Game::new("Secret")?;
        assert_eq!(game.word(), Err(GameError::Cheating));
        assert_eq!(game.snapshot().secret_word, None);
        assert!(!format!("{:?}", game).contains("secret"));

        game.guess_word("nope")?;
        assert_eq!(game.word()?, "secret");
        assert_eq!(game.snapshot().secret_word.as_deref(), Some("secret"));
        Ok(())
    }

    #[test]
    fn already_tried_ignores_case() -> Result<(), GameError> {
        let mut game = Game::new("cat")?;
        assert!(!game.already_tried("a"));
        game.guess_letter("A")?;
        assert!(game.already_tried("a"));
        assert!(game.already_tried("A"));
        assert!(!game.already_tried("aa"));
        assert!(!game.already_tried(""));
        assert_eq!(game.attempted().collect::<Vec<_>>(), ['a']);
        Ok(())
    }

    #[test]
    fn display_and_snapshot() -> Result<(), GameError> {
        let mut game = Game::new("cat")?;
        game.guess_letter("t")?;
        game.guess_letter("b")?;
        assert_eq!(game.to_string(), "_ _ t");

        let snapshot = game.snapshot();
        assert_eq!(snapshot.status, Status::Running);
        assert_eq!(snapshot.wrong_guess_count, 1);
        assert_eq!(snapshot.revealed_pattern, ['_', '_', 't']);
        assert_eq!(snapshot.attempted_letters, ['b', 't']);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_json() -> Result<(), Box<dyn std::error::Error>> {
        let mut game = Game::new("dog")?;
        game.guess_letter("o")?;

        let json = serde_json::to_value(game.snapshot())?;
        assert_eq!(json["secret_word"], serde_json::Value::Null);
        assert_eq!(json["status"], "RUNNING");
        assert_eq!(json["revealed_pattern"], serde_json::json!(["_", "o", "_"]));

        game.guess_word("dog")?;
        let json = serde_json::to_string(&game.snapshot())?;
        let back: Snapshot = serde_json::from_str(&json)?;
        assert_eq!(back.secret_word.as_deref(), Some("dog"));
        assert_eq!(back.status, Status::Win);
        Ok(())
    }

    #[derive(Clone, Debug)]
    enum Guess {
        Letter(String),
        Word(String),
        Secret,
    }

    fn guess() -> impl Strategy<Value = Guess> {
        prop_oneof![
            8 => "[a-zA-Z0-9]{1,2}".prop_map(Guess::Letter),
            1 => "[a-zA-Z]{2,10}".prop_map(Guess::Word),
            1 => Just(Guess::Secret),
        ]
    }

    proptest! {
        #[test]
        fn fresh_game_is_hidden(word in "[a-zA-Z]{1,24}") {
            let game = Game::new(&word).unwrap();
            prop_assert_eq!(game.len(), word.len());
            prop_assert!(game.state().iter().all(|&c| c == PLACEHOLDER));
            prop_assert_eq!(game.status(), Status::Running);
            prop_assert_eq!(game.mistakes_left(), MAX_WRONG_GUESS);
        }

        #[test]
        fn guesses_follow_the_rules(
            word in "[a-z]{1,10}",
            guesses in prop::collection::vec(guess(), 0..40),
        ) {
            let mut game = Game::new(&word).unwrap();
            let mut guessed_word = false;

            for guess in guesses {
                let before = game.clone();
                let res = match &guess {
                    Guess::Letter(letter) => game.guess_letter(letter),
                    Guess::Word(other) => game.guess_word(other),
                    Guess::Secret => game.guess_word(&word.to_ascii_uppercase()),
                };

                prop_assert_eq!(game.len(), word.len());
                prop_assert!(game.mistakes_left() <= MAX_WRONG_GUESS);

                match (&guess, res) {
                    (_, Err(GameError::GameAlreadyEnded)) => {
                        prop_assert!(!before.is_running());
                        prop_assert_eq!(&game, &before);
                    }
                    (_, Err(_)) => prop_assert_eq!(&game, &before),
                    (Guess::Letter(letter), Ok(true)) => {
                        prop_assert_eq!(game.mistakes_left(), before.mistakes_left());
                        prop_assert!(game.already_tried(letter));
                    }
                    (Guess::Letter(_), Ok(false)) if before.mistakes_left() == 0 => {
                        prop_assert_eq!(game.status(), Status::Lost);
                    }
                    (Guess::Letter(_), Ok(false)) => {
                        prop_assert_eq!(game.mistakes_left() + 1, before.mistakes_left());
                        prop_assert!(game.is_running());
                    }
                    (_, Ok(correct)) => {
                        prop_assert!(before.is_running());
                        prop_assert_eq!(game.mistakes_left(), before.mistakes_left());
                        prop_assert_eq!(
                            game.status(),
                            if correct { Status::Win } else { Status::Lost }
                        );
                        guessed_word |= correct;
                    }
                }

                prop_assert_eq!(
                    game.status() == Status::Win,
                    guessed_word || game.state().iter().copied().eq(word.chars())
                );
            }
        }
    }
}

//! Playing a game over any line-based reader and writer.

use std::io::{self, BufRead, Write};

use hangman_rs::{Game, HangmanError, Status};
use log::debug;

/// Plays `game` with guesses read line by line from `input`.
///
/// A line with one character is a letter guess and a longer line is a
/// guess of the whole word. Blank lines are skipped. Broken rules are
/// reported to `output` and the game carries on. If `input` runs out while
/// the game is still running, the word stays secret.
///
/// With `snapshot`, the final state of the game is written as JSON.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    mut output: W,
    snapshot: bool,
) -> Result<Status, HangmanError> {
    show(game, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let guess = line.trim();
        if guess.is_empty() {
            continue;
        }

        let res = if guess.chars().count() == 1 {
            game.guess_letter(guess)
        } else {
            game.guess_word(guess)
        };

        match res {
            Ok(true) => writeln!(output, "Yes!")?,
            Ok(false) => writeln!(output, "No.")?,
            Err(e) => {
                debug!("rejected guess {:?}: {}", guess, e);
                writeln!(output, "{}", e)?;
                continue;
            }
        }

        show(game, &mut output)?;
        if !game.is_running() {
            break;
        }
    }

    match (game.status(), game.word()) {
        (Status::Win, Ok(word)) => writeln!(output, "You won! The word was \"{}\".", word)?,
        (_, Ok(word)) => writeln!(output, "You lost! The word was \"{}\".", word)?,
        (_, Err(_)) => writeln!(output, "Out of input, goodbye.")?,
    }

    if snapshot {
        serde_json::to_writer_pretty(&mut output, &game.snapshot()).map_err(io::Error::from)?;
        writeln!(output)?;
    }

    Ok(game.status())
}

fn show<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "{}   mistakes left: {}   tried: {}",
        game,
        game.mistakes_left(),
        game.attempted().collect::<String>()
    )
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn run(word: &str, input: &str, snapshot: bool) -> (Status, String) {
        let mut game = Game::new(word).unwrap();
        let mut output = Vec::new();
        let status = play(&mut game, Cursor::new(input), &mut output, snapshot).unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn letters_win() {
        let (status, output) = run("cat", "c\n\nA\nt\nq\n", false);
        assert_eq!(status, Status::Win);
        assert!(output.contains("c _ _   mistakes left: 6   tried: c\n"));
        assert!(output.ends_with("You won! The word was \"cat\".\n"));
        assert!(!output.contains("tried: acq"));
    }

    #[test]
    fn mistakes_are_reported() {
        let (status, output) = run("cat", "1\nc\nC\nxy\n", false);
        assert_eq!(status, Status::Lost);
        assert!(output.contains("\"1\" is not a single letter\n"));
        assert!(output.contains("the letter 'c' has already been tried\n"));
        assert!(output.ends_with("You lost! The word was \"cat\".\n"));
    }

    #[test]
    fn out_of_input_keeps_the_secret() {
        let (status, output) = run("cat", "x\n", false);
        assert_eq!(status, Status::Running);
        assert!(!output.contains("cat"));
        assert!(output.ends_with("Out of input, goodbye.\n"));
    }

    #[test]
    fn snapshot_at_the_end() {
        let (status, output) = run("dog", "DOG\n", true);
        assert_eq!(status, Status::Win);
        assert!(output.contains("\"secret_word\": \"dog\""));
        assert!(output.contains("\"status\": \"WIN\""));
    }
}

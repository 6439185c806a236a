//! Evaluating and comparing solvers.

use std::{fmt::Display, io::Write, ops::Deref};

use comfy_table::{Cell, Color, ColumnConstraint, Row, Table, Width};
use owo_colors::{AnsiColors, OwoColorize, Stream};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    game::{Game, Status, MAX_WRONG_GUESS},
    HangmanError, Solver,
};

/// How a single game played by a solver ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Outcome {
    pub status: Status,
    pub wrong_guesses: u32,
    pub letters_guessed: u32,
}

impl Outcome {
    /// Records how `game` ended.
    pub fn from_game(game: &Game) -> Self {
        Outcome {
            status: game.status(),
            wrong_guesses: game.wrong_guesses(),
            letters_guessed: game.attempted().count() as u32,
        }
    }

    pub fn won(&self) -> bool {
        self.status == Status::Win
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.status, self.wrong_guesses, MAX_WRONG_GUESS)
    }
}

/// A record of one solver's games after run by the
/// [test harness](crate::Harness).
///
/// This struct can provide statistics about the games on its own, but it
/// is recommended to produce [`Summary`] first to cache the computations.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Perf {
    pub(crate) tries: Vec<(String, Outcome)>,
    solver_name: String,
}

impl Perf {
    /// Creates a new empty performance record.
    pub(crate) fn new(solver: &dyn Solver) -> Self {
        Perf {
            tries: Vec::new(),
            solver_name: format!("{} v{}", solver, solver.version()),
        }
    }

    /// Gets the name of the solver that produced this performance record.
    pub fn solver_name(&self) -> &str {
        &self.solver_name
    }

    /// Gets every word the solver played and how each game ended.
    pub fn tries(&self) -> &[(String, Outcome)] {
        &self.tries
    }

    /// Gets the number of games played by the solver.
    pub fn num_tried(&self) -> u32 {
        self.tries.len() as u32
    }

    /// Gets the number of games won by the solver.
    ///
    /// This function always returns a number less than or equal to
    /// [`num_tried()`](Self::num_tried()).
    pub fn num_won(&self) -> u32 {
        self.tries.iter().filter(|(_, outcome)| outcome.won()).count() as u32
    }

    /// Gets the number of games the solver lost.
    pub fn num_lost(&self) -> u32 {
        self.num_tried() - self.num_won()
    }

    /// Gets the fraction of games won by the solver.
    ///
    /// Returns zero if nothing was played.
    pub fn frac_won(&self) -> f32 {
        if self.tries.is_empty() {
            return 0.;
        }
        (self.num_won() as f32) / (self.num_tried() as f32)
    }

    /// Prints the solver's summary and then a table showing how each game
    /// went. Lost games are highlighted.
    pub fn print(&self) {
        print!("{}", self);
        let mut table = Table::new();
        if !table.is_tty() {
            table.set_table_width(80);
        } else {
            table.load_preset(comfy_table::presets::UTF8_FULL);
        }
        let columns = (table.get_table_width().unwrap_or(80) / 14).max(1) as usize;
        for chunk in self.tries.chunks(columns) {
            let mut row = Row::new();
            for (word, outcome) in chunk {
                let mut cell = Cell::new(format!("{}\n{}", word, outcome));
                if !outcome.won() {
                    cell = cell.bg(Color::Red).fg(Color::Black);
                }
                row.add_cell(cell);
            }
            table.add_row(row);
        }
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(10));
            columns
        ]);
        println!("{}", table);
    }

    /// Converts this performance record to a pre-calculated summary.
    pub fn to_summary(&self) -> Summary {
        let mut bins = [0; MAX_WRONG_GUESS as usize + 1];

        self.tries
            .iter()
            .filter(|(_, outcome)| outcome.won())
            .for_each(|(_, outcome)| bins[outcome.wrong_guesses as usize] += 1);

        Summary {
            solver_name: &self.solver_name,
            num_tried: self.num_tried(),
            num_won: self.num_won(),
            letters_guessed: self.tries.iter().map(|(_, o)| o.letters_guessed).sum(),
            histogram: bins.into(),
        }
    }
}

impl Display for Perf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_summary())
    }
}

/// A summary of a solver's performance generated by the
/// [test harness](crate::Harness).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Summary<'a> {
    solver_name: &'a str,
    num_tried: u32,
    num_won: u32,
    letters_guessed: u32,
    histogram: Histogram,
}

impl<'a> Summary<'a> {
    /// Gets the name of the solver that produced this summary.
    pub fn solver_name(&self) -> &'a str {
        self.solver_name
    }

    pub fn num_tried(&self) -> u32 {
        self.num_tried
    }

    pub fn num_won(&self) -> u32 {
        self.num_won
    }

    pub fn num_lost(&self) -> u32 {
        self.num_tried - self.num_won
    }

    pub fn frac_won(&self) -> f32 {
        if self.num_tried == 0 {
            return 0.;
        }
        (self.num_won as f32) / (self.num_tried as f32)
    }

    /// Gets the number of wrong guesses made across all won games.
    pub fn mistakes_in_wins(&self) -> u32 {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, v)| i as u32 * v)
            .sum()
    }

    /// Gets the average number of wrong guesses in a won game.
    ///
    /// Lost games are not included. Returns zero if nothing was won.
    pub fn mean_mistakes(&self) -> f32 {
        if self.num_won == 0 {
            return 0.;
        }
        (self.mistakes_in_wins() as f32) / (self.num_won as f32)
    }

    /// Gets the average number of letters guessed per game, won or lost.
    pub fn mean_letters(&self) -> f32 {
        if self.num_tried == 0 {
            return 0.;
        }
        (self.letters_guessed as f32) / (self.num_tried as f32)
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn print(&self, options: SummaryPrintOptions) -> Result<(), HangmanError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", self)?;

        if let Some(baseline) = options.compare {
            let won_diff = (self.frac_won() - baseline.frac_won()) * 100.;
            let mistakes_diff = self.mean_mistakes() - baseline.mean_mistakes();

            writeln!(
                stdout,
                "Compared with {}: {} won, {} mistakes per win",
                baseline.solver_name(),
                format!("{:+.1}%", won_diff).if_supports_color(Stream::Stdout, |text| {
                    if won_diff.is_sign_negative() {
                        text.color(AnsiColors::Red)
                    } else {
                        text.color(AnsiColors::Green)
                    }
                }),
                format!("{:+.2}", mistakes_diff).if_supports_color(Stream::Stdout, |text| {
                    if mistakes_diff.is_sign_positive() {
                        text.color(AnsiColors::Red)
                    } else {
                        text.color(AnsiColors::Green)
                    }
                }),
            )?;
        }

        if options.histogram {
            write!(stdout, "{}", self.histogram)?;
        }

        Ok(())
    }

    pub fn print_options() -> SummaryPrintOptions<'a> {
        SummaryPrintOptions::default()
    }
}

impl<'a> Display for Summary<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", self.solver_name)?;
        writeln!(f, "Played {} words", self.num_tried())?;

        writeln!(
            f,
            "Won {}, or {:.1}%, and lost {}",
            self.num_won(),
            self.frac_won() * 100.,
            self.num_lost()
        )?;

        writeln!(
            f,
            "Won games took {:.2} wrong guesses on average, {:.1} letters per game",
            self.mean_mistakes(),
            self.mean_letters(),
        )?;

        Ok(())
    }
}

#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SummaryPrintOptions<'a> {
    compare: Option<Summary<'a>>,
    histogram: bool,
}

impl<'a> SummaryPrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(self, baseline: &Summary<'a>) -> Self {
        Self {
            compare: Some(baseline.clone()),
            ..self
        }
    }

    pub fn histogram(self, histogram: bool) -> Self {
        Self { histogram, ..self }
    }
}

/// Counts of won games by how many wrong guesses they took.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Histogram {
    bins: [u32; MAX_WRONG_GUESS as usize + 1],
}

impl From<[u32; MAX_WRONG_GUESS as usize + 1]> for Histogram {
    fn from(other: [u32; MAX_WRONG_GUESS as usize + 1]) -> Self {
        Self { bins: other }
    }
}

impl Deref for Histogram {
    type Target = [u32; MAX_WRONG_GUESS as usize + 1];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().copied().max().unwrap_or(0);
        let digits =
            std::iter::successors(Some(max), |&n| (n >= 10).then(|| n / 10)).count() as u32;
        let count_per_mark = (max as f32 / (80. - digits as f32 - 6.)).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            write!(f, "{} |", i)?;
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{:#>marks$} ({})", "", bin)?;
        }

        Ok(())
    }
}

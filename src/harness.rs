//! The test harness for running hangman solvers.

use std::ops::Deref;

use either::Either;
use indicatif::ParallelProgressIterator;
use log::{debug, info};
use rand::seq::index::sample;
use rayon::prelude::*;

use crate::{
    perf::{Outcome, Perf},
    words::WORDS,
    Game, HangmanError, HarnessError, Solver, Summary,
};

/// A test harness that can run many solvers on many words.
///
/// When you want to test your solvers, create a new test harness
/// with [`new()`](Harness::new()). You can then configure it using various
/// methods. Note that these configuration methods consume the existing
/// [`Harness`] and return a new one.
///
/// Every solver plays its own fresh [`Game`] for every word, so solvers
/// never see each other's guesses.
///
/// # Examples
///
/// ```rust
/// # use hangman_rs::harness::Harness;
/// use hangman_rs::solver::Alphabetical;
///
/// let harness = Harness::new()
///     .quiet()
///     .add_solver(Box::new(Alphabetical))
///     .test_num(50);
///
/// let results = harness.run()?;
/// assert_eq!(results[0].num_tried(), 50);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug)]
pub struct Harness {
    solvers: Vec<Box<dyn Solver>>,
    words: Option<Vec<String>>,
    verbose: bool,
    num_words: Option<usize>,
    baseline: Option<usize>,
}

impl Default for Harness {
    fn default() -> Self {
        Harness {
            solvers: Vec::new(),
            words: None,
            verbose: false,
            num_words: Some(100),
            baseline: None,
        }
    }
}

impl Harness {
    /// Creates a new test harness with default configuration.
    ///
    /// Defaults:
    /// 1. tests no solvers
    /// 2. quiet mode
    /// 3. runs each solver on 100 words chosen at random
    /// 4. picks words from [`WORDS`](crate::words::WORDS)
    /// 5. does not compare against a baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the harness show a progress bar while testing.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while testing.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Adds a solver to the harness for testing.
    pub fn add_solver(self, solver: Box<dyn Solver>) -> Self {
        let mut solvers = self.solvers;
        solvers.push(solver);
        Harness { solvers, ..self }
    }

    /// Adds a [`Vec`] of solvers to the harness for testing.
    pub fn add_solvers(self, new: Vec<Box<dyn Solver>>) -> Self {
        let mut solvers = self.solvers;
        solvers.extend(new);
        Harness { solvers, ..self }
    }

    /// Adds a solver to the harness for testing and sets it as the baseline
    /// for comparison.
    pub fn add_baseline(self, solver: Box<dyn Solver>) -> Self {
        self.add_solver(solver).and_baseline()
    }

    /// Sets the most recently added solver as the baseline for comparisons.
    ///
    /// Does nothing if no solver has been added yet.
    pub fn and_baseline(self) -> Self {
        Self {
            baseline: self.solvers.len().checked_sub(1),
            ..self
        }
    }

    /// Uses `words` instead of the built-in word list.
    pub fn words<S: Into<String>>(self, words: impl IntoIterator<Item = S>) -> Self {
        Harness {
            words: Some(words.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Sets the harness to test each solver on every word.
    pub fn test_all(self) -> Self {
        Harness {
            num_words: None,
            ..self
        }
    }

    /// Sets the harness to test each solver on `n` random words.
    ///
    /// If there are fewer than `n` words, every word is used once.
    pub fn test_num(self, n: usize) -> Self {
        Harness {
            num_words: Some(n),
            ..self
        }
    }

    /// Runs the harness and produces performances for each solver.
    ///
    /// The [`Perf`]s will be in the same order as the solvers were added
    /// to the harness.
    pub fn run(&self) -> Result<Record, HangmanError> {
        if self.solvers.is_empty() {
            return Err(HarnessError::NoSolversAdded.into());
        }

        let pool: Vec<&str> = match &self.words {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => WORDS.to_vec(),
        };
        if pool.is_empty() {
            return Err(HarnessError::NoWords.into());
        }

        let mut rng = rand::thread_rng();
        let picked: Vec<&str> = match self.num_words {
            Some(n) => Either::Left(sample(&mut rng, pool.len(), n.min(pool.len())).into_iter()),
            None => Either::Right(0..pool.len()),
        }
        .map(|i| pool[i])
        .collect();
        if picked.is_empty() {
            return Err(HarnessError::NoWords.into());
        }

        info!(
            "running {} solvers on {} words",
            self.solvers.len(),
            picked.len()
        );

        let results = if self.verbose {
            picked
                .par_iter()
                .progress_count(picked.len() as u64)
                .map(|&word| self.run_inner(word))
                .collect::<Result<Vec<_>, HangmanError>>()?
        } else {
            picked
                .par_iter()
                .map(|&word| self.run_inner(word))
                .collect::<Result<Vec<_>, HangmanError>>()?
        };

        let mut perfs: Vec<Perf> = self
            .solvers
            .iter()
            .map(|solver| Perf::new(solver.as_ref()))
            .collect();
        for (word, outcomes) in results {
            for (perf, outcome) in perfs.iter_mut().zip(outcomes) {
                perf.tries.push((word.to_string(), outcome));
            }
        }

        Ok(Record::new(perfs, self.baseline))
    }

    fn run_inner<'w>(&self, word: &'w str) -> Result<(&'w str, Vec<Outcome>), HangmanError> {
        let outcomes = self
            .solvers
            .iter()
            .map(|solver| -> Result<Outcome, HangmanError> {
                let mut game = Game::new(word)?;
                solver
                    .solve(&mut game)
                    .map_err(|source| HarnessError::SolverFailed {
                        solver: solver.to_string(),
                        word: word.to_string(),
                        source,
                    })?;

                if game.is_running() {
                    return Err(HarnessError::SolverGaveUp {
                        solver: solver.to_string(),
                        word: word.to_string(),
                    }
                    .into());
                }

                debug!("{} finished \"{}\" with {}", solver, word, game.status());
                Ok(Outcome::from_game(&game))
            })
            .collect::<Result<Vec<_>, HangmanError>>()?;

        Ok((word, outcomes))
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints performance
    /// summaries of each solver.
    pub fn run_and_summarize(&self) -> Result<Record, HangmanError> {
        let perfs = self.run()?;
        for perf in perfs.iter() {
            println!("{}", perf);
        }
        Ok(perfs)
    }
}

/// The performances produced by one run of the [`Harness`].
#[derive(Debug, Clone, Default)]
pub struct Record {
    perfs: Vec<Perf>,
    baseline: Option<usize>,
}

impl Deref for Record {
    type Target = [Perf];

    fn deref(&self) -> &Self::Target {
        &self.perfs
    }
}

impl Record {
    fn new(perfs: Vec<Perf>, baseline: impl Into<Option<usize>>) -> Self {
        Self {
            perfs,
            baseline: baseline.into(),
        }
    }

    /// Gets the performance of the baseline solver, if one was set.
    pub fn baseline(&self) -> Option<&Perf> {
        self.baseline.and_then(|n| self.perfs.get(n))
    }

    /// Prints every summary with a histogram, comparing each solver with the
    /// baseline when there is one.
    pub fn print_report(&self) -> Result<(), HangmanError> {
        let baseline = self.baseline().map(Perf::to_summary);

        for (i, perf) in self.perfs.iter().enumerate() {
            let summary = perf.to_summary();
            let mut options = Summary::print_options().histogram(true);
            if let Some(baseline) = baseline.as_ref().filter(|_| self.baseline != Some(i)) {
                options = options.compare(baseline);
            }
            summary.print(options)?;
        }

        Ok(())
    }
}

//! Some solvers for use with `hangman_rs`.
//!
//! Each solver consists of a single struct, and everything you need to
//! configure the solver should exist as a method.

mod frequency;
pub use frequency::Frequency;

mod narrowing;
pub use narrowing::Narrowing;

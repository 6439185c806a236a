#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod solvers;

pub mod util;

pub use solvers::*;

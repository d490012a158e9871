//! A tiny command-line arithmetic drill game for children.
//!
//! This crate generates addition, subtraction, multiplication and division
//! exercises, reads typed answers from the terminal, and keeps a running
//! score that turns into a final verdict after the last round. Within one
//! session no operand pair is handed out twice by the same kind of
//! exercise, subtraction never goes negative, and division always comes
//! out even, so every exercise is solvable with small positive integers.
//!
//! The main entry point is [`Game`], which drives a session against an
//! exercise source and a line input. The public modules [`exercise`] and
//! [`io_adapters`] expose the generator and the input abstraction so that
//! sessions can also be scripted, which is how the tests drive the loop.

pub mod exercise;
mod game;
pub mod io_adapters;
mod messages;
mod tally;

/// Just a convenient re-export of the session driver.
///
/// See [`Game`] for the high-level API and examples.
pub use game::{Game, MAX_ROUNDS, Outcome};

use crate::exercise::ExerciseSource;
use crate::io_adapters::{LineInput, ReadOutcome};
use crate::messages;
use crate::tally::Tally;
use anyhow::Result;
use rand::rngs::ThreadRng;
use regex::Regex;
use std::io::Write;

/// Number of rounds in a standard session.
pub const MAX_ROUNDS: u32 = 10;

/// Lines only count as answers when, after trimming, they are an optional
/// minus sign followed by digits.
const ANSWER_PATTERN: &str = r"^-?\d+$";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All rounds were played and the final verdict was printed.
    Completed,
    /// The player stopped early; the final verdict is skipped.
    Cancelled,
}

/// The session driver: rounds, prompting, scoring and the final verdict.
///
/// Example
/// ```
/// use arithmetic_drill::{Game, Outcome};
/// use arithmetic_drill::exercise::RandomExercises;
/// use arithmetic_drill::io_adapters::ScriptedInput;
///
/// let mut out = Vec::new();
/// let outcome = Game::new(1)
///     .play(
///         &mut RandomExercises::new(),
///         &mut ScriptedInput::new(["12"]),
///         &mut out,
///     )
///     .unwrap();
/// assert_eq!(outcome, Outcome::Completed);
/// ```
pub struct Game {
    rounds: u32,
    rng: ThreadRng,
}

impl Game {
    /// Create a game that plays the given number of rounds.
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds,
            rng: rand::rng(),
        }
    }

    /// Play one full session against the given exercise source and IO.
    ///
    /// Returns [`Outcome::Cancelled`] as soon as the input reports an
    /// interrupt; the round summary only prints on completion.
    pub fn play(
        &mut self,
        exercises: &mut dyn ExerciseSource,
        input: &mut dyn LineInput,
        output: &mut dyn Write,
    ) -> Result<Outcome> {
        let pattern = Regex::new(ANSWER_PATTERN)?;
        let mut tally = Tally::new();

        for round in 1..=self.rounds {
            let exercise = exercises.next_exercise();
            writeln!(output, "\nRound {}: What is {} ?", round, exercise)?;

            let answer = match read_answer(input, &pattern)? {
                Some(answer) => answer,
                None => return Ok(Outcome::Cancelled),
            };

            if exercise.check(&answer) {
                tally.record_right();
                writeln!(output, "{}", messages::compliment(&mut self.rng))?;
            } else {
                tally.record_wrong();
                writeln!(
                    output,
                    "{} The right answer was {}.",
                    messages::motivation(&mut self.rng),
                    exercise.result()
                )?;
            }

            writeln!(output, "[correct: {}, wrong: {}]", tally.right(), tally.wrong())?;
        }

        writeln!(output, "\n{}", messages::summary(tally.right(), self.rounds))?;
        Ok(Outcome::Completed)
    }
}

impl Default for Game {
    /// A standard ten-round session.
    fn default() -> Self {
        Self::new(MAX_ROUNDS)
    }
}

/// Keep reading until a line validates as a signed integer.
///
/// Returns `None` when the player cancels. Malformed lines are dropped
/// without feedback; the prompt just comes back.
fn read_answer(input: &mut dyn LineInput, pattern: &Regex) -> Result<Option<String>> {
    loop {
        match input.read_line(">>> ")? {
            ReadOutcome::Line(line) => {
                let trimmed = line.trim();
                if pattern.is_match(trimmed) {
                    return Ok(Some(trimmed.to_string()));
                }
            }
            ReadOutcome::Cancelled => return Ok(None),
        }
    }
}

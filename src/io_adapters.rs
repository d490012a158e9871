use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// What a single line request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The player typed a line (not yet trimmed or validated).
    Line(String),
    /// The player asked to stop: an interrupt or the end of input.
    Cancelled,
}

/// Source of answer lines for the game loop.
///
/// The interactive implementation blocks on the terminal; tests feed the
/// loop from memory instead.
pub trait LineInput {
    /// Read one line, showing `prompt` where the implementation has a
    /// terminal to show it on.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive input backed by a rustyline editor.
///
/// Ctrl-C and Ctrl-D are reported as [`ReadOutcome::Cancelled`] rather
/// than errors; everything the player types lands in the edit history.
pub struct ReadlineInput {
    editor: DefaultEditor,
}

impl ReadlineInput {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(ReadOutcome::Cancelled),
            Err(err) => Err(err.into()),
        }
    }
}

/// Memory-backed input for tests: hands out canned lines, then cancels.
///
/// Public so scripted sessions can be driven from outside the crate too.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadOutcome> {
        Ok(match self.lines.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_hands_out_lines_then_cancels() {
        let mut input = ScriptedInput::new(["3", "bad"]);

        assert_eq!(
            input.read_line(">>> ").unwrap(),
            ReadOutcome::Line("3".to_string())
        );
        assert_eq!(
            input.read_line(">>> ").unwrap(),
            ReadOutcome::Line("bad".to_string())
        );
        assert_eq!(input.read_line(">>> ").unwrap(), ReadOutcome::Cancelled);
        assert_eq!(input.read_line(">>> ").unwrap(), ReadOutcome::Cancelled);
    }
}

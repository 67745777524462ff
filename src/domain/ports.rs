use crate::utils::error::Result;

/// Line-oriented terminal the interactive flow talks to.
pub trait Console {
    /// Writes `prompt` without a newline and reads one line of input.
    /// Returns `Ok(None)` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    fn print_line(&mut self, line: &str) -> Result<()>;
}

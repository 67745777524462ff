use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// `Console` over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

pub type StdConsole = LineConsole<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }

    fn print_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

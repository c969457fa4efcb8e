//! Interactive prompts for values not given on the command line

use aerogen_core::{GenError, GenResult};
use std::io::{self, BufRead, Write};

/// Line-based prompter over any input and output
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one trimmed line
    ///
    /// End of input is an error rather than an empty answer.
    pub fn ask(&mut self, message: &str) -> GenResult<String> {
        write!(self.output, "{message}")
            .and_then(|()| self.output.flush())
            .map_err(|e| GenError::Prompt(format!("failed to write prompt: {e}")))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| GenError::Prompt(format!("failed to read input: {e}")))?;
        if read == 0 {
            return Err(GenError::Prompt(format!(
                "input closed before answering '{}'",
                message.trim()
            )));
        }
        Ok(line.trim().to_string())
    }

    /// Use `given` when present, otherwise ask
    pub fn value_or_ask(&mut self, given: Option<String>, message: &str) -> GenResult<String> {
        match given {
            Some(value) => Ok(value),
            None => self.ask(message),
        }
    }

    /// Ask until `accept` turns an answer into a value
    ///
    /// `retry` is printed after every rejected answer.
    pub fn ask_until<T>(
        &mut self,
        message: &str,
        retry: &str,
        mut accept: impl FnMut(&str) -> Option<T>,
    ) -> GenResult<T> {
        loop {
            let answer = self.ask(message)?;
            if let Some(value) = accept(&answer) {
                return Ok(value);
            }
            writeln!(self.output, "{retry}")
                .map_err(|e| GenError::Prompt(format!("failed to write prompt: {e}")))?;
        }
    }
}

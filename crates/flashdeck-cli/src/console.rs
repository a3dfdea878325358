//! Line-based terminal I/O that records everything into a transcript.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use flashdeck_core::{Examinee, QuizOutcome, Transcript};

pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        let text = format!("{line}\n");
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .context("failed to write to stdout")?;
        self.transcript.record_output(&text);
        Ok(())
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Read the next line, trimmed of spaces and line terminators.
    ///
    /// Running out of input before `exit` is an error.
    pub fn read_line(&mut self) -> Result<String> {
        let mut raw = String::new();
        let read = self
            .input
            .read_line(&mut raw)
            .context("failed to read from stdin")?;
        self.transcript.record_input(&raw);
        if read == 0 {
            anyhow::bail!("unexpected end of input");
        }
        Ok(raw
            .trim_matches(|c: char| c == ' ' || c == '\r' || c == '\n')
            .to_string())
    }

    /// Print `line` and read the reply.
    pub fn ask(&mut self, line: &str) -> Result<String> {
        self.say(line)?;
        self.read_line()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Examinee for Console<R, W> {
    fn answer(&mut self, term: &str) -> Result<String> {
        self.ask(&format!("Print the definition of \"{term}\":"))
    }

    fn on_outcome(&mut self, outcome: &QuizOutcome) -> Result<()> {
        if outcome.correct {
            return self.say("Correct!");
        }
        let mut message = format!("Wrong. The right answer is \"{}\"", outcome.expected);
        if let Some(other) = &outcome.cross_match {
            message.push_str(&format!(", but your definition is correct for \"{other}\""));
        }
        message.push('.');
        self.say(&message)
    }
}

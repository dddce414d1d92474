//! Reading yes/no answers from the player.

use std::io::{self, BufRead, Write};

/// A parsed player reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// The player wants to stop the game.
    Abort,
}

impl Answer {
    /// Parse free text. Returns `None` for anything unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "yeah" | "yep" | "true" => Some(Answer::Yes),
            "n" | "no" | "nope" | "false" => Some(Answer::No),
            "q" | "quit" | "exit" | "abort" => Some(Answer::Abort),
            _ => None,
        }
    }
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Ask a question until the reply is yes, no, or abort.
    ///
    /// End of input counts as abort.
    pub fn ask(&mut self, question: &str) -> io::Result<Answer> {
        loop {
            write!(self.output, "{} (y/n/q) ", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Answer::Abort);
            }

            match Answer::parse(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.output, "Please answer yes or no (or q to quit).")?,
            }
        }
    }

    /// Give back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

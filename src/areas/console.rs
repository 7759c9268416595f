//! Operator interaction
//!
//! Commands never read stdin or write stdout directly; they talk to a [`Console`].
//! The terminal implementation paints text with `colored`, test doubles record the
//! conversation and answer from a script.

use colored::Colorize;
use std::io::{BufRead, Write};

/// Answers accepted as a "yes" by [`Console::confirm`]
const AFFIRMATIVE_ANSWERS: [&str; 2] = ["y", "yes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Success,
    Warning,
    Danger,
}

impl Style {
    pub fn paint(&self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Danger => text.red().to_string(),
        }
    }
}

pub trait Console {
    /// Print one line of text
    fn say(&mut self, text: &str, style: Style) -> anyhow::Result<()>;

    /// Ask a question and return the trimmed answer; empty when no answer is given
    fn ask(&mut self, question: &str, style: Style) -> anyhow::Result<String>;

    /// Ask a yes/no question; anything other than an explicit yes is a no
    fn confirm(&mut self, question: &str, style: Style) -> anyhow::Result<bool> {
        let answer = self.ask(question, style)?;
        Ok(is_affirmative(&answer))
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// [`Console`] over a line-oriented input and an output stream
pub struct Terminal {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Terminal {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Terminal { input, output }
    }

    pub fn stdio() -> Self {
        Terminal::new(
            Box::new(std::io::BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }
}

impl Console for Terminal {
    fn say(&mut self, text: &str, style: Style) -> anyhow::Result<()> {
        writeln!(self.output, "{}", style.paint(text))?;
        Ok(())
    }

    fn ask(&mut self, question: &str, style: Style) -> anyhow::Result<String> {
        write!(self.output, "{} ", style.paint(question.trim_end()))?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF reads zero bytes and leaves the answer empty
        self.input.read_line(&mut answer)?;

        if answer.is_empty() {
            writeln!(self.output)?;
        }

        Ok(answer.trim().to_string())
    }
}

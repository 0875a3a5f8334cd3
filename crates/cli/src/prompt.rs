//! Interactive console prompts with input validation.
//!
//! Generic over the reader and writer so sessions can be driven from
//! stdin/stdout or from an in-memory script in tests. Invalid answers are
//! reported and asked again; end of input aborts with an error.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts and messages go
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed before the session finished");
        }
        Ok(line.trim().to_string())
    }

    /// Keep asking until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{}", complaint)?,
            }
        }
    }

    /// Non-empty free text
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.ask_until(prompt, "Please enter a value.", |answer| {
            (!answer.is_empty()).then(|| answer.to_string())
        })
    }

    pub fn ask_budget(&mut self, prompt: &str) -> Result<f64> {
        self.ask_until(
            prompt,
            "Invalid input. Please enter your budget as a number, e.g. 750.",
            parse_budget,
        )
    }

    /// A count of at least one
    pub fn ask_count(&mut self, prompt: &str) -> Result<usize> {
        self.ask_until(prompt, "Invalid input. Please enter a whole number of 1 or more.", |answer| {
            answer.parse::<usize>().ok().filter(|&n| n >= 1)
        })
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.ask_until(prompt, "Invalid input. Please answer yes or no.", parse_yes_no)
    }
}

/// Parse a budget: a finite, non-negative number, optionally written with a
/// leading `$` and thousands separators ("$1,200.50").
pub fn parse_budget(answer: &str) -> Option<f64> {
    let cleaned: String = answer
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|&c| c != ',')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|budget| budget.is_finite() && *budget >= 0.0)
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

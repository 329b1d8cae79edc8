//! Terminal host for the authoring commands
//!
//! Prompts and warnings go to stderr so that stdout carries nothing but the
//! generated markup. Answers are read line by line from stdin; end of input or
//! an unusable answer counts as a dismissed prompt.

use docmark_markup::{Notifier, Prompter};
use std::io::{BufRead, Write};

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask_text(&mut self, prompt: &str, placeholder: Option<&str>) -> Option<String> {
        let _ = match placeholder {
            Some(hint) => write!(self.output, "{prompt} ({hint}): "),
            None => write!(self.output, "{prompt}: "),
        };
        let _ = self.output.flush();
        self.read_line()
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        let _ = writeln!(self.output, "{prompt}:");
        for (index, option) in options.iter().enumerate() {
            let _ = writeln!(self.output, "  {}) {option}", index + 1);
        }
        let _ = write!(self.output, "> ");
        let _ = self.output.flush();

        let answer = self.read_line()?;
        let index = answer.trim().parse::<usize>().ok()?;
        (1..=options.len()).contains(&index).then(|| index - 1)
    }
}

/// Prints warnings to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn warn(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

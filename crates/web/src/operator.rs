//! The person at the keyboard: blocking confirmations and notifications.

use std::io::{self, BufRead, Write};

/// Blocking prompts shown to the operator.
pub trait Operator {
    /// Ask a yes/no question; `true` means go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show a notification the operator has to acknowledge.
    fn alert(&mut self, message: &str);
}

/// Prompts on stderr, answers from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOperator {
    assume_yes: bool,
}

impl TerminalOperator {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Operator for TerminalOperator {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{prompt} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

//! Interactive confirmation over stdin.

use std::io::{self, Write};

use servgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::ServgenResult,
};

/// Prompter reading yes/no answers from stdin.
///
/// An empty answer (including EOF on piped input) resolves to the default,
/// so non-interactive invocations take the default path rather than hanging
/// or failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str, default_yes: bool) -> ServgenResult<bool> {
        let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
        print!("{message} {hint} ");
        io::stdout().flush().map_err(|e| ApplicationError::PromptFailed {
            reason: format!("failed to flush stdout: {e}"),
        })?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| ApplicationError::PromptFailed {
                reason: format!("failed to read confirmation input: {e}"),
            })?;

        Ok(parse_answer(&input, default_yes))
    }
}

fn parse_answer(input: &str, default_yes: bool) -> bool {
    let answer = input.trim().to_ascii_lowercase();
    if answer.is_empty() {
        return default_yes;
    }
    answer == "y" || answer == "yes"
}

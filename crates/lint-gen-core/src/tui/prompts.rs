//! Charm-style CLI prompts using cliclack

use crate::error::{LintGenError, Result};
use crate::prompt::Prompter;

/// [`Prompter`] backed by the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct CliclackPrompter;

impl CliclackPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Print the session header
    pub fn intro(&self, title: &str) -> Result<()> {
        cliclack::intro(title).map_err(LintGenError::from_prompt)
    }

    pub fn outro(&self, message: &str) -> Result<()> {
        cliclack::outro(message).map_err(LintGenError::from_prompt)
    }

    pub fn outro_cancel(&self, message: &str) -> Result<()> {
        cliclack::outro_cancel(message).map_err(LintGenError::from_prompt)
    }
}

impl Prompter for CliclackPrompter {
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        let mut select = cliclack::select(message);
        for (idx, choice) in choices.iter().enumerate() {
            select = select.item(idx, choice, "");
        }
        select.interact().map_err(LintGenError::from_prompt)
    }

    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool> {
        cliclack::confirm(message)
            .initial_value(initial)
            .interact()
            .map_err(LintGenError::from_prompt)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message).map_err(LintGenError::from_prompt)
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message).map_err(LintGenError::from_prompt)
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message).map_err(LintGenError::from_prompt)
    }
}

//! User interaction for cpp-builder.
//! The orchestrator only talks to the [`Prompter`] trait so tests can script answers.

use dialoguer::{Confirm, Select};

use crate::error::{Error, Result};

/// Interactive surface used while scaffolding.
pub trait Prompter {
    /// Asks the user to pick one of `options`.
    ///
    /// # Returns
    /// * `Ok(Some(index))` - Index of the selected option
    /// * `Ok(None)` - The user cancelled the selection
    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>>;

    /// Asks a yes/no question. `Ok(None)` means the question was dismissed.
    fn confirm(&self, message: &str) -> Result<Option<bool>>;

    /// Shows an error message to the user. Never fails.
    fn report_error(&self, message: &str);
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(options)
            .interact_opt()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, message: &str) -> Result<Option<bool>> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn report_error(&self, message: &str) {
        eprintln!("cpp-builder: {}", message);
    }
}

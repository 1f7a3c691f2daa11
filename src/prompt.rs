//! User decisions
//!
//! The orchestrator only ever asks yes/no questions. `Decider` is the seam;
//! `DialoguerDecider` asks on the terminal.

use crate::error::PromptError;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::fmt;

/// The questions the update flow can ask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Apply every available update
    UpdateAll,
    /// Pick a subset of updates instead
    UpdateSome,
    /// Print the warnings the install command wrote to stderr
    ShowWarnings,
}

impl Question {
    pub fn text(&self) -> &'static str {
        match self {
            Question::UpdateAll => "Update all?",
            Question::UpdateSome => "Update some?",
            Question::ShowWarnings => "Got some warnings. Wanna see?",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Source of yes/no answers
pub trait Decider {
    fn confirm(&mut self, question: Question) -> Result<bool, PromptError>;
}

/// Asks on the terminal with dialoguer
pub struct DialoguerDecider {
    term: Term,
    theme: ColorfulTheme,
}

impl DialoguerDecider {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerDecider {
    fn default() -> Self {
        Self::new()
    }
}

impl Decider for DialoguerDecider {
    fn confirm(&mut self, question: Question) -> Result<bool, PromptError> {
        if !self.term.is_term() {
            return Err(PromptError::NotInteractive {
                question: question.text().to_string(),
            });
        }

        // Defaults to "yes", matching a bare Enter
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question.text())
            .default(true)
            .interact_on(&self.term)
            .map_err(|e| PromptError::Io(e.into()))?;

        tracing::debug!("{} -> {}", question, answer);
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_text() {
        assert_eq!(Question::UpdateAll.to_string(), "Update all?");
        assert_eq!(Question::UpdateSome.to_string(), "Update some?");
        assert!(Question::ShowWarnings.text().contains("warnings"));
    }

    #[test]
    fn test_dialoguer_decider_without_terminal() {
        let mut decider = DialoguerDecider {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        };
        // Test harnesses capture stderr, so there is no terminal to prompt on
        if !decider.term.is_term() {
            let err = decider.confirm(Question::UpdateAll).unwrap_err();
            assert!(matches!(err, PromptError::NotInteractive { .. }));
        }
    }
}

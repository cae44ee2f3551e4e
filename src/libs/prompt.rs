use crate::libs::error::FillError;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Interactive questions asked during a fill run.
pub trait Prompter {
    /// Yes/no question; anything but an explicit yes is `false`.
    fn confirm(&self, prompt: &str) -> Result<bool, FillError>;

    /// Free-text question; an empty answer yields `default`.
    fn input(&self, prompt: &str, default: &str) -> Result<String, FillError>;
}

/// Terminal prompts.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, FillError> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| FillError::Prompt(e.to_string()))
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String, FillError> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| FillError::Prompt(e.to_string()))?;
        let answer = answer.trim();
        Ok(if answer.is_empty() { default } else { answer }.to_string())
    }
}

/// Answers from a fixed script, for non-interactive runs and tests.
///
/// Confirmations accept `y`/`yes`/`s`/`si`/`sí` (any case); an exhausted
/// script declines and falls back to defaults.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|asked| asked.clone()).unwrap_or_default()
    }

    fn next(&self, prompt: &str) -> Option<String> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        self.answers.lock().ok().and_then(|mut answers| answers.pop_front())
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, FillError> {
        Ok(self.next(prompt).map(|answer| is_affirmative(&answer)).unwrap_or(false))
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String, FillError> {
        let answer = self.next(prompt).unwrap_or_default();
        let answer = answer.trim();
        Ok(if answer.is_empty() { default } else { answer }.to_string())
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
}

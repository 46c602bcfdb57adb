//! Interactive questions and the operator-facing log
//!
//! Everything that talks to the operator goes through [`Prompter`]. The cliclack
//! implementation lives in `tui`. Tests drive the same flows with a scripted prompter.

pub mod questions;

use crate::error::Result;
use std::collections::HashMap;

pub use questions::{init_questions, InitAnswers, Linter};

/// Operator interaction used by the generation flows
pub trait Prompter {
    /// Ask the operator to pick one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, initial: bool) -> Result<bool>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;
}

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy)]
pub enum QuestionKind {
    Select { choices: &'static [&'static str] },
    Confirm { default: bool },
}

/// A single question, optionally guarded by earlier answers
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Key the answer is recorded under
    pub key: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    /// When present and false, the question is skipped and no answer is recorded
    pub when: Option<fn(&Answers) -> bool>,
}

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The chosen label
    Choice(&'static str),
    Confirmed(bool),
}

/// Answers collected so far, keyed by question key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<&'static str, Answer>,
}

impl Answers {
    pub fn choice(&self, key: &str) -> Option<&'static str> {
        match self.values.get(key) {
            Some(Answer::Choice(choice)) => Some(*choice),
            _ => None,
        }
    }

    pub fn confirmed(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(Answer::Confirmed(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn insert(&mut self, key: &'static str, answer: Answer) {
        self.values.insert(key, answer);
    }
}

/// Ask each question in order, skipping those whose `when` guard is false
pub fn ask<P: Prompter + ?Sized>(prompter: &mut P, questions: &[Question]) -> Result<Answers> {
    let mut answers = Answers::default();

    for question in questions {
        if let Some(when) = question.when {
            if !when(&answers) {
                continue;
            }
        }

        let answer = match question.kind {
            QuestionKind::Select { choices } => {
                let idx = prompter.select(question.message, choices)?;
                // Out-of-range picks fall back to the first choice
                Answer::Choice(choices.get(idx).or(choices.first()).copied().unwrap_or_default())
            }
            QuestionKind::Confirm { default } => {
                Answer::Confirmed(prompter.confirm(question.message, default)?)
            }
        };

        answers.insert(question.key, answer);
    }

    Ok(answers)
}

//! Prompter with canned answers.

use std::collections::VecDeque;

use super::{PromptError, PromptResult, Prompter};

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Input(String),
    Select(String),
}

/// Replays answers in order and records every question asked.
///
/// An answer of the wrong kind, or running out of answers, fails with
/// [`PromptError::Exhausted`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, question: &str) -> PromptResult<Answer> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::Exhausted(question.to_string()))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> PromptResult<bool> {
        match self.next(question)? {
            Answer::Confirm(yes) => Ok(yes),
            _ => Err(PromptError::Exhausted(question.to_string())),
        }
    }

    fn input(&mut self, question: &str, default: Option<&str>) -> PromptResult<String> {
        match self.next(question)? {
            Answer::Input(text) if text.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Answer::Input(text) => Ok(text),
            _ => Err(PromptError::Exhausted(question.to_string())),
        }
    }

    fn select(&mut self, question: &str, options: &[String]) -> PromptResult<String> {
        match self.next(question)? {
            Answer::Select(choice) if options.contains(&choice) => Ok(choice),
            Answer::Select(_) => Err(PromptError::Cancelled),
            _ => Err(PromptError::Exhausted(question.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut p = ScriptedPrompter::new([
            Answer::Input("Eng1".into()),
            Answer::Confirm(true),
            Answer::Select("base".into()),
        ]);
        let options = vec!["base".to_string()];

        assert_eq!(p.input("Name this resume", None).unwrap(), "Eng1");
        assert!(p.confirm("Use a template?").unwrap());
        assert_eq!(p.select("Pick", &options).unwrap(), "base");
        assert_eq!(p.asked(), ["Name this resume", "Use a template?", "Pick"]);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn test_empty_input_takes_default() {
        let mut p = ScriptedPrompter::new([Answer::Input(String::new())]);
        assert_eq!(p.input("Name of author", Some("Jane")).unwrap(), "Jane");
    }

    #[test]
    fn test_mismatch_and_exhaustion() {
        let mut p = ScriptedPrompter::new([Answer::Confirm(true)]);
        assert!(matches!(p.input("Name", None), Err(PromptError::Exhausted(_))));
        assert!(matches!(p.confirm("Again?"), Err(PromptError::Exhausted(_))));
    }

    #[test]
    fn test_unknown_selection_cancels() {
        let mut p = ScriptedPrompter::new([Answer::Select("missing".into())]);
        let options = vec!["base".to_string()];
        assert!(matches!(p.select("Pick", &options), Err(PromptError::Cancelled)));
    }
}

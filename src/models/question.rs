use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "question")]
    pub text: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

impl Question {
    pub fn new(text: &str, options: [&str; NUM_OPTIONS], correct_answer: usize) -> Self {
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_answer,
        }
    }

    /// Whether `selection` is the correct option for this question.
    pub fn is_correct(&self, selection: Option<usize>) -> bool {
        selection == Some(self.correct_answer)
    }
}

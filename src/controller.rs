//! Quiz progression state machine.
//!
//! The controller owns the question list, the current position and one
//! selection slot per question. It knows nothing about rendering; the view
//! reads it through the accessors below and feeds intents back in.

use thiserror::Error;
use tracing::{debug, info};

use crate::data::builtin_questions;
use crate::models::{AnswerOutcome, NUM_OPTIONS, Question, QuizPhase};

/// A select intent that violated the controller's preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("option {index} is out of range (0-3)")]
    OptionOutOfRange { index: usize },

    #[error("quiz is already completed")]
    QuizCompleted,

    #[error("quiz has no questions")]
    NoQuestions,
}

pub struct QuizController {
    questions: Vec<Question>,
    current_index: usize,
    selections: Vec<Option<usize>>,
    phase: QuizPhase,
}

impl QuizController {
    pub fn new(questions: Vec<Question>) -> Self {
        let num_questions = questions.len();

        Self {
            questions,
            current_index: 0,
            selections: vec![None; num_questions],
            phase: QuizPhase::InProgress,
        }
    }

    /// A controller over the built-in question set.
    pub fn builtin() -> Self {
        Self::new(builtin_questions().to_vec())
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    /// The question being answered, or `None` once the quiz is over.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_completed() {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn current_selection(&self) -> Option<usize> {
        self.selections.get(self.current_index).copied().flatten()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    /// Record `index` as the answer to the current question, replacing any
    /// earlier choice.
    pub fn select_option(&mut self, index: usize) -> Result<(), SelectionError> {
        if self.is_completed() {
            return Err(SelectionError::QuizCompleted);
        }
        if index >= NUM_OPTIONS {
            return Err(SelectionError::OptionOutOfRange { index });
        }

        let Some(slot) = self.selections.get_mut(self.current_index) else {
            return Err(SelectionError::NoQuestions);
        };
        *slot = Some(index);

        debug!(question = self.current_index, option = index, "option selected");
        Ok(())
    }

    pub fn select_next_option(&mut self) -> Result<(), SelectionError> {
        let next = match self.current_selection() {
            Some(selected) => (selected + 1) % NUM_OPTIONS,
            None => 0,
        };
        self.select_option(next)
    }

    pub fn select_previous_option(&mut self) -> Result<(), SelectionError> {
        let previous = match self.current_selection() {
            Some(selected) => (selected + NUM_OPTIONS - 1) % NUM_OPTIONS,
            None => NUM_OPTIONS - 1,
        };
        self.select_option(previous)
    }

    /// Move to the next question, or finish the quiz from the last one.
    ///
    /// Completion is irreversible; advancing a completed quiz does nothing.
    pub fn advance(&mut self) -> QuizPhase {
        if self.is_completed() {
            return self.phase;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            debug!(question = self.current_index, "advanced");
        } else {
            self.phase = QuizPhase::Completed;
            info!(
                score = self.score(),
                total = self.total_questions(),
                "quiz completed"
            );
        }

        self.phase
    }

    /// Number of questions whose selection matches the correct option.
    pub fn score(&self) -> usize {
        self.selections
            .iter()
            .zip(self.questions.iter())
            .filter(|(selection, question)| question.is_correct(**selection))
            .count()
    }

    pub fn outcomes(&self) -> Vec<AnswerOutcome> {
        self.selections
            .iter()
            .zip(self.questions.iter())
            .map(|(selection, question)| match selection {
                None => AnswerOutcome::Unanswered,
                Some(_) if question.is_correct(*selection) => AnswerOutcome::Correct,
                Some(_) => AnswerOutcome::Incorrect,
            })
            .collect()
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::builtin()
    }
}

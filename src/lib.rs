//! # pop-quiz
//!
//! A terminal multiple-choice quiz presenter.
//!
//! [`QuizController`] is the whole quiz as plain data: the question list,
//! the current position, one selection per question and a completion flag.
//! [`Quiz`] wraps it in a ratatui event loop.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pop_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     Quiz::builtin().run()
//! }
//! ```
//!
//! Driving the controller directly:
//!
//! ```rust
//! use pop_quiz::QuizController;
//!
//! let mut quiz = QuizController::builtin();
//! while !quiz.is_completed() {
//!     let correct = quiz.current_question().map(|q| q.correct_answer);
//!     if let Some(answer) = correct {
//!         quiz.select_option(answer).unwrap();
//!     }
//!     quiz.advance();
//! }
//! assert_eq!(quiz.score(), 10);
//! ```

mod controller;
mod data;
pub mod input;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;
use tracing::debug;

pub use controller::{QuizController, SelectionError};
pub use data::{
    BUILTIN_TITLE, LoadError, builtin_questions, load_questions_from_json, parse_questions,
};
pub use input::{Control, ResultScroll, handle_key};
pub use models::{AnswerOutcome, NUM_OPTIONS, Question, QuizPhase};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The log subscriber could not be installed.
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    controller: QuizController,
    title: String,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            controller: QuizController::new(questions),
            title: "Quiz".to_string(),
        }
    }

    /// The built-in Nepali pop culture quiz.
    pub fn builtin() -> Self {
        Self {
            controller: QuizController::builtin(),
            title: BUILTIN_TITLE.to_string(),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// The file holds an array of `{ "text", "options", "correctAnswer" }`
    /// objects with exactly four options each.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.controller, &self.title)
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut QuizController {
        &mut self.controller
    }
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    quiz: &mut QuizController,
    title: &str,
) -> Result<(), QuizError> {
    let mut scroll = ResultScroll::default();

    loop {
        terminal.draw(|frame| ui::render(frame, quiz, title, &scroll))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if input::handle_key(quiz, &mut scroll, key.code) == Control::Quit {
                debug!(score = quiz.score(), completed = quiz.is_completed(), "quit");
                break;
            }
        }
    }

    Ok(())
}

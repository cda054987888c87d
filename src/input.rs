//! Key press to controller intent mapping.

use crossterm::event::KeyCode;
use tracing::warn;

use crate::controller::QuizController;
use crate::models::QuizPhase;

/// What the runner should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Scroll offset of the results breakdown, in rows.
///
/// Owned by the runner; the controller never sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultScroll {
    offset: usize,
}

impl ResultScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll down one row, stopping with the last row at the top.
    pub fn down(&mut self, rows: usize) {
        if self.offset + 1 < rows {
            self.offset += 1;
        }
    }

    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

/// Apply `key` to the controller, or to the results scroll once the quiz is
/// over.
pub fn handle_key(quiz: &mut QuizController, scroll: &mut ResultScroll, key: KeyCode) -> Control {
    match quiz.phase() {
        QuizPhase::InProgress => handle_quiz_key(quiz, key),
        QuizPhase::Completed => handle_result_key(scroll, quiz.total_questions(), key),
    }
}

fn handle_quiz_key(quiz: &mut QuizController, key: KeyCode) -> Control {
    let result = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
            quiz.advance();
            Ok(())
        }
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => quiz.select_next_option(),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => quiz.select_previous_option(),
        KeyCode::Char(c) => match option_for_char(c) {
            Some(index) => quiz.select_option(index),
            None => Ok(()),
        },
        _ => Ok(()),
    };

    if let Err(err) = result {
        warn!(?key, %err, "ignored selection");
    }
    Control::Continue
}

fn handle_result_key(scroll: &mut ResultScroll, rows: usize, key: KeyCode) -> Control {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
        KeyCode::Down | KeyCode::Char('j') => scroll.down(rows),
        KeyCode::Up | KeyCode::Char('k') => scroll.up(),
        _ => {}
    }
    Control::Continue
}

fn option_for_char(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        '1' | 'a' => Some(0),
        '2' | 'b' => Some(1),
        '3' | 'c' => Some(2),
        '4' | 'd' => Some(3),
        _ => None,
    }
}

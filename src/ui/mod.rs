mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::QuizController;
use crate::input::ResultScroll;
use crate::models::QuizPhase;

pub fn render(frame: &mut Frame, quiz: &QuizController, title: &str, scroll: &ResultScroll) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);
    render_title(frame, chunks[0], title);

    match quiz.phase() {
        QuizPhase::InProgress => quiz::render(frame, chunks[1], quiz),
        QuizPhase::Completed => result::render(frame, chunks[1], quiz, scroll),
    }
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(Span::styled(
        title,
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::Question;

    fn draw(quiz: &QuizController) -> Vec<String> {
        draw_scrolled(quiz, &ResultScroll::default())
    }

    fn draw_scrolled(quiz: &QuizController, scroll: &ResultScroll) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, quiz, "Test Quiz", scroll))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|row| row.contains(needle))
    }

    fn quiz() -> QuizController {
        QuizController::new(vec![
            Question::new("Which is first?", ["Alpha", "Beta", "Gamma", "Delta"], 0),
            Question::new("Which is last?", ["Alpha", "Beta", "Gamma", "Delta"], 3),
        ])
    }

    #[test]
    fn shows_progress_question_and_options() {
        let screen = draw(&quiz());
        assert!(contains(&screen, "Test Quiz"));
        assert!(contains(&screen, "Question 1 of 2"));
        assert!(contains(&screen, "Which is first?"));
        assert!(contains(&screen, "A. Alpha"));
        assert!(contains(&screen, "D. Delta"));
    }

    #[test]
    fn marks_selected_option() {
        let mut quiz = quiz();
        quiz.select_option(2).unwrap();
        let screen = draw(&quiz);
        assert!(contains(&screen, "> C. Gamma"));
        assert!(!contains(&screen, "> A. Alpha"));
    }

    #[test]
    fn advance_control_reads_next_then_finish() {
        let mut quiz = quiz();
        let screen = draw(&quiz);
        assert!(contains(&screen, "[ Next ]"));
        assert!(!contains(&screen, "[ Finish ]"));

        quiz.advance();
        let screen = draw(&quiz);
        assert!(contains(&screen, "Question 2 of 2"));
        assert!(contains(&screen, "[ Finish ]"));
    }

    #[test]
    fn completed_quiz_shows_summary() {
        let mut quiz = quiz();
        quiz.select_option(0).unwrap();
        quiz.advance();
        quiz.select_option(1).unwrap();
        quiz.advance();

        let screen = draw(&quiz);
        assert!(contains(&screen, "Quiz Results"));
        assert!(contains(&screen, "You answered 1 out of 2 questions correctly!"));
        assert!(!contains(&screen, "Question 1 of 2"));
    }

    #[test]
    fn empty_quiz_says_so() {
        let screen = draw(&QuizController::new(Vec::new()));
        assert!(contains(&screen, "No questions to show."));
        assert!(!contains(&screen, "Question 1 of 0"));
    }

    #[test]
    fn long_breakdown_scrolls_to_last_row() {
        let questions = (1..=30)
            .map(|i| Question::new(&format!("Question number {i:02}"), ["a", "b", "c", "d"], 0))
            .collect();
        let mut quiz = QuizController::new(questions);
        while !quiz.is_completed() {
            quiz.advance();
        }

        let screen = draw(&quiz);
        assert!(contains(&screen, "Question number 01"));
        assert!(!contains(&screen, "Question number 30"));

        let mut scroll = ResultScroll::default();
        for _ in 0..29 {
            scroll.down(quiz.total_questions());
        }
        assert_eq!(scroll.offset(), 29);

        let screen = draw_scrolled(&quiz, &scroll);
        assert!(contains(&screen, "Question number 30"));
        assert!(!contains(&screen, "Question number 01"));
    }
}

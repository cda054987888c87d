use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::controller::QuizController;
use crate::input::ResultScroll;
use crate::models::AnswerOutcome;

const QUESTION_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizController, scroll: &ResultScroll) {
    let score = quiz.score();
    let total = quiz.total_questions();
    let percentage = calculate_percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], score, total, percentage);
    render_breakdown(frame, chunks[1], quiz, scroll.offset());
    render_controls(frame, chunks[2]);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Results",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "You answered {} out of {} questions correctly!",
            score, total
        )),
        Line::from(Span::styled(
            format!("{:.0}%", percentage),
            Style::default().fg(grade_color(percentage)).bold(),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, quiz: &QuizController, scroll: usize) {
    let lines: Vec<Line> = quiz
        .outcomes()
        .into_iter()
        .zip(quiz.questions().iter())
        .enumerate()
        .map(|(index, (outcome, question))| {
            let (symbol, color) = match outcome {
                AnswerOutcome::Correct => ("+", Color::Green),
                AnswerOutcome::Incorrect => ("-", Color::Red),
                AnswerOutcome::Unanswered => ("?", Color::DarkGray),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.text),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    if text.chars().count() > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::controller::QuizController;
use crate::models::{NUM_OPTIONS, Question};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let Some(question) = quiz.current_question() else {
        render_empty(frame, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // Progress
        Constraint::Length(4), // Question text
        Constraint::Fill(1),   // Options
        Constraint::Length(1), // Advance control
        Constraint::Length(1), // Key hints
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], quiz);
    render_question_text(frame, chunks[1], question);
    render_options(frame, chunks[2], &question.options, quiz.current_selection());
    render_advance(frame, chunks[3], quiz.is_last_question());
    render_controls(frame, chunks[4]);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from("No questions to show.".fg(Color::Yellow)),
        Line::from(""),
        Line::from("enter finish  ·  q quit".fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let progress = format!(
        "Question {} of {}",
        quiz.current_question_number(),
        quiz.total_questions()
    );
    let widget = Paragraph::new(progress).fg(Color::DarkGray).bold();
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let widget = Paragraph::new(question.text.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; NUM_OPTIONS],
    selected: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Black).bg(Color::Blue).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_advance(frame: &mut Frame, area: Rect, is_last: bool) {
    let label = if is_last { "[ Finish ]" } else { "[ Next ]" };
    let widget = Paragraph::new(label)
        .alignment(Alignment::Right)
        .fg(Color::Blue)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("1-4/a-d choose  ·  j/k cycle  ·  enter next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

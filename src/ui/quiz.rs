use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::{OptionState, Snapshot};

use super::summary;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let is_complete = snapshot.is_complete();
    let option_count = snapshot.current_question.options.len() as u16;

    // Once complete the summary takes fixed rows and the options give way.
    let (options_constraint, summary_constraint) = if is_complete {
        (Constraint::Fill(1), Constraint::Length(summary::HEIGHT))
    } else {
        (Constraint::Length(option_count * 2), Constraint::Fill(1))
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        options_constraint,
        Constraint::Length(4),
        summary_constraint,
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_progress(frame, chunks[1], &snapshot);
    render_position(frame, chunks[2], &snapshot);
    render_prompt(frame, chunks[3], &snapshot.current_question.prompt);
    render_options(frame, chunks[4], app, &snapshot);

    if snapshot.feedback_visible {
        render_feedback(frame, chunks[5], &snapshot);
    }
    if is_complete {
        summary::render(frame, chunks[6], &snapshot);
    }

    render_score(frame, chunks[7], &snapshot);
    render_controls(frame, chunks[8], &snapshot);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Quiz App").fg(Color::Cyan).bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .ratio(snapshot.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(widget, area);
}

fn render_position(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let position = format!(
        "Question {} of {}",
        snapshot.question_number(),
        snapshot.total_questions
    );
    frame.render_widget(Paragraph::new(position).fg(Color::DarkGray), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn option_style(state: OptionState) -> Style {
    match state {
        OptionState::Neutral => Style::default().fg(Color::Gray),
        OptionState::Selected => Style::default().fg(Color::Cyan).bold(),
        OptionState::Correct => Style::default().fg(Color::Green).bold(),
        OptionState::Incorrect => Style::default().fg(Color::Red).bold(),
    }
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, snapshot: &Snapshot) {
    let options = &snapshot.current_question.options;
    let spaced = area.height as usize >= options.len() * 2;
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let state = app.option_state(index);
        let style = option_style(state);
        let marker = match state {
            OptionState::Neutral => " ",
            OptionState::Selected => ">",
            OptionState::Correct => "+",
            OptionState::Incorrect => "-",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]));
        if spaced {
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let (content, color) = if snapshot.is_correct == Some(true) {
        (vec![Line::from("Correct!".bold())], Color::Green)
    } else {
        (
            vec![
                Line::from("Incorrect!".bold()),
                Line::from(format!(
                    "The correct answer is: {}",
                    snapshot.correct_answer()
                )),
            ],
            Color::Red,
        )
    };

    let widget = Paragraph::new(content).fg(color).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let widget = Paragraph::new(format!(
        "Score: {} / {}",
        snapshot.score, snapshot.total_questions
    ))
    .alignment(Alignment::Right)
    .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let hint = if !snapshot.feedback_visible {
        "j/k navigate  ·  enter/1-9 answer  ·  q quit"
    } else if snapshot.is_last_question {
        "r restart  ·  q quit"
    } else {
        "enter/n next question  ·  r restart  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

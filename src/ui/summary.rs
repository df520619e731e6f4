use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::Snapshot;

/// Rows needed by the summary: top border plus three lines.
pub const HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let percentage = calculate_percentage(snapshot.score, snapshot.total_questions);
    let grade_color = get_grade_color(percentage);

    let content = vec![
        Line::from(Span::styled(
            "Quiz Complete!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Final Score: {} out of {}  ({:.0}%)",
                snapshot.score, snapshot.total_questions, percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from("press r to restart".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// `total` is the size of a question set, never zero.
fn calculate_percentage(score: usize, total: usize) -> f64 {
    (score as f64 / total as f64) * 100.0
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

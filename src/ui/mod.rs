mod quiz;
mod summary;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);
    quiz::render(frame, area, app);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::{Question, QuestionSet};

    fn rendered_text(app: &App) -> String {
        rendered_text_sized(app, 80, 40)
    }

    fn rendered_text_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn sample_app() -> App {
        App::new(
            QuestionSet::new(vec![
                Question::new("2+2?", ["3", "4", "5"], "4"),
                Question::new("Capital of France?", ["Paris", "Rome"], "Paris"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_renders_question_and_options() {
        let text = rendered_text(&sample_app());
        assert!(text.contains("Quiz App"));
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("2+2?"));
        assert!(text.contains("Score: 0 / 2"));
        assert!(!text.contains("Correct!"));
    }

    #[test]
    fn test_renders_feedback_and_summary() {
        let mut app = sample_app();
        app.select_option(1);
        assert!(rendered_text(&app).contains("Correct!"));

        app.confirm();
        app.select_option(1);
        let text = rendered_text(&app);
        assert!(text.contains("Incorrect!"));
        assert!(text.contains("The correct answer is: Paris"));
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("Final Score: 1 out of 2"));
    }

    #[test]
    fn test_summary_fits_standard_terminal() {
        let mut app = App::new(
            QuestionSet::new(vec![
                Question::new("Red planet?", ["Venus", "Mars", "Jupiter", "Saturn"], "Mars"),
                Question::new(
                    "Gas absorbed by plants?",
                    ["Oxygen", "Nitrogen", "Carbon dioxide", "Helium"],
                    "Carbon dioxide",
                ),
            ])
            .unwrap(),
        );
        app.select_option(1);
        app.confirm();
        app.select_option(0);
        assert!(app.snapshot().is_complete());

        let text = rendered_text_sized(&app, 80, 24);
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("Final Score: 1 out of 2"));
        assert!(text.contains("press r to restart"));
        assert!(text.contains("Incorrect!"));
        assert!(text.contains("Helium"));
    }
}

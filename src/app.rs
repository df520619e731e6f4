use crossterm::event::KeyCode;

use crate::engine::{Intent, OptionState, QuizEngine, Snapshot};
use crate::models::QuestionSet;

/// Input-layer state around a single `QuizEngine`.
///
/// Holds only what the engine does not: the keyboard highlight and the quit
/// flag. Quiz progression lives entirely in the engine.
pub struct App {
    engine: QuizEngine,
    highlighted_option: usize,
    should_quit: bool,
}

impl App {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            engine: QuizEngine::new(questions),
            highlighted_option: 0,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.engine.snapshot()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    /// Visual state of the option at `index`: the highlighted option shows as
    /// `Selected` until an answer is given, then the engine's verdict applies.
    pub fn option_state(&self, index: usize) -> OptionState {
        let snapshot = self.engine.snapshot();
        let Some(option) = snapshot.current_question.options.get(index) else {
            return OptionState::Neutral;
        };
        if !snapshot.feedback_visible && index == self.highlighted_option {
            OptionState::Selected
        } else {
            snapshot.option_state(option)
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn num_options(&self) -> usize {
        self.engine.current_question().options.len()
    }

    pub fn highlight_next_option(&mut self) {
        let count = self.num_options();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + 1) % count;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        let count = self.num_options();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + count - 1) % count;
        }
    }

    /// Submit an intent and keep the highlight in step with the question index.
    pub fn dispatch(&mut self, intent: Intent) {
        let index_before = self.engine.state().current_index();
        let is_restart = intent == Intent::Restart;
        self.engine.apply(intent);
        if is_restart || self.engine.state().current_index() != index_before {
            self.highlighted_option = 0;
        }
    }

    /// Select the option at `index` (0-based) if it exists.
    pub fn select_option(&mut self, index: usize) {
        let Some(option) = self.engine.current_question().options.get(index).cloned() else {
            return;
        };
        self.highlighted_option = index;
        self.dispatch(Intent::SelectAnswer(option));
    }

    /// Enter either answers with the highlighted option or moves on.
    pub fn confirm(&mut self) {
        if self.engine.state().feedback_visible() {
            self.dispatch(Intent::Advance);
        } else {
            self.select_option(self.highlighted_option);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.highlight_next_option(),
            KeyCode::Up | KeyCode::Char('k') => self.highlight_previous_option(),
            KeyCode::Enter | KeyCode::Char(' ') => self.confirm(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.select_option(digit as usize - 1);
                }
            }
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.dispatch(Intent::Advance)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatch(Intent::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn sample_app() -> App {
        let questions = QuestionSet::new(vec![
            Question::new("2+2?", ["3", "4", "5"], "4"),
            Question::new("Capital of France?", ["Paris", "Rome"], "Paris"),
        ])
        .unwrap();
        App::new(questions)
    }

    #[test]
    fn test_highlight_wraps() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.highlighted_option(), 2);
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.highlighted_option(), 0);
    }

    #[test]
    fn test_enter_selects_then_advances() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);

        let snapshot = app.snapshot();
        assert_eq!(snapshot.selected_answer, Some("4"));
        assert_eq!(snapshot.score, 1);

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.snapshot().current_index, 1);
        assert_eq!(app.highlighted_option(), 0);
    }

    #[test]
    fn test_digit_selects_option() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.snapshot().selected_answer, Some("5"));
        assert_eq!(app.snapshot().is_correct, Some(false));

        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.snapshot().selected_answer, Some("5"));
        assert_eq!(app.snapshot().score, 0);
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Char('9'));
        assert!(!app.snapshot().feedback_visible);
    }

    #[test]
    fn test_restart_resets_highlight() {
        let mut app = sample_app();
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Char('r'));

        let snapshot = app.snapshot();
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.score, 0);
        assert_eq!(app.highlighted_option(), 0);
    }

    #[test]
    fn test_option_state_follows_highlight_then_verdict() {
        let mut app = sample_app();
        assert_eq!(app.option_state(0), OptionState::Selected);
        assert_eq!(app.option_state(1), OptionState::Neutral);

        app.handle_key(KeyCode::Down);
        assert_eq!(app.option_state(0), OptionState::Neutral);
        assert_eq!(app.option_state(1), OptionState::Selected);

        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.option_state(0), OptionState::Neutral);
        assert_eq!(app.option_state(1), OptionState::Correct);
        assert_eq!(app.option_state(2), OptionState::Incorrect);
        assert_eq!(app.option_state(7), OptionState::Neutral);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}

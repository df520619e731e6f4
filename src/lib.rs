//! # quiz-widget
//!
//! A single-screen multiple-choice quiz for the terminal.
//!
//! [`QuizEngine`] is the state machine: it owns the question set and the
//! running score, accepts [`Intent`]s and exposes a [`Snapshot`] for
//! rendering. [`Quiz`] wires the engine to a ratatui screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_widget::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("questions.json")?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```
//!
//! Driving the engine directly:
//!
//! ```rust
//! use quiz_widget::{Question, QuizEngine};
//!
//! let mut engine = QuizEngine::initialize(vec![
//!     Question::new("2+2?", ["3", "4", "5"], "4"),
//! ]).unwrap();
//! engine.select_answer("4");
//! assert_eq!(engine.snapshot().score, 1);
//! ```

mod app;
mod data;
mod engine;
mod error;
mod models;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};
use log::info;

pub use app::App;
pub use data::{load_bundled_questions, load_questions_from_json, parse_questions};
pub use engine::{Intent, OptionState, QuizEngine, QuizState, Snapshot};
pub use error::{LoadError, QuizError};
pub use models::{Question, QuestionSet};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            app: App::new(questions),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// The file holds either `{ "data": [...] }` or a bare array of
    /// `{ "question", "options", "correct_answer" }` records.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self::new(load_questions_from_json(path)?))
    }

    /// A quiz over the question set compiled into the crate.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(load_bundled_questions()?))
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        info!("Quiz closed with score {}", self.app.snapshot().score);
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code);
        }
    }

    Ok(())
}

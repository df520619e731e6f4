//! Quiz progression state machine.
//!
//! `QuizEngine` owns the question set and the single live `QuizState`. All
//! mutation goes through the intent methods; renderers read a `Snapshot`.
//!
//! Per question the engine is either unanswered (`feedback_visible == false`)
//! or answered. Completion is derived: answered on the last index.

use log::{debug, trace};

use crate::error::QuizError;
use crate::models::{Question, QuestionSet};

/// A named user action submitted to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectAnswer(String),
    Advance,
    Restart,
}

/// Mutable progression state. Only `QuizEngine` can change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    current_index: usize,
    selected_answer: Option<String>,
    score: usize,
    feedback_visible: bool,
}

impl QuizState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }
}

/// Visual state of one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

/// Read-only projection of the engine used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub current_question: &'a Question,
    pub selected_answer: Option<&'a str>,
    pub score: usize,
    pub current_index: usize,
    pub total_questions: usize,
    pub feedback_visible: bool,
    pub is_last_question: bool,
    /// `None` until feedback is visible.
    pub is_correct: Option<bool>,
}

impl<'a> Snapshot<'a> {
    /// 1-based position for display.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    /// Fraction of questions already passed, `current_index / total_questions`.
    pub fn progress(&self) -> f64 {
        self.current_index as f64 / self.total_questions as f64
    }

    pub fn is_complete(&self) -> bool {
        self.is_last_question && self.feedback_visible
    }

    pub fn correct_answer(&self) -> &'a str {
        &self.current_question.correct_answer
    }

    /// State of `option` as judged by the engine.
    ///
    /// Always `Neutral` while feedback is hidden; the pre-answer highlight
    /// belongs to the input layer (see `App::option_state`).
    pub fn option_state(&self, option: &str) -> OptionState {
        if !self.feedback_visible {
            OptionState::Neutral
        } else if self.current_question.is_correct(option) {
            OptionState::Correct
        } else if self.selected_answer == Some(option) {
            OptionState::Incorrect
        } else {
            OptionState::Neutral
        }
    }
}

pub struct QuizEngine {
    questions: QuestionSet,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: QuestionSet) -> Self {
        debug!("Quiz initialized with {} questions", questions.len());
        Self {
            questions,
            state: QuizState::default(),
        }
    }

    /// Build an engine from raw questions.
    ///
    /// An empty vector is a configuration error.
    pub fn initialize(questions: Vec<Question>) -> Result<Self, QuizError> {
        Ok(Self::new(QuestionSet::new(questions)?))
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.state.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index == self.questions.last_index()
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectAnswer(answer) => self.select_answer(&answer),
            Intent::Advance => self.advance(),
            Intent::Restart => self.restart(),
        }
    }

    /// Record the first answer for the current question.
    ///
    /// Ignored once feedback is visible, and for answers that are not one of
    /// the current options.
    pub fn select_answer(&mut self, answer: &str) {
        if self.state.feedback_visible {
            trace!("Ignoring selection {:?}: question already answered", answer);
            return;
        }

        let question = &self.questions[self.state.current_index];
        if !question.options.iter().any(|option| option == answer) {
            trace!("Ignoring selection {:?}: not an option", answer);
            return;
        }

        let is_correct = question.is_correct(answer);
        if is_correct {
            self.state.score += 1;
        }
        self.state.selected_answer = Some(answer.to_string());
        self.state.feedback_visible = true;

        debug!(
            "Question {} answered {} (score {})",
            self.state.current_index + 1,
            if is_correct { "correctly" } else { "incorrectly" },
            self.state.score
        );
    }

    pub fn advance(&mut self) {
        if !self.state.feedback_visible {
            trace!("Ignoring advance: question not answered");
            return;
        }
        if self.is_last_question() {
            trace!("Ignoring advance: already on the last question");
            return;
        }

        self.state.current_index += 1;
        self.state.selected_answer = None;
        self.state.feedback_visible = false;
        debug!("Advanced to question {}", self.state.current_index + 1);
    }

    pub fn restart(&mut self) {
        self.state = QuizState::default();
        debug!("Quiz restarted");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let current_question = self.current_question();
        let selected_answer = self.state.selected_answer();
        let is_correct = self
            .state
            .feedback_visible
            .then(|| selected_answer.is_some_and(|answer| current_question.is_correct(answer)));

        Snapshot {
            current_question,
            selected_answer,
            score: self.state.score,
            current_index: self.state.current_index,
            total_questions: self.questions.len(),
            feedback_visible: self.state.feedback_visible,
            is_last_question: self.is_last_question(),
            is_correct,
        }
    }
}

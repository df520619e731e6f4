use serde::Deserialize;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn new<P, O, S, C>(prompt: P, options: O, correct_answer: C) -> Self
    where
        P: Into<String>,
        O: IntoIterator<Item = S>,
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::LoadError;
use crate::models::{Question, QuestionSet};

const BUNDLED_QUESTIONS: &str = include_str!("../../data/questions.json");
const BUNDLED_ORIGIN: &str = "bundled questions";

/// Accepted file layouts: `{ "data": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    Wrapped { data: Vec<Question> },
    Bare(Vec<Question>),
}

impl QuestionFile {
    fn into_questions(self) -> Vec<Question> {
        match self {
            QuestionFile::Wrapped { data } => data,
            QuestionFile::Bare(questions) => questions,
        }
    }
}

/// The question set compiled into the binary.
pub fn load_bundled_questions() -> Result<QuestionSet, LoadError> {
    parse_questions_from(BUNDLED_QUESTIONS, BUNDLED_ORIGIN)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionSet, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions_from(&json_content, &path.display().to_string())
}

pub fn parse_questions(json: &str) -> Result<QuestionSet, LoadError> {
    parse_questions_from(json, "input")
}

fn parse_questions_from(json: &str, origin: &str) -> Result<QuestionSet, LoadError> {
    let questions = serde_json::from_str::<QuestionFile>(json)
        .map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?
        .into_questions();

    let set = QuestionSet::new(questions).map_err(|_| LoadError::Empty(origin.to_string()))?;
    info!("Loaded {} questions from {}", set.len(), origin);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_format() {
        let json = r#"{
            "data": [
                { "question": "2+2?", "options": ["3", "4", "5"], "correct_answer": "4" }
            ]
        }"#;
        let set = parse_questions(json).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].prompt, "2+2?");
        assert_eq!(set[0].options, vec!["3", "4", "5"]);
        assert_eq!(set[0].correct_answer, "4");
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            { "question": "Capital of France?", "options": ["Paris", "Rome"], "correct_answer": "Paris" },
            { "question": "2+2?", "options": ["3", "4"], "correct_answer": "4" }
        ]"#;
        let set = parse_questions(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].prompt, "2+2?");
    }

    #[test]
    fn test_empty_set_is_configuration_error() {
        assert!(matches!(
            parse_questions(r#"{ "data": [] }"#),
            Err(LoadError::Empty(_))
        ));
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = parse_questions(r#"{ "data": [ { "question": "missing fields" } ] }"#);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_questions_from_json("does/not/exist/questions.json");
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn test_bundled_questions_load() {
        let set = load_bundled_questions().unwrap();
        assert_eq!(set.len(), 5);
        for question in set.iter() {
            assert!(question.options.contains(&question.correct_answer));
        }
    }
}

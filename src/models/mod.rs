mod question;
mod question_set;

pub use question::Question;
pub use question_set::QuestionSet;

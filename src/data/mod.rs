mod loader;

pub use loader::{load_bundled_questions, load_questions_from_json, parse_questions};

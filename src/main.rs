use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use quiz_widget::{Quiz, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (bundled set when omitted)
    #[arg(short, long, value_name = "FILE")]
    questions: Option<PathBuf>,
    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

fn load(args: &Args) -> Result<Quiz, QuizError> {
    match &args.questions {
        Some(path) => Quiz::from_json(path),
        None => Quiz::bundled(),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let result = load(&args).and_then(Quiz::run);
    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

use std::path::PathBuf;

use clap::Parser;
use pop_quiz::{Quiz, QuizError, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Title shown above the questions
    #[arg(short, long)]
    title: Option<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        logging::init_file_logging(path)?;
    }

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::builtin(),
    };
    let quiz = match args.title {
        Some(title) => quiz.with_title(title),
        None => quiz,
    };

    tracing::info!(questions = quiz.controller().total_questions(), "starting quiz");
    quiz.run()
}

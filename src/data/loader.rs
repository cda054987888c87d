use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::{NUM_OPTIONS, Question};

/// Failure to load a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("{0} must contain at least one question")]
    Empty(String),

    #[error("question {question} has answer index {index}, expected 0-3")]
    InvalidAnswer { question: usize, index: usize },
}

/// Load questions from a JSON array file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: shown.clone(),
        source,
    })?;

    let questions = parse_questions(&json_content).map_err(|err| match err {
        LoadError::Parse { source, .. } => LoadError::Parse {
            path: shown.clone(),
            source,
        },
        LoadError::Empty(_) => LoadError::Empty(shown.clone()),
        other => other,
    })?;

    info!(path = %shown, count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Parse a JSON array of questions.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            path: "<input>".to_string(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty("<input>".to_string()));
    }

    if let Some((question, q)) = questions
        .iter()
        .enumerate()
        .find(|(_, q)| q.correct_answer >= NUM_OPTIONS)
    {
        return Err(LoadError::InvalidAnswer {
            question: question + 1,
            index: q.correct_answer,
        });
    }

    Ok(questions)
}

mod question;
mod state;

pub use question::{NUM_OPTIONS, Question};
pub use state::{AnswerOutcome, QuizPhase};

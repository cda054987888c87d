/// Where the quiz is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Questions are being answered.
    #[default]
    InProgress,
    /// The last question was passed. Terminal.
    Completed,
}

/// How a single question was answered, for the results breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

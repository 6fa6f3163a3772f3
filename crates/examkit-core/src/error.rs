//! Error types for the exam model and the console flows.
//!
//! Malformed user input is not represented here: it is re-prompted at the
//! point of input and never leaves the console layer.

use thiserror::Error;

/// A question or exam would violate a data-model invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Question bodies and answer texts must contain non-whitespace text.
    #[error("text must not be empty")]
    EmptyText,

    /// Marks are point values between 1 and 100.
    #[error("mark must be between 1 and 100, got {0}")]
    InvalidMark(u32),

    /// Exams declare between 1 and 50 questions.
    #[error("exams hold 1 to 50 questions, got {count}")]
    QuestionCount { count: u32 },

    /// Every declared question slot is already filled.
    #[error("exam already holds its {declared} declared questions")]
    ExamFull { declared: u32 },

    /// Practical exams only hold multiple choice questions.
    #[error("practical exams only accept multiple choice questions")]
    PracticalTrueOrFalse,

    /// Summing marks left the `u32` range.
    #[error("total marks overflowed")]
    MarkOverflow,

    /// Multiple choice questions carry between 2 and 10 answers.
    #[error("multiple choice questions need 2 to 10 answers, got {count}")]
    ChoiceCount { count: usize },

    /// Answer ids must be unique within a question.
    #[error("answer id {id} appears more than once")]
    DuplicateAnswerId { id: u32 },

    /// An answer id that the question does not contain.
    #[error("answer id {id} does not exist in this question")]
    UnknownAnswer { id: u32 },

    /// A response that points past the end of the exam.
    #[error("question {index} does not exist in this exam")]
    UnknownQuestion { index: usize },
}

/// Reading from the console failed.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input reached end-of-file while a prompt still needed an answer.
    #[error("input closed before the prompt was answered")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the authoring and administration flows.
#[derive(Debug, Error)]
pub enum ExamError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("exam data is inconsistent: {0}")]
    Model(#[from] ModelError),
}

impl ExamError {
    /// Returns `true` if the error reflects a broken model invariant rather
    /// than the console going away.
    pub fn is_defect(&self) -> bool {
        matches!(self, ExamError::Model(_))
    }
}

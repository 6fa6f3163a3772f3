//! Bounds applied to numeric input while authoring a subject and its exam.

use std::ops::RangeInclusive;

/// Inclusive bounds for every number the authoring flow asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringLimits {
    /// Accepted subject ids.
    pub subject_id: RangeInclusive<u32>,
    /// Exam duration in minutes.
    pub duration_minutes: RangeInclusive<u32>,
    /// Number of questions in an exam.
    pub question_count: RangeInclusive<u32>,
    /// Point value of a single question.
    pub mark: RangeInclusive<u32>,
    /// Number of choices in a multiple choice question.
    pub choices: RangeInclusive<u32>,
}

/// Fewest answers a multiple choice question may hold.
pub const MIN_CHOICES: usize = 2;
/// Most answers a multiple choice question may hold.
pub const MAX_CHOICES: usize = 10;
/// Largest point value of a single question.
pub const MAX_MARK: u32 = 100;
/// Most questions an exam may declare.
pub const MAX_QUESTIONS: u32 = 50;

impl Default for AuthoringLimits {
    fn default() -> Self {
        Self {
            subject_id: 1..=i32::MAX as u32,
            duration_minutes: 1..=180,
            question_count: 1..=MAX_QUESTIONS,
            mark: 1..=MAX_MARK,
            choices: (MIN_CHOICES as u32)..=(MAX_CHOICES as u32),
        }
    }
}

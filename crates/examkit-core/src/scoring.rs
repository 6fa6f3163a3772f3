//! Scoring for final exams and answer review for practical exams.

use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::error::ModelError;
use crate::model::{Answer, Question};

/// The answer id a user picked for the question at `question_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Response {
    pub question_index: usize,
    pub chosen_id: u32,
}

/// One row of the post-exam review of a final exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewLine {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub correct: bool,
}

/// Result of a final exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalScore {
    /// Marks awarded for correct answers.
    pub earned: u32,
    /// Sum of every question's mark.
    pub total: u32,
    pub reviews: Vec<ReviewLine>,
}

impl FinalScore {
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Question", "Your Answer", "Correct Answer"]);
        for line in &self.reviews {
            table.add_row(vec![
                line.question.as_str(),
                line.your_answer.as_str(),
                line.correct_answer.as_str(),
            ]);
        }
        format!(
            "--- Final Exam Results ---\nYour Grade: {} out of {}\n\nReview your answers:\n{table}",
            self.earned, self.total
        )
    }
}

/// Correct answers of a practical exam. Never carries a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticalReview {
    pub entries: Vec<PracticalEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticalEntry {
    pub question: String,
    pub correct_answer: Answer,
}

impl PracticalReview {
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Question", "Correct Answer"]);
        for entry in &self.entries {
            table.add_row(vec![
                entry.question.clone(),
                entry.correct_answer.to_string(),
            ]);
        }
        format!(
            "--- Practical Exam Review ---\nThe correct answers are shown below:\n{table}"
        )
    }
}

/// What administering an exam produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExamOutcome {
    Final(FinalScore),
    Practical(PracticalReview),
}

impl ExamOutcome {
    pub fn render(&self) -> String {
        match self {
            ExamOutcome::Final(score) => score.render(),
            ExamOutcome::Practical(review) => review.render(),
        }
    }
}

/// Score a final exam. A question's mark is earned only when the chosen id
/// equals its correct id. Questions without a response still count toward
/// the total.
pub fn score_final(questions: &[Question], responses: &[Response]) -> Result<FinalScore, ModelError> {
    let total = questions
        .iter()
        .try_fold(0u32, |sum, q| sum.checked_add(q.mark()))
        .ok_or(ModelError::MarkOverflow)?;
    let mut earned: u32 = 0;
    let mut reviews = Vec::with_capacity(responses.len());

    for response in responses {
        let Some(question) = questions.get(response.question_index) else {
            tracing::error!(index = response.question_index, "response for missing question");
            return Err(ModelError::UnknownQuestion {
                index: response.question_index,
            });
        };
        let chosen = question
            .answer(response.chosen_id)
            .ok_or(ModelError::UnknownAnswer {
                id: response.chosen_id,
            })?;

        let correct = question.is_correct(chosen.id());
        if correct {
            earned = earned
                .checked_add(question.mark())
                .ok_or(ModelError::MarkOverflow)?;
        }
        reviews.push(ReviewLine {
            question: question.body().to_string(),
            your_answer: chosen.text().to_string(),
            correct_answer: question.correct_answer().text().to_string(),
            correct,
        });
    }

    Ok(FinalScore {
        earned,
        total,
        reviews,
    })
}

/// List the correct answer of every question, whatever the user chose.
pub fn review_practical(questions: &[Question]) -> PracticalReview {
    PracticalReview {
        entries: questions
            .iter()
            .map(|q| PracticalEntry {
                question: q.body().to_string(),
                correct_answer: q.correct_answer().clone(),
            })
            .collect(),
    }
}

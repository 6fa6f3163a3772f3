//! Exams and how they are administered.

use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Write};

use chrono::Duration;
use serde::Serialize;

use crate::console::Console;
use crate::error::{ExamError, ModelError};
use crate::limits::MAX_QUESTIONS;
use crate::model::{Question, QuestionKind};
use crate::scoring::{review_practical, score_final, ExamOutcome, Response};

const SEPARATOR: &str = "--------------------------";

/// How an exam is administered and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamKind {
    /// Scored; every answer is recorded and reviewed.
    Final,
    /// Unscored; only the correct answers are reviewed afterwards.
    Practical,
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Final => write!(f, "Final Exam"),
            ExamKind::Practical => write!(f, "Practical Exam"),
        }
    }
}

/// An ordered set of questions with a time allotment.
///
/// The duration is informational; nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    kind: ExamKind,
    duration: Duration,
    declared_questions: u32,
    questions: Vec<Question>,
}

impl Exam {
    /// Create an empty exam that will hold `declared_questions` questions,
    /// between 1 and 50.
    pub fn new(
        kind: ExamKind,
        duration: Duration,
        declared_questions: u32,
    ) -> Result<Self, ModelError> {
        if !(1..=MAX_QUESTIONS).contains(&declared_questions) {
            return Err(ModelError::QuestionCount {
                count: declared_questions,
            });
        }
        Ok(Self {
            kind,
            duration,
            declared_questions,
            questions: Vec::new(),
        })
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of questions the author asked for.
    pub fn declared_questions(&self) -> u32 {
        self.declared_questions
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Append a question while the exam is being authored. Rejects a
    /// question beyond the declared count and a true/false question on a
    /// practical exam.
    pub fn push_question(&mut self, question: Question) -> Result<(), ModelError> {
        if self.questions.len() >= self.declared_questions as usize {
            return Err(ModelError::ExamFull {
                declared: self.declared_questions,
            });
        }
        if self.kind == ExamKind::Practical && question.kind() == QuestionKind::TrueOrFalse {
            return Err(ModelError::PracticalTrueOrFalse);
        }
        self.questions.push(question);
        Ok(())
    }

    /// At most 50 questions of at most 100 marks each.
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(Question::mark).sum()
    }

    /// Walk the user through every question in authoring order, then print
    /// the results. Final exams are scored; practical exams only show the
    /// correct answers.
    pub fn administer<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<ExamOutcome, ExamError> {
        tracing::info!(kind = %self.kind, questions = self.questions.len(), "starting exam");
        console.say(format!("--- Starting {} ---", self.kind))?;

        let mut responses = Vec::with_capacity(self.questions.len());
        for (question_index, question) in self.questions.iter().enumerate() {
            console.say(question.render_with_answers())?;
            console.prompt("Your answer (enter ID): ")?;
            let chosen_id = read_answer_id(console, question)?;
            if self.kind == ExamKind::Final {
                responses.push(Response {
                    question_index,
                    chosen_id,
                });
            }
            console.say(SEPARATOR)?;
        }

        let outcome = match self.kind {
            ExamKind::Final => {
                let score = score_final(&self.questions, &responses)?;
                tracing::info!(earned = score.earned, total = score.total, "final exam scored");
                ExamOutcome::Final(score)
            }
            ExamKind::Practical => ExamOutcome::Practical(review_practical(&self.questions)),
        };

        console.say("")?;
        console.say(outcome.render())?;
        Ok(outcome)
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exam Details: {} questions, Time Limit: {} minutes.",
            self.declared_questions,
            self.duration.num_minutes()
        )
    }
}

/// Order exams by the number of questions they were declared with.
pub fn by_question_count(a: &Exam, b: &Exam) -> Ordering {
    a.declared_questions.cmp(&b.declared_questions)
}

/// Read an id that names one of `question`'s answers.
fn read_answer_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &Question,
) -> Result<u32, ExamError> {
    let ids = question.answers().iter().map(|a| a.id());
    let min = ids.clone().min().unwrap_or(1);
    let max = ids.max().unwrap_or(1);
    loop {
        let id = console.read_int(&(min..=max))?;
        if question.answer(id).is_some() {
            return Ok(id);
        }
        console.reject("Invalid input. Please enter one of the listed answer ids: ")?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::Answer;

    fn run(exam: &Exam, input: &str) -> (ExamOutcome, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let outcome = exam.administer(&mut console).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        (outcome, out)
    }

    fn math_final() -> Exam {
        let mut exam = Exam::new(ExamKind::Final, Duration::minutes(30), 2).unwrap();
        exam.push_question(
            Question::multiple_choice_from_texts("2 + 2?", 10, ["2", "3", "4"], 3).unwrap(),
        )
        .unwrap();
        exam.push_question(Question::true_or_false("1 is odd", 5, true).unwrap())
            .unwrap();
        exam
    }

    #[test]
    fn exam_display() {
        let exam = math_final();
        assert_eq!(
            exam.to_string(),
            "Exam Details: 2 questions, Time Limit: 30 minutes."
        );
        assert_eq!(exam.to_string(), exam.to_string());
        assert_eq!(exam.total_marks(), 15);
    }

    #[test]
    fn final_exam_scores_matching_answers() {
        let (outcome, out) = run(&math_final(), "3\n2\n");
        let ExamOutcome::Final(score) = outcome else {
            panic!("expected a final score");
        };
        assert_eq!((score.earned, score.total), (10, 15));
        assert!(out.starts_with("--- Starting Final Exam ---\n"));
        assert!(out.contains("Multiple Choice Question\n2 + 2? (10 Marks)\n1. 2\n2. 3\n3. 4"));
        assert!(out.contains("Your Grade: 10 out of 15"));
        assert_eq!(out.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn final_exam_reprompts_out_of_range_answer() {
        let (outcome, out) = run(&math_final(), "4\n3\n1\n");
        assert!(out.contains("Invalid input. Please enter a number between 1 and 3: "));
        let ExamOutcome::Final(score) = outcome else {
            panic!("expected a final score");
        };
        assert_eq!(score.earned, 15);
    }

    #[test]
    fn practical_exam_reports_correct_answers_without_score() {
        let mut exam = Exam::new(ExamKind::Practical, Duration::minutes(10), 1).unwrap();
        exam.push_question(
            Question::multiple_choice_from_texts("Pick the first letter", 20, ["A", "B"], 1)
                .unwrap(),
        )
        .unwrap();
        let (outcome, out) = run(&exam, "2\n");
        let ExamOutcome::Practical(review) = outcome else {
            panic!("expected a practical review");
        };
        assert_eq!(review.entries[0].correct_answer, Answer::new(1, "A"));
        assert!(out.contains("--- Practical Exam Review ---"));
        assert!(out.contains("1. A"));
        assert!(!out.contains("Your Grade"));
    }

    #[test]
    fn gaps_in_answer_ids_are_reprompted() {
        let mut exam = Exam::new(ExamKind::Final, Duration::minutes(5), 1).unwrap();
        let answers = vec![Answer::new(1, "one"), Answer::new(3, "three")];
        exam.push_question(Question::multiple_choice("Pick", 4, answers, 3).unwrap())
            .unwrap();
        let (outcome, out) = run(&exam, "2\n3\n");
        assert!(out.contains("Please enter one of the listed answer ids"));
        let ExamOutcome::Final(score) = outcome else {
            panic!("expected a final score");
        };
        assert_eq!(score.earned, 4);
    }

    #[test]
    fn closed_input_aborts_administration() {
        let mut console = Console::new(Cursor::new(b"3\n".to_vec()), Vec::new());
        let err = math_final().administer(&mut console).unwrap_err();
        assert!(!err.is_defect());
    }

    #[test]
    fn compare_by_declared_question_count() {
        let small = Exam::new(ExamKind::Final, Duration::minutes(60), 3).unwrap();
        let large = Exam::new(ExamKind::Practical, Duration::minutes(10), 8).unwrap();
        assert_eq!(by_question_count(&small, &large), Ordering::Less);
        assert_eq!(by_question_count(&large, &small), Ordering::Greater);

        let mut exams = vec![large.clone(), small.clone()];
        exams.sort_by(by_question_count);
        assert_eq!(exams[0].declared_questions(), 3);
    }

    #[test]
    fn declared_count_must_be_in_bounds() {
        for count in [0, MAX_QUESTIONS + 1, u32::MAX] {
            let err = Exam::new(ExamKind::Final, Duration::minutes(30), count).unwrap_err();
            assert_eq!(err, ModelError::QuestionCount { count });
        }
        let exam = Exam::new(ExamKind::Final, Duration::minutes(30), MAX_QUESTIONS).unwrap();
        assert!(exam.questions().is_empty());
    }

    #[test]
    fn full_exam_rejects_another_question() {
        let mut exam = math_final();
        let extra = Question::true_or_false("One more", 1, true).unwrap();
        assert_eq!(
            exam.push_question(extra).unwrap_err(),
            ModelError::ExamFull { declared: 2 }
        );
        assert_eq!(exam.questions().len(), 2);
    }

    #[test]
    fn practical_exam_rejects_true_or_false() {
        let mut exam = Exam::new(ExamKind::Practical, Duration::minutes(10), 2).unwrap();
        let question = Question::true_or_false("Sky is blue", 5, true).unwrap();
        assert_eq!(
            exam.push_question(question).unwrap_err(),
            ModelError::PracticalTrueOrFalse
        );
        assert!(exam.questions().is_empty());
    }

    #[test]
    fn total_marks_at_upper_bounds() {
        let mut exam = Exam::new(ExamKind::Final, Duration::minutes(180), MAX_QUESTIONS).unwrap();
        for i in 0..MAX_QUESTIONS {
            let question = Question::true_or_false(format!("q{i}"), 100, true).unwrap();
            exam.push_question(question).unwrap();
        }
        assert_eq!(exam.total_marks(), 5_000);
    }
}

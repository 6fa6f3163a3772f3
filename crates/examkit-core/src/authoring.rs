//! Interactive exam authoring.

use std::io::{BufRead, Write};

use chrono::Duration;

use crate::console::Console;
use crate::error::ExamError;
use crate::exam::{Exam, ExamKind};
use crate::limits::AuthoringLimits;
use crate::model::{numbered_answers, Question, QuestionKind, TRUE_ID};

const BINARY_MENU: std::ops::RangeInclusive<u32> = 1..=2;

/// Ask for the exam kind, duration and question count, then collect every
/// question. Practical exams only hold multiple choice questions.
pub fn author_exam<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    subject_name: &str,
    limits: &AuthoringLimits,
) -> Result<Exam, ExamError> {
    console.say(format!("\n--- Creating Exam for {subject_name} ---"))?;
    console.say("Choose Exam Type:\n1. Final Exam\n2. Practical Exam")?;
    let kind = match console.read_int(&BINARY_MENU)? {
        1 => ExamKind::Final,
        _ => ExamKind::Practical,
    };

    console.prompt("Enter the time for the exam (in minutes): ")?;
    let minutes = console.read_int(&limits.duration_minutes)?;

    console.prompt("Enter the number of questions for the exam: ")?;
    let count = console.read_int(&limits.question_count)?;

    let mut exam = Exam::new(kind, Duration::minutes(i64::from(minutes)), count)?;

    for number in 1..=count {
        console.say(format!("\n--- Adding Question {number}/{count} ---"))?;
        let question_kind = match kind {
            ExamKind::Final => {
                console.say("Choose Question Type:\n1. True or False\n2. MCQ (Multiple Choice)")?;
                match console.read_int(&BINARY_MENU)? {
                    1 => QuestionKind::TrueOrFalse,
                    _ => QuestionKind::MultipleChoice,
                }
            }
            ExamKind::Practical => {
                console.say("Practical exams only support MCQ questions.")?;
                QuestionKind::MultipleChoice
            }
        };

        let question = author_question(console, question_kind, limits)?;
        tracing::debug!(number, kind = ?question.kind(), mark = question.mark(), "question added");
        exam.push_question(question)?;
    }

    tracing::info!(
        kind = %exam.kind(),
        questions = exam.questions().len(),
        total_marks = exam.total_marks(),
        "exam authored"
    );
    console.say("\nExam created successfully!")?;
    Ok(exam)
}

fn author_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    kind: QuestionKind,
    limits: &AuthoringLimits,
) -> Result<Question, ExamError> {
    console.prompt("Enter the body of the question: ")?;
    let body = console.read_text()?;

    console.prompt("Enter the mark for this question: ")?;
    let mark = console.read_int(&limits.mark)?;

    let question = match kind {
        QuestionKind::TrueOrFalse => {
            console.prompt("What is the correct answer? (1 for True, 2 for False): ")?;
            let correct = console.read_int(&BINARY_MENU)?;
            Question::true_or_false(body, mark, correct == TRUE_ID)?
        }
        QuestionKind::MultipleChoice => {
            console.prompt("How many answer choices for this question? ")?;
            let choices = console.read_int(&limits.choices)?;

            let mut texts = Vec::with_capacity(choices as usize);
            for n in 1..=choices {
                console.prompt(&format!("Enter text for answer choice {n}: "))?;
                texts.push(console.read_text()?);
            }
            let answers = numbered_answers(texts);

            console.say("Current Choices:")?;
            for answer in &answers {
                console.say(answer)?;
            }

            console.prompt("Which choice is the correct answer? (Enter ID): ")?;
            let correct_id = console.read_int(&(1..=choices))?;
            Question::multiple_choice(body, mark, answers, correct_id)?
        }
    };
    Ok(question)
}

//! Answers and questions.
//!
//! Both are immutable once built. Constructors enforce the invariants the
//! rest of the crate relies on: ids are unique within a question and the
//! correct answer is always one of the question's answers.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::ModelError;
use crate::limits::{MAX_CHOICES, MAX_MARK, MIN_CHOICES};

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Answer {
    id: u32,
    text: String,
}

impl Answer {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.text)
    }
}

/// The two question shapes an exam can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueOrFalse,
}

impl QuestionKind {
    /// Category label shown above the question body.
    pub fn header(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice Question",
            QuestionKind::TrueOrFalse => "True or False Question",
        }
    }
}

/// Fixed answer id of "True" in a true/false question.
pub const TRUE_ID: u32 = 1;
/// Fixed answer id of "False" in a true/false question.
pub const FALSE_ID: u32 = 2;

/// A prompt worth `mark` points with one correct answer among `answers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    kind: QuestionKind,
    body: String,
    mark: u32,
    answers: Vec<Answer>,
    correct_id: u32,
}

impl Question {
    /// Build a multiple choice question from caller-supplied answers.
    pub fn multiple_choice(
        body: impl Into<String>,
        mark: u32,
        answers: Vec<Answer>,
        correct_id: u32,
    ) -> Result<Self, ModelError> {
        let body = checked_text(body.into())?;
        checked_mark(mark)?;

        if !(MIN_CHOICES..=MAX_CHOICES).contains(&answers.len()) {
            return Err(ModelError::ChoiceCount {
                count: answers.len(),
            });
        }

        let mut seen = HashSet::with_capacity(answers.len());
        for answer in &answers {
            if answer.text.trim().is_empty() {
                return Err(ModelError::EmptyText);
            }
            if !seen.insert(answer.id) {
                return Err(ModelError::DuplicateAnswerId { id: answer.id });
            }
        }
        if !seen.contains(&correct_id) {
            return Err(ModelError::UnknownAnswer { id: correct_id });
        }

        Ok(Self {
            kind: QuestionKind::MultipleChoice,
            body,
            mark,
            answers,
            correct_id,
        })
    }

    /// Build a multiple choice question, numbering `texts` from 1 in order.
    pub fn multiple_choice_from_texts<S: Into<String>>(
        body: impl Into<String>,
        mark: u32,
        texts: impl IntoIterator<Item = S>,
        correct_id: u32,
    ) -> Result<Self, ModelError> {
        let answers = numbered_answers(texts);
        Self::multiple_choice(body, mark, answers, correct_id)
    }

    /// Build a true/false question. The answers are always
    /// `1. True` and `2. False`.
    pub fn true_or_false(body: impl Into<String>, mark: u32, correct: bool) -> Result<Self, ModelError> {
        let body = checked_text(body.into())?;
        checked_mark(mark)?;
        Ok(Self {
            kind: QuestionKind::TrueOrFalse,
            body,
            mark,
            answers: vec![Answer::new(TRUE_ID, "True"), Answer::new(FALSE_ID, "False")],
            correct_id: if correct { TRUE_ID } else { FALSE_ID },
        })
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn header(&self) -> &'static str {
        self.kind.header()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn mark(&self) -> u32 {
        self.mark
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Look up an answer by id.
    pub fn answer(&self, id: u32) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }

    pub fn correct_answer(&self) -> &Answer {
        // Constructors guarantee the correct id is present.
        self.answer(self.correct_id)
            .unwrap_or_else(|| unreachable!("correct answer {} missing", self.correct_id))
    }

    pub fn is_correct(&self, id: u32) -> bool {
        id == self.correct_id
    }

    /// The question followed by one line per answer.
    pub fn render_with_answers(&self) -> String {
        let mut out = self.to_string();
        for answer in &self.answers {
            out.push('\n');
            out.push_str(&answer.to_string());
        }
        out
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{} ({} Marks)", self.header(), self.body, self.mark)
    }
}

/// Number answer texts 1..=n in the order given.
pub fn numbered_answers<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Vec<Answer> {
    texts
        .into_iter()
        .zip(1u32..)
        .map(|(text, id)| Answer::new(id, text))
        .collect()
}

fn checked_text(text: String) -> Result<String, ModelError> {
    if text.trim().is_empty() {
        Err(ModelError::EmptyText)
    } else {
        Ok(text)
    }
}

fn checked_mark(mark: u32) -> Result<(), ModelError> {
    if !(1..=MAX_MARK).contains(&mark) {
        Err(ModelError::InvalidMark(mark))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_display() {
        let answer = Answer::new(3, "Paris");
        let first = answer.to_string();
        assert_eq!(first, "3. Paris");
        assert_eq!(answer.to_string(), first);
    }

    #[test]
    fn question_display_is_stable() {
        let q = Question::multiple_choice_from_texts("2 + 2?", 10, ["2", "3", "4"], 3).unwrap();
        let first = q.to_string();
        assert_eq!(first, "Multiple Choice Question\n2 + 2? (10 Marks)");
        assert_eq!(q.to_string(), first);
        assert_eq!(
            q.render_with_answers(),
            "Multiple Choice Question\n2 + 2? (10 Marks)\n1. 2\n2. 3\n3. 4"
        );
    }

    #[test]
    fn true_or_false_answers_are_fixed() {
        for correct in [true, false] {
            let q = Question::true_or_false("Sky is blue", 5, correct).unwrap();
            let answers: Vec<_> = q.answers().iter().map(|a| (a.id(), a.text())).collect();
            assert_eq!(answers, vec![(1, "True"), (2, "False")]);
            assert_eq!(q.header(), "True or False Question");
        }
        let q = Question::true_or_false("Sky is green", 5, false).unwrap();
        assert_eq!(q.correct_answer(), &Answer::new(2, "False"));
        assert!(q.is_correct(FALSE_ID));
        assert!(!q.is_correct(TRUE_ID));
    }

    #[test]
    fn mcq_correct_answer_must_exist() {
        let err = Question::multiple_choice_from_texts("Pick", 1, ["A", "B"], 3).unwrap_err();
        assert_eq!(err, ModelError::UnknownAnswer { id: 3 });
    }

    #[test]
    fn mcq_choice_count_bounds() {
        let two = Question::multiple_choice_from_texts("Pick", 1, ["A", "B"], 1);
        assert!(two.is_ok());

        let ten: Vec<String> = (1..=10).map(|i| format!("choice {i}")).collect();
        let q = Question::multiple_choice_from_texts("Pick", 1, ten, 10).unwrap();
        assert_eq!(q.answers().len(), 10);
        assert_eq!(q.correct_answer().text(), "choice 10");

        let one = Question::multiple_choice_from_texts("Pick", 1, ["A"], 1).unwrap_err();
        assert_eq!(one, ModelError::ChoiceCount { count: 1 });

        let eleven: Vec<String> = (1..=11).map(|i| i.to_string()).collect();
        let err = Question::multiple_choice_from_texts("Pick", 1, eleven, 1).unwrap_err();
        assert_eq!(err, ModelError::ChoiceCount { count: 11 });
    }

    #[test]
    fn mcq_rejects_duplicate_ids() {
        let answers = vec![Answer::new(1, "A"), Answer::new(1, "B")];
        let err = Question::multiple_choice("Pick", 1, answers, 1).unwrap_err();
        assert_eq!(err, ModelError::DuplicateAnswerId { id: 1 });
    }

    #[test]
    fn mcq_accepts_non_contiguous_ids() {
        let answers = vec![Answer::new(4, "A"), Answer::new(9, "B")];
        let q = Question::multiple_choice("Pick", 2, answers, 9).unwrap();
        assert_eq!(q.correct_answer().text(), "B");
        assert!(q.answer(1).is_none());
    }

    #[test]
    fn rejects_empty_text_and_zero_mark() {
        assert_eq!(
            Question::true_or_false("   ", 1, true).unwrap_err(),
            ModelError::EmptyText
        );
        assert_eq!(
            Question::true_or_false("Body", 0, true).unwrap_err(),
            ModelError::InvalidMark(0)
        );
        assert_eq!(
            Question::true_or_false("Body", MAX_MARK + 1, true).unwrap_err(),
            ModelError::InvalidMark(101)
        );
        assert_eq!(
            Question::multiple_choice_from_texts("Body", u32::MAX, ["A", "B"], 1).unwrap_err(),
            ModelError::InvalidMark(u32::MAX)
        );
        assert!(Question::true_or_false("Body", MAX_MARK, true).is_ok());
        assert_eq!(
            Question::multiple_choice_from_texts("Body", 1, ["A", " "], 1).unwrap_err(),
            ModelError::EmptyText
        );
    }

    #[test]
    fn question_serializes_kind_in_snake_case() {
        let q = Question::true_or_false("Body", 1, true).unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["kind"], "true_or_false");
        assert_eq!(json["correct_id"], 1);
    }
}

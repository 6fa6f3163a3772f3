//! Subjects and the exam they own.

use std::fmt;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::authoring::author_exam;
use crate::console::Console;
use crate::error::ExamError;
use crate::exam::Exam;
use crate::limits::AuthoringLimits;

/// A named subject with at most one exam.
///
/// Cloning a subject copies its id and name but shares the exam: both
/// subjects point at the same [`Exam`] afterwards. Exams are immutable once
/// authored, so the sharing is never observable through mutation.
#[derive(Debug, Clone)]
pub struct Subject {
    id: u32,
    name: String,
    exam: Option<Rc<Exam>>,
}

impl Subject {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exam: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exam, present only after authoring.
    pub fn exam(&self) -> Option<&Rc<Exam>> {
        self.exam.as_ref()
    }

    /// Attach an already built exam, replacing any previous one.
    pub fn set_exam(&mut self, exam: Exam) {
        self.exam = Some(Rc::new(exam));
    }

    /// Run the interactive authoring flow and keep the resulting exam.
    pub fn create_exam<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        limits: &AuthoringLimits,
    ) -> Result<&Exam, ExamError> {
        let exam = author_exam(console, &self.name, limits)?;
        tracing::info!(subject = self.id, "exam attached to subject");
        let exam: &Exam = self.exam.insert(Rc::new(exam));
        Ok(exam)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {} (ID: {})", self.name, self.id)
    }
}

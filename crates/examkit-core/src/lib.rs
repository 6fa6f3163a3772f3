//! examkit-core — Exam data model plus the authoring and administration flows.
//!
//! Questions and exams are built interactively through a [`console::Console`]
//! and administered the same way. Nothing is persisted.

pub mod authoring;
pub mod console;
pub mod error;
pub mod exam;
pub mod limits;
pub mod model;
pub mod scoring;
pub mod subject;

pub use console::Console;
pub use error::{ConsoleError, ExamError, ModelError};
pub use exam::{Exam, ExamKind};
pub use limits::AuthoringLimits;
pub use model::{Answer, Question, QuestionKind};
pub use scoring::ExamOutcome;
pub use subject::Subject;

//! The linear console session: subject setup, exam authoring, then an
//! optional sitting of the exam.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use examkit_core::{AuthoringLimits, Console, ExamError, ExamOutcome, Subject};

/// Whether a session error comes from broken exam data rather than from the
/// console.
pub fn is_defect(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExamError>()
        .is_some_and(ExamError::is_defect)
}

/// Run one full session. Returns the outcome if the exam was taken.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    limits: &AuthoringLimits,
) -> Result<Option<ExamOutcome>> {
    console.say("Welcome to the Exam Creator!")?;
    console.say("--- Subject Setup ---")?;
    console.prompt("Please enter the Subject ID: ")?;
    let id = console.read_int(&limits.subject_id)?;
    console.prompt("Please enter the Subject Name: ")?;
    let name = console.read_text()?;

    let mut subject = Subject::new(id, name);
    tracing::info!(subject = %subject, "subject created");

    subject
        .create_exam(console, limits)
        .context("failed to author the exam")?;
    let exam = subject
        .exam()
        .cloned()
        .context("no exam attached after authoring")?;

    console.say(format!("\n{subject}"))?;
    console.say(&*exam)?;

    console.prompt("\nDo you want to start the exam now? (yes/no): ")?;
    let start = console
        .read_line()?
        .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes"));
    if !start {
        console.say("Exam is ready. You can take it later. Goodbye!")?;
        return Ok(None);
    }

    console.say("\nPress Enter to start the exam...")?;
    console.read_line()?;

    let outcome = exam
        .administer(console)
        .context("failed to administer the exam")?;
    Ok(Some(outcome))
}

//! # Console Session
//!
//! Interactive prompt-driven entry of an academic record.
//!
//! The session is generic over its input and output so it can run against
//! a terminal or against in-memory buffers in tests.
//!
//! Each subject is checked as soon as it is entered; the first problem ends
//! the session with an `Error:` line. End of input (Ctrl-D) ends it with
//! `Goodbye!`.

use cgpa_core::{
    AcademicRecord, OverallResult, SubjectScore, Term, ValidationError, compute_overall_result,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

const NON_FINITE_RESULT: &str = "calculation produced a non-finite value";

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A record was entered and its results printed.
    Completed(OverallResult),
    /// Input was rejected; carries the message shown to the user.
    Rejected(String),
    /// The user closed the input stream.
    Ended,
}

/// Why record entry stopped early.
#[derive(Debug, Error)]
enum EntryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An interactive session over `input` and `output`.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Create a session.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one session: banner, prompts, then results or an error line.
    ///
    /// Only failures to read or write the streams are returned as `Err`.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        writeln!(self.output, "CGPA Calculator - Console Mode")?;
        writeln!(self.output, "{}", "=".repeat(40))?;

        match self.read_record() {
            Ok(record) => {
                let result = compute_overall_result(&record);
                if !result.is_finite() {
                    let message = NON_FINITE_RESULT.to_string();
                    writeln!(self.output, "\nError: {}", message)?;
                    return Ok(SessionOutcome::Rejected(message));
                }
                write!(self.output, "\n{}", result.to_table())?;
                Ok(SessionOutcome::Completed(result))
            }
            Err(EntryError::EndOfInput) => {
                writeln!(self.output, "\n\nGoodbye!")?;
                Ok(SessionOutcome::Ended)
            }
            Err(EntryError::Io(e)) => Err(e),
            Err(e) => {
                let message = e.to_string();
                writeln!(self.output, "\nError: {}", message)?;
                Ok(SessionOutcome::Rejected(message))
            }
        }
    }

    fn read_record(&mut self) -> Result<AcademicRecord, EntryError> {
        let semester_count = self.prompt_count("Enter number of semesters: ")?;
        let mut terms = Vec::new();

        for semester in 1..=semester_count {
            writeln!(self.output, "\n--- Semester {} ---", semester)?;
            let subject_count = self.prompt_count("Enter number of subjects: ")?;
            let mut subjects = Vec::new();

            for subject in 1..=subject_count {
                let gp = self.prompt_number(&format!("Enter Grade Point for subject {}: ", subject))?;
                let credits = self.prompt_number(&format!("Enter Credit for subject {}: ", subject))?;
                let score = SubjectScore::new(gp, credits).map_err(|reason| {
                    ValidationError::Score {
                        semester,
                        subject,
                        reason,
                    }
                })?;
                subjects.push(score);
            }

            let term = Term::new(subjects).ok_or(ValidationError::EmptySemester { semester })?;
            terms.push(term);
        }

        debug!(semesters = terms.len(), "Console record complete");
        AcademicRecord::new(terms).ok_or_else(|| ValidationError::NoSemesters.into())
    }

    fn prompt(&mut self, text: &str) -> Result<String, EntryError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EntryError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_count(&mut self, text: &str) -> Result<usize, EntryError> {
        let line = self.prompt(text)?;
        line.parse().map_err(|_| {
            EntryError::InvalidInput(format!("expected a whole number, got '{}'", line))
        })
    }

    fn prompt_number(&mut self, text: &str) -> Result<f64, EntryError> {
        let line = self.prompt(text)?;
        line.parse().map_err(|_| {
            EntryError::InvalidInput(format!("expected a number, got '{}'", line))
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

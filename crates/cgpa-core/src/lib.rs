//! # CGPA Core
//!
//! The validation and calculation pipeline for the CGPA calculator.
//!
//! Data flows one way:
//!
//! ```text
//! raw JSON ──► validator ──► AcademicRecord ──► calculator ──► OverallResult
//! ```
//!
//! - [`validator`] turns untrusted input into an [`AcademicRecord`] or a
//!   positioned [`ValidationError`].
//! - [`calculator`] reduces a record into per-semester SGPAs and the CGPA.
//! - [`report`] holds the derived result types and their renderings.
//!
//! Nothing here performs I/O or holds state between calls.

pub mod calculator;
pub mod record;
pub mod report;
pub mod sample;
pub mod validator;

pub use calculator::{compute_overall_result, compute_term_result, round2};
pub use record::{AcademicRecord, ScoreError, SubjectScore, Term};
pub use report::{OverallResult, TermResult};
pub use sample::sample_input;
pub use validator::{ValidationError, validate, validate_json};

/// Lowest accepted grade point.
pub const MIN_GRADE_POINT: f64 = 0.0;

/// Highest accepted grade point.
pub const MAX_GRADE_POINT: f64 = 10.0;

/// Format a number the way result messages print it.
///
/// Integral values keep a trailing `.0` (`11.0`, not `11`) so an offending
/// value reads as the decimal the user typed.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

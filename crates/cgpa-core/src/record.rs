//! # Record Types
//!
//! The validated input model: an [`AcademicRecord`] of [`Term`]s, each a list
//! of [`SubjectScore`]s.
//!
//! All three types keep their fields private and are only built through
//! checked constructors, so holding a value means its invariants hold:
//!
//! - `0 <= grade_point <= 10`, `credits > 0`, both finite
//! - every term has at least one subject
//! - every record has at least one term

use crate::{MAX_GRADE_POINT, MIN_GRADE_POINT, format_number};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// SCORE ERRORS
// =============================================================================

/// Why a single grade point / credit pair was rejected.
///
/// These carry the offending value only; the validator adds the
/// semester and subject position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A field could not be read as a finite number.
    #[error("GP and Credits must be numbers, got {0}")]
    NotNumeric(String),

    /// Grade point outside the accepted scale.
    #[error("GP must be between 0-10, got {}", format_number(*.0))]
    GradePointOutOfRange(f64),

    /// Zero or negative credits.
    #[error("Credits must be positive, got {}", format_number(*.0))]
    NonPositiveCredits(f64),
}

// =============================================================================
// SUBJECT SCORE
// =============================================================================

/// One subject's grade point and credit weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubjectScore {
    #[serde(rename = "gp")]
    grade_point: f64,
    credits: f64,
}

impl SubjectScore {
    /// Create a subject score, checking both values.
    ///
    /// The grade point is checked before the credits, matching the order in
    /// which errors are reported.
    pub fn new(grade_point: f64, credits: f64) -> Result<Self, ScoreError> {
        if !grade_point.is_finite() {
            return Err(ScoreError::NotNumeric(format_number(grade_point)));
        }
        if !credits.is_finite() {
            return Err(ScoreError::NotNumeric(format_number(credits)));
        }
        if !(MIN_GRADE_POINT..=MAX_GRADE_POINT).contains(&grade_point) {
            return Err(ScoreError::GradePointOutOfRange(grade_point));
        }
        if credits <= 0.0 {
            return Err(ScoreError::NonPositiveCredits(credits));
        }
        Ok(Self {
            grade_point,
            credits,
        })
    }

    /// The grade point, within `0..=10`.
    #[must_use]
    pub fn grade_point(&self) -> f64 {
        self.grade_point
    }

    /// The credit weight, always positive.
    #[must_use]
    pub fn credits(&self) -> f64 {
        self.credits
    }
}

// =============================================================================
// TERM
// =============================================================================

/// A semester: a non-empty, ordered list of subjects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    subjects: Vec<SubjectScore>,
}

impl Term {
    /// Create a term. Returns `None` if `subjects` is empty.
    #[must_use]
    pub fn new(subjects: Vec<SubjectScore>) -> Option<Self> {
        if subjects.is_empty() {
            None
        } else {
            Some(Self { subjects })
        }
    }

    /// The subjects in input order.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectScore] {
        &self.subjects
    }

    /// Number of subjects (at least one).
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

// =============================================================================
// ACADEMIC RECORD
// =============================================================================

/// A full submission: a non-empty, ordered list of semesters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcademicRecord {
    #[serde(rename = "semesters")]
    terms: Vec<Term>,
}

impl AcademicRecord {
    /// Create a record. Returns `None` if `terms` is empty.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Option<Self> {
        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    /// The semesters in input order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of semesters (at least one).
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Input validation for timeline reconstruction and graph charts.
//!
//! Checks inputs up front so that callers never observe a partially built
//! timeline. Detects:
//! - Job indices not covered by the job set
//! - Indices covered by only one of processing times / release dates
//! - Negative or non-finite times
//! - Non-square or non-finite weight matrices
//! - Path edges referencing nodes outside the matrix
//!
//! Every problem is collected before returning, so one call reports the
//! whole set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::JobSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A sequence entry references a job with no data at all.
    JobIndexOutOfRange,
    /// A sequence entry references a job with no processing time.
    MissingProcessingTime,
    /// A sequence entry references a job with no release date.
    MissingReleaseDate,
    /// A processing time or release date is below zero.
    NegativeValue,
    /// A value is NaN or infinite.
    NonFiniteValue,
    /// A weight matrix row has the wrong length.
    NonSquareMatrix,
    /// A path edge references a node outside the matrix.
    EdgeOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a job sequence against a job set.
///
/// Checks:
/// 1. Every processing time and release date is finite
/// 2. Every processing time and release date is non-negative
/// 3. Every sequence entry has both a processing time and a release date
///
/// Repeated job indices are accepted.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sequence(sequence: &[usize], jobs: &JobSet) -> ValidationResult {
    let mut errors = Vec::new();

    check_times("processing time", &jobs.processing_times, &mut errors);
    check_times("release date", &jobs.release_dates, &mut errors);

    let has_p = jobs.processing_times.len();
    let has_r = jobs.release_dates.len();
    for (position, &job) in sequence.iter().enumerate() {
        match (job < has_p, job < has_r) {
            (true, true) => {}
            (false, false) => errors.push(ValidationError::new(
                ValidationErrorKind::JobIndexOutOfRange,
                format!(
                    "Position {position} references job {job}, but only {} job(s) are known",
                    jobs.job_count()
                ),
            )),
            (false, true) => errors.push(ValidationError::new(
                ValidationErrorKind::MissingProcessingTime,
                format!("Job {job} at position {position} has no processing time"),
            )),
            (true, false) => errors.push(ValidationError::new(
                ValidationErrorKind::MissingReleaseDate,
                format!("Job {job} at position {position} has no release date"),
            )),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_times(what: &str, values: &[f64], errors: &mut Vec<ValidationError>) {
    for (job, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteValue,
                format!("Job {job} has non-finite {what}: {value}"),
            ));
        } else if value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeValue,
                format!("Job {job} has negative {what}: {value}"),
            ));
        }
    }
}

/// Validates the time at which the machine first becomes available.
pub fn validate_origin(origin: f64) -> ValidationResult {
    if !origin.is_finite() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("Machine origin is not finite: {origin}"),
        )]);
    }
    if origin < 0.0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NegativeValue,
            format!("Machine origin is negative: {origin}"),
        )]);
    }
    Ok(())
}

/// Validates a weight matrix.
///
/// Checks:
/// 1. Every row has exactly `n` entries, where `n` is the row count
/// 2. Every weight is finite
pub fn validate_graph(rows: &[Vec<f64>]) -> ValidationResult {
    let mut errors = Vec::new();
    let n = rows.len();

    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonSquareMatrix,
                format!("Row {i} has {} entries, expected {n}", row.len()),
            ));
        }
        for (j, &w) in row.iter().enumerate() {
            if !w.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteValue,
                    format!("Weight ({i}, {j}) is not finite: {w}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every path edge references a node in `0..node_count`.
pub fn validate_path(node_count: usize, path: &[(usize, usize)]) -> ValidationResult {
    let errors: Vec<ValidationError> = path
        .iter()
        .filter(|&&(i, j)| i >= node_count || j >= node_count)
        .map(|&(i, j)| {
            ValidationError::new(
                ValidationErrorKind::EdgeOutOfRange,
                format!("Path edge ({i}, {j}) references a node outside 0..{node_count}"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

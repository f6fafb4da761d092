//! Release-aware timeline reconstruction for a fixed job order.
//!
//! # Algorithm
//!
//! 1. `current = origin` (0 by default).
//! 2. For each position p with job j:
//!    `start = max(current, r_j)`, `idle = start - current`,
//!    `finish = start + p_j`, then `current = finish`.
//! 3. The final `current` is the makespan.
//!
//! Scheduling is non-preemptive and the machine processes jobs in the
//! given order, so each start depends only on the previous finish and the
//! job's own release date. No lookahead is needed.
//!
//! # Complexity
//! O(n) time, O(n) space for the output.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3.2: single machine with release dates

use tracing::{debug, trace, warn};

use crate::error::{Result, ScheduleError};
use crate::models::{JobSet, Timeline, TimingRecord};
use crate::validation::{validate_origin, validate_sequence};

/// Reconstructs a timeline with the machine available from t=0.
///
/// # Example
///
/// ```
/// use u_gantt::models::JobSet;
/// use u_gantt::scheduler::reconstruct;
///
/// let jobs = JobSet::new(vec![2.0, 2.0], vec![0.0, 5.0]);
/// let timeline = reconstruct(&[0, 1], &jobs).unwrap();
///
/// assert_eq!(timeline.records[1].start, 5.0);
/// assert_eq!(timeline.records[1].idle, 3.0);
/// assert_eq!(timeline.makespan, 7.0);
/// ```
pub fn reconstruct(sequence: &[usize], jobs: &JobSet) -> Result<Timeline> {
    TimelineReconstructor::new().reconstruct(sequence, jobs)
}

/// Builds timelines from job sequences.
///
/// Stateless apart from its configuration, so one instance can be shared
/// across threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct TimelineReconstructor {
    origin: f64,
}

impl TimelineReconstructor {
    /// Creates a reconstructor with the machine available at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time at which the machine first becomes available.
    ///
    /// Idle time of the first position is measured from this origin.
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Machine availability origin.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Reconstructs the timeline of `sequence`.
    ///
    /// # Errors
    /// `ScheduleError::InvalidInput` if any index is not covered by `jobs`,
    /// if any time is negative or non-finite, or if the origin is. Nothing
    /// is computed when validation fails.
    pub fn reconstruct(&self, sequence: &[usize], jobs: &JobSet) -> Result<Timeline> {
        let mut problems = Vec::new();
        if let Err(errors) = validate_origin(self.origin) {
            problems.extend(errors);
        }
        if let Err(errors) = validate_sequence(sequence, jobs) {
            problems.extend(errors);
        }
        if !problems.is_empty() {
            warn!(
                jobs = jobs.job_count(),
                sequence_len = sequence.len(),
                problems = problems.len(),
                "rejecting timeline input"
            );
            return Err(ScheduleError::InvalidInput(problems));
        }

        let mut current = self.origin;
        let mut records = Vec::with_capacity(sequence.len());

        for (position, &job) in sequence.iter().enumerate() {
            let duration = jobs.processing_times[job];
            let release = jobs.release_dates[job];

            let start = current.max(release);
            let idle = start - current;
            let finish = start + duration;

            trace!(position, job, start, finish, idle, "timing record");
            records.push(TimingRecord {
                position,
                job,
                start,
                finish,
                duration,
                release,
                idle,
            });

            current = finish;
        }

        debug!(
            jobs = records.len(),
            makespan = current,
            "reconstructed timeline"
        );

        Ok(Timeline {
            records,
            makespan: current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-10,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_back_to_back_jobs() {
        let jobs = JobSet::new(vec![3.0, 2.0], vec![0.0, 0.0]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();

        assert_eq!(t.records[0].position, 0);
        assert_eq!(t.records[0].job, 0);
        assert_close(t.records[0].start, 0.0);
        assert_close(t.records[0].finish, 3.0);
        assert_close(t.records[0].idle, 0.0);

        assert_eq!(t.records[1].position, 1);
        assert_eq!(t.records[1].job, 1);
        assert_close(t.records[1].start, 3.0);
        assert_close(t.records[1].finish, 5.0);
        assert_close(t.records[1].idle, 0.0);
        assert_close(t.makespan, 5.0);
    }

    #[test]
    fn test_release_forces_idle() {
        let jobs = JobSet::new(vec![2.0, 2.0], vec![0.0, 5.0]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();

        assert_close(t.records[0].start, 0.0);
        assert_close(t.records[0].finish, 2.0);
        // Machine free at 2, job 1 released at 5
        assert_close(t.records[1].start, 5.0);
        assert_close(t.records[1].idle, 3.0);
        assert_close(t.records[1].finish, 7.0);
        assert_close(t.makespan, 7.0);
    }

    #[test]
    fn test_release_already_passed() {
        let jobs = JobSet::new(vec![5.0, 1.0], vec![0.0, 2.0]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();

        // Machine busy until 5, past the release at 2
        assert_close(t.records[1].start, 5.0);
        assert_close(t.records[1].idle, 0.0);
        assert_close(t.records[1].wait(), 3.0);
    }

    #[test]
    fn test_first_job_waits_for_release() {
        let jobs = JobSet::new(vec![1.0], vec![4.0]);
        let t = reconstruct(&[0], &jobs).unwrap();
        assert_close(t.records[0].start, 4.0);
        assert_close(t.records[0].idle, 4.0);
        assert_close(t.makespan, 5.0);
    }

    #[test]
    fn test_release_equal_to_machine_free() {
        let jobs = JobSet::new(vec![2.0, 1.0], vec![0.0, 2.0]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();
        assert_close(t.records[1].start, 2.0);
        assert_close(t.records[1].idle, 0.0);
    }

    #[test]
    fn test_order_changes_timeline() {
        let jobs = JobSet::new(vec![2.0, 2.0], vec![0.0, 5.0]);
        let t = reconstruct(&[1, 0], &jobs).unwrap();
        assert_eq!(t.job_order(), vec![1, 0]);
        assert_close(t.records[0].start, 5.0);
        assert_close(t.records[1].start, 7.0);
        assert_close(t.makespan, 9.0);
    }

    #[test]
    fn test_record_carries_inputs() {
        let jobs = JobSet::new(vec![2.5], vec![1.5]);
        let t = reconstruct(&[0], &jobs).unwrap();
        assert_close(t.records[0].duration, 2.5);
        assert_close(t.records[0].release, 1.5);
    }

    #[test]
    fn test_repeated_job() {
        let jobs = JobSet::new(vec![1.0], vec![0.0]);
        let t = reconstruct(&[0, 0, 0], &jobs).unwrap();
        assert_eq!(t.len(), 3);
        assert_close(t.makespan, 3.0);
        assert_eq!(t.records_for_job(0).len(), 3);
    }

    #[test]
    fn test_empty_sequence() {
        let t = reconstruct(&[], &JobSet::default()).unwrap();
        assert!(t.is_empty());
        assert_close(t.makespan, 0.0);
    }

    #[test]
    fn test_zero_duration_job() {
        let jobs = JobSet::new(vec![0.0, 1.0], vec![3.0, 0.0]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();
        assert_close(t.records[0].start, 3.0);
        assert_close(t.records[0].finish, 3.0);
        assert_close(t.records[1].start, 3.0);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let jobs = JobSet::new(vec![3.0, 2.0], vec![0.0, 0.0]);
        let err = reconstruct(&[0, 3], &jobs).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::JobIndexOutOfRange
        );
    }

    #[test]
    fn test_negative_time_rejected() {
        let jobs = JobSet::new(vec![3.0, -2.0], vec![0.0, 0.0]);
        let err = reconstruct(&[0, 1], &jobs).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NegativeValue
        );
    }

    #[test]
    fn test_deterministic() {
        let jobs = JobSet::new(vec![3.0, 1.0, 4.0, 1.5], vec![2.0, 0.0, 9.0, 1.0]);
        let seq = [1, 3, 0, 2];
        let a = reconstruct(&seq, &jobs).unwrap();
        let b = reconstruct(&seq, &jobs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_origin() {
        let jobs = JobSet::new(vec![2.0, 2.0], vec![0.0, 5.0]);
        let t = TimelineReconstructor::new()
            .with_origin(10.0)
            .reconstruct(&[0, 1], &jobs)
            .unwrap();
        assert_close(t.records[0].start, 10.0);
        assert_close(t.records[0].idle, 0.0);
        assert_close(t.records[1].start, 12.0);
        assert_close(t.makespan, 14.0);
    }

    #[test]
    fn test_origin_before_first_release() {
        let jobs = JobSet::new(vec![1.0], vec![4.0]);
        let t = TimelineReconstructor::new()
            .with_origin(1.0)
            .reconstruct(&[0], &jobs)
            .unwrap();
        assert_close(t.records[0].idle, 3.0);
    }

    #[test]
    fn test_negative_origin_rejected() {
        let jobs = JobSet::new(vec![1.0], vec![0.0]);
        let err = TimelineReconstructor::new()
            .with_origin(-1.0)
            .reconstruct(&[0], &jobs)
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NegativeValue
        );
    }

    #[test]
    fn test_error_message_lists_problems() {
        let jobs = JobSet::new(vec![1.0], vec![0.0]);
        let err = reconstruct(&[4], &jobs).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input (1 problem(s))"));
        assert!(msg.contains("job 4"));
    }
}

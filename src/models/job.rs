//! Job data for single-machine sequencing.
//!
//! Jobs are identified by a zero-based index. Each index maps to a fixed
//! processing time and a fixed release date.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

use serde::{Deserialize, Serialize};

/// Processing times and release dates indexed by job.
///
/// # Time Representation
/// Times are real-valued and unit-free, relative to t=0. The consumer
/// decides what a unit means (minutes, shifts, ticks).
///
/// Construction does not validate. Values are checked when a timeline is
/// reconstructed, so a malformed set is reported as a whole rather than
/// failing partway through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSet {
    /// Processing time per job index.
    pub processing_times: Vec<f64>,
    /// Release date (earliest start) per job index.
    pub release_dates: Vec<f64>,
}

impl JobSet {
    /// Creates a job set from parallel vectors.
    pub fn new(processing_times: Vec<f64>, release_dates: Vec<f64>) -> Self {
        Self {
            processing_times,
            release_dates,
        }
    }

    /// Creates a job set from `(processing_time, release_date)` pairs.
    pub fn from_jobs(jobs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (processing_times, release_dates) = jobs.into_iter().unzip();
        Self {
            processing_times,
            release_dates,
        }
    }

    /// Creates a job set where every job is released at t=0.
    pub fn released_at_zero(processing_times: Vec<f64>) -> Self {
        let release_dates = vec![0.0; processing_times.len()];
        Self::new(processing_times, release_dates)
    }

    /// Appends a job and returns its index.
    pub fn push(&mut self, processing_time: f64, release_date: f64) -> usize {
        self.processing_times.push(processing_time);
        self.release_dates.push(release_date);
        self.processing_times.len() - 1
    }

    /// Number of job indices covered by both vectors.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.processing_times.len().min(self.release_dates.len())
    }

    /// Whether `job` has both a processing time and a release date.
    #[inline]
    pub fn contains(&self, job: usize) -> bool {
        job < self.job_count()
    }

    /// Processing time of `job`, if present.
    pub fn processing_time(&self, job: usize) -> Option<f64> {
        self.processing_times.get(job).copied()
    }

    /// Release date of `job`, if present.
    pub fn release_date(&self, job: usize) -> Option<f64> {
        self.release_dates.get(job).copied()
    }

    /// Sum of all processing times.
    pub fn total_processing_time(&self) -> f64 {
        self.processing_times.iter().sum()
    }
}

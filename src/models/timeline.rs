//! Reconstructed single-machine timeline.
//!
//! A timeline is the ordered list of timing records derived from a job
//! sequence. Records never overlap, no job starts before its release date,
//! and idle time is the gap left while the machine waits for a release.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// Timing of one job at one sequence position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Zero-based position in the sequence.
    pub position: usize,
    /// Job index.
    pub job: usize,
    /// Start time: `max(previous finish, release)`.
    pub start: f64,
    /// Finish time: `start + duration`.
    pub finish: f64,
    /// Processing time of the job.
    pub duration: f64,
    /// Release date of the job.
    pub release: f64,
    /// Machine idle time immediately before `start`.
    pub idle: f64,
}

impl TimingRecord {
    /// Time the job waited after release before starting.
    #[inline]
    pub fn wait(&self) -> f64 {
        self.start - self.release
    }

    /// Flow time: release to completion.
    #[inline]
    pub fn flow_time(&self) -> f64 {
        self.finish - self.release
    }

    /// Time at which the machine became free for this job.
    #[inline]
    pub fn machine_ready(&self) -> f64 {
        self.start - self.idle
    }
}

/// Ordered timing records plus the overall makespan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// One record per sequence position, in order.
    pub records: Vec<TimingRecord>,
    /// Finish time of the last record (0 for an empty sequence).
    pub makespan: f64,
}

impl Timeline {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a sequence position.
    pub fn record_at(&self, position: usize) -> Option<&TimingRecord> {
        self.records.get(position)
    }

    /// All records for a job (more than one if the sequence repeats it).
    pub fn records_for_job(&self, job: usize) -> Vec<&TimingRecord> {
        self.records.iter().filter(|r| r.job == job).collect()
    }

    /// Job indices in execution order.
    pub fn job_order(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.job).collect()
    }

    /// Total completion time ∑C_j.
    pub fn total_completion_time(&self) -> f64 {
        self.records.iter().map(|r| r.finish).sum()
    }

    /// Total machine idle time.
    pub fn total_idle(&self) -> f64 {
        self.records.iter().map(|r| r.idle).sum()
    }

    /// Total processing time on the machine.
    pub fn busy_time(&self) -> f64 {
        self.records.iter().map(|r| r.duration).sum()
    }

    /// Busy time over makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        if self.makespan <= 0.0 {
            return None;
        }
        Some(self.busy_time() / self.makespan)
    }
}

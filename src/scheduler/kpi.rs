//! Timeline quality metrics (KPIs).
//!
//! Computes standard single-machine performance indicators from a
//! reconstructed timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Finish of the last job |
//! | Total Completion (∑C_j) | Sum of finish times |
//! | Avg Completion | ∑C_j / n |
//! | Total Idle | Machine time spent waiting for releases |
//! | Utilization | Busy time / makespan |
//! | Avg Flow Time | Mean of finish − release |
//! | Max Wait | Largest start − release |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Timeline;

/// Timeline performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineKpi {
    /// Finish time of the last job.
    pub makespan: f64,
    /// ∑C_j, the objective of 1|r_j|∑C_j.
    pub total_completion_time: f64,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// Total machine idle time.
    pub total_idle: f64,
    /// Busy time over makespan (0.0..=1.0).
    pub utilization: f64,
    /// Mean of (finish − release).
    pub avg_flow_time: f64,
    /// Largest (start − release) of any job.
    pub max_wait: f64,
}

impl TimelineKpi {
    /// Computes KPIs from a timeline.
    ///
    /// An empty timeline yields all zeros.
    pub fn calculate(timeline: &Timeline) -> Self {
        let n = timeline.len();
        let total_completion_time = timeline.total_completion_time();
        let mut total_flow_time = 0.0;
        let mut max_wait: f64 = 0.0;

        for record in &timeline.records {
            total_flow_time += record.flow_time();
            max_wait = max_wait.max(record.wait());
        }

        let (avg_completion_time, avg_flow_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            (total_completion_time / n as f64, total_flow_time / n as f64)
        };

        Self {
            makespan: timeline.makespan,
            total_completion_time,
            avg_completion_time,
            total_idle: timeline.total_idle(),
            utilization: timeline.utilization().unwrap_or(0.0),
            avg_flow_time,
            max_wait,
        }
    }

    /// Whether the timeline meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_idle: f64, min_utilization: f64) -> bool {
        self.total_idle <= max_idle && self.utilization >= min_utilization
    }
}

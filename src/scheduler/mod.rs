//! Timeline reconstruction and KPI evaluation.
//!
//! Turns a fixed job order into concrete start and finish times on a
//! single machine, and measures the result.
//!
//! # Algorithm
//!
//! `TimelineReconstructor` makes one left-to-right pass: every job starts
//! at the later of machine availability and its release date. There is no
//! search. The job order is an input.
//!
//! # KPI
//!
//! `TimelineKpi` computes makespan, total completion time (∑C_j), idle
//! time, utilization, flow time, and waiting time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod reconstruct;

pub use kpi::TimelineKpi;
pub use reconstruct::{reconstruct, TimelineReconstructor};

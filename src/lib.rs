//! Single-machine schedule timelines for the U-Engine ecosystem.
//!
//! Reconstructs when each job of a fixed sequence runs on one machine
//! with release dates (1|r_j|∑C_j), measures the result, and describes it
//! as a Gantt chart. Also charts weighted graphs with a highlighted path.
//! No sequence is optimized here: the job order is always an input.
//!
//! # Modules
//!
//! - **`models`**: `JobSet`, `TimingRecord`, `Timeline`
//! - **`validation`**: Input checks (index coverage, negative or non-finite
//!   times, matrix shape, path edges)
//! - **`scheduler`**: `reconstruct`, `TimelineReconstructor`, `TimelineKpi`
//! - **`render`**: Gantt and graph chart models, spring layout, SVG sinks
//! - **`seed`**: Process-wide random generator (`set_seed`)
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use u_gantt::models::JobSet;
//! use u_gantt::render::{plot_gantt, GanttConfig, SvgGanttSink};
//! use u_gantt::scheduler::{reconstruct, TimelineKpi};
//!
//! let jobs = JobSet::new(vec![3.0, 2.0, 1.0], vec![0.0, 6.0, 1.0]);
//! let timeline = reconstruct(&[0, 2, 1], &jobs).unwrap();
//! assert_eq!(timeline.makespan, 8.0);
//!
//! let kpi = TimelineKpi::calculate(&timeline);
//! assert_eq!(kpi.total_completion_time, 3.0 + 4.0 + 8.0);
//!
//! let svg = plot_gantt(&[0, 2, 1], &jobs, &GanttConfig::default(), &mut SvgGanttSink).unwrap();
//! assert!(svg.contains("Job 2"));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod seed;
pub mod validation;

pub use error::{Result, ScheduleError};

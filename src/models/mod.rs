//! Single-machine scheduling models.
//!
//! Provides the inputs (`JobSet`) and the derived timeline
//! (`TimingRecord`, `Timeline`) for sequencing with release dates.
//!
//! # Notation
//!
//! | u-gantt | Three-field notation |
//! |---------|----------------------|
//! | `JobSet::processing_times[j]` | p_j |
//! | `JobSet::release_dates[j]` | r_j |
//! | `TimingRecord::finish` | C_j |
//! | `Timeline::makespan` | C_max |

mod job;
mod timeline;

pub use job::JobSet;
pub use timeline::{Timeline, TimingRecord};

//! Chart models and sinks for timelines and weighted graphs.
//!
//! Charts are plain data ([`GanttChart`], [`GraphChart`]). Drawing is
//! delegated to a sink ([`GanttSink`], [`GraphSink`]), so any backend can
//! be plugged in. The bundled SVG sinks need no external renderer.
//!
//! # Entry points
//!
//! | Function | Pipeline |
//! |----------|----------|
//! | [`plot_gantt`] | sequence → timeline → Gantt chart → sink |
//! | [`plot_graph`] | weight matrix → layout → graph chart → sink |
//! | [`plot_shortest_path`] | as `plot_graph`, with a highlighted path |

mod gantt;
mod graph;
mod layout;
mod svg;

pub use gantt::{
    ChartText, GanttBar, GanttChart, GanttConfig, GanttSink, LegendEntry, ReleaseMarker,
    SvgGanttSink,
};
pub use graph::{
    Edge, EdgeLabel, EdgeMark, GraphChart, GraphConfig, GraphSink, NodeMark, SvgGraphSink,
    WeightMatrix,
};
pub use layout::{spring_layout, LayoutConfig, Point};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::JobSet;
use crate::scheduler::reconstruct;

/// All chart settings, loadable from JSON.
///
/// Missing fields take their defaults.
///
/// # Example
///
/// ```
/// use u_gantt::render::RenderConfig;
///
/// let config = RenderConfig::from_json_str(r#"{ "gantt": { "x_padding": 1.2 } }"#).unwrap();
/// assert_eq!(config.gantt.x_padding, 1.2);
/// assert_eq!(config.graph.graph_title, "Graph");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub gantt: GanttConfig,
    pub graph: GraphConfig,
}

impl RenderConfig {
    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reconstructs the timeline of `sequence` and renders it as a Gantt chart.
///
/// # Errors
/// `ScheduleError::InvalidInput` for malformed inputs (nothing is drawn),
/// or whatever the sink reports.
pub fn plot_gantt<S: GanttSink>(
    sequence: &[usize],
    jobs: &JobSet,
    config: &GanttConfig,
    sink: &mut S,
) -> Result<S::Output> {
    let timeline = reconstruct(sequence, jobs)?;
    let chart = GanttChart::from_timeline(&timeline, config);
    debug!(
        rows = chart.row_count(),
        idle_bars = chart.idle_bars.len(),
        "rendering gantt chart"
    );
    sink.render_gantt(&chart)
}

/// Renders the full weighted graph.
pub fn plot_graph<S: GraphSink>(
    matrix: &WeightMatrix,
    config: &GraphConfig,
    sink: &mut S,
) -> Result<S::Output> {
    let chart = GraphChart::new(matrix, None, config)?;
    debug!(nodes = chart.nodes.len(), edges = chart.edges.len(), "rendering graph");
    sink.render_graph(&chart)
}

/// Renders the weighted graph with `path` highlighted and labelled.
///
/// # Errors
/// `ScheduleError::InvalidInput` if a path edge references a node outside
/// the matrix.
pub fn plot_shortest_path<S: GraphSink>(
    matrix: &WeightMatrix,
    path: &[(usize, usize)],
    config: &GraphConfig,
    sink: &mut S,
) -> Result<S::Output> {
    let chart = GraphChart::new(matrix, Some(path), config)?;
    debug!(
        nodes = chart.nodes.len(),
        path_edges = chart.path_edges.len(),
        "rendering shortest path"
    );
    sink.render_graph(&chart)
}

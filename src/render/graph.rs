//! Weighted graph chart with an optional highlighted path.
//!
//! The path is supplied by the caller, typically from a shortest-path
//! solver. This module only checks that it references valid nodes and
//! lays it out over the full graph.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, ScheduleError};
use crate::validation::{validate_graph, validate_path};

use super::layout::{spring_layout, LayoutConfig, Point};
use super::svg::{SvgWriter, TextStyle};

/// Square matrix of pairwise weights (distances), stored row-major.
///
/// Serializes as a list of rows. Deserialization runs the same checks as
/// [`WeightMatrix::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct WeightMatrix {
    n: usize,
    weights: Vec<f64>,
}

/// An undirected edge `u < v` with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl WeightMatrix {
    /// Creates a matrix from rows.
    ///
    /// # Errors
    /// `ScheduleError::InvalidInput` if the rows are not square or any
    /// weight is NaN or infinite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Err(errors) = validate_graph(&rows) {
            warn!(problems = errors.len(), "rejecting weight matrix");
            return Err(ScheduleError::InvalidInput(errors));
        }
        let n = rows.len();
        Ok(Self {
            n,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Weight of `(i, j)`, or `None` if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.n && j < self.n).then(|| self.at(i, j))
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Whether `w[i][j] == w[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.at(i, j) == self.at(j, i)))
    }

    /// Undirected edges: every pair `i < j` with a non-zero weight in
    /// either direction.
    ///
    /// Entries are read row-major and a later entry overwrites an earlier
    /// one, so `w[j][i]` wins when non-zero, else `w[i][j]`. This matches
    /// networkx `from_numpy_array`. Unlike networkx, non-zero diagonal
    /// entries do not produce self-loops.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                let backward = self.at(v, u);
                let weight = if backward != 0.0 { backward } else { self.at(u, v) };
                if weight != 0.0 {
                    edges.push(Edge { u, v, weight });
                }
            }
        }
        edges
    }

    /// Symmetric adjacency matrix (row-major) built from [`Self::edges`].
    pub(crate) fn adjacency(&self) -> Vec<f64> {
        let mut a = vec![0.0; self.n * self.n];
        for e in self.edges() {
            a[e.u * self.n + e.v] = e.weight;
            a[e.v * self.n + e.u] = e.weight;
        }
        a
    }
}

impl TryFrom<Vec<Vec<f64>>> for WeightMatrix {
    type Error = ScheduleError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<WeightMatrix> for Vec<Vec<f64>> {
    fn from(matrix: WeightMatrix) -> Self {
        if matrix.n == 0 {
            return Vec::new();
        }
        matrix
            .weights
            .chunks(matrix.n)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

/// Styling, titles, and layout for graph charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Title without a highlighted path.
    pub graph_title: String,
    /// Title with a highlighted path.
    pub path_title: String,
    /// Figure size (inches).
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub node_color: String,
    /// Node radius (pixels).
    pub node_radius: f64,
    pub edge_color: String,
    pub edge_width: f64,
    pub path_color: String,
    pub path_width: f64,
    pub layout: LayoutConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            graph_title: "Graph".into(),
            path_title: "Shortest Path".into(),
            width_in: 12.0,
            height_in: 8.0,
            dpi: 100.0,
            node_color: "#1f78b4".into(),
            node_radius: 12.0,
            edge_color: "gray".into(),
            edge_width: 1.0,
            path_color: "red".into(),
            path_width: 2.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Sets the layout parameters.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the figure size (inches).
    pub fn with_size(mut self, width_in: f64, height_in: f64) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMark {
    pub index: usize,
    pub label: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMark {
    pub u: usize,
    pub v: usize,
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    pub u: usize,
    pub v: usize,
    pub text: String,
    pub position: Point,
}

/// Backend-agnostic graph chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphChart {
    pub title: String,
    pub nodes: Vec<NodeMark>,
    /// Every graph edge, drawn first.
    pub edges: Vec<EdgeMark>,
    /// Highlighted path edges, drawn over `edges`.
    pub path_edges: Vec<EdgeMark>,
    /// Weight labels for path edges.
    pub edge_labels: Vec<EdgeLabel>,
    pub size_in: (f64, f64),
    pub dpi: f64,
    pub node_color: String,
    pub node_radius: f64,
}

impl GraphChart {
    /// Builds a chart of `matrix`, highlighting `path` when given.
    ///
    /// Path edges need not exist in the graph; they are drawn between the
    /// laid-out node positions either way. Labels show `w[i][j]` with two
    /// decimals.
    ///
    /// # Errors
    /// `ScheduleError::InvalidInput` if a path edge references a node
    /// outside the matrix.
    pub fn new(
        matrix: &WeightMatrix,
        path: Option<&[(usize, usize)]>,
        config: &GraphConfig,
    ) -> Result<Self> {
        if let Some(path) = path {
            if let Err(errors) = validate_path(matrix.node_count(), path) {
                warn!(problems = errors.len(), "rejecting highlighted path");
                return Err(ScheduleError::InvalidInput(errors));
            }
        }

        let positions = spring_layout(matrix, &config.layout);

        let nodes = positions
            .iter()
            .enumerate()
            .map(|(index, &position)| NodeMark {
                index,
                label: index.to_string(),
                position,
            })
            .collect();

        let edges = matrix
            .edges()
            .into_iter()
            .map(|e| EdgeMark {
                u: e.u,
                v: e.v,
                color: config.edge_color.clone(),
                width: config.edge_width,
            })
            .collect();

        let title = match path {
            Some(_) => config.path_title.clone(),
            None => config.graph_title.clone(),
        };
        let path = path.unwrap_or(&[]);
        let path_edges = path
            .iter()
            .map(|&(u, v)| EdgeMark {
                u,
                v,
                color: config.path_color.clone(),
                width: config.path_width,
            })
            .collect();
        let edge_labels = path
            .iter()
            .map(|&(u, v)| EdgeLabel {
                u,
                v,
                text: format!("{:.2}", matrix.at(u, v)),
                position: positions[u].midpoint(positions[v]),
            })
            .collect();

        Ok(Self {
            title,
            nodes,
            edges,
            path_edges,
            edge_labels,
            size_in: (config.width_in, config.height_in),
            dpi: config.dpi,
            node_color: config.node_color.clone(),
            node_radius: config.node_radius,
        })
    }

    fn position(&self, node: usize) -> Point {
        self.nodes[node].position
    }
}

/// Consumes a graph chart and produces an artifact.
pub trait GraphSink {
    type Output;

    fn render_graph(&mut self, chart: &GraphChart) -> Result<Self::Output>;
}

/// Renders graph charts as standalone SVG documents. Axes are hidden.
#[derive(Debug, Clone, Default)]
pub struct SvgGraphSink;

const MARGIN: f64 = 40.0;
const TITLE_SPACE: f64 = 30.0;

impl GraphSink for SvgGraphSink {
    type Output = String;

    fn render_graph(&mut self, chart: &GraphChart) -> Result<String> {
        let width = chart.size_in.0 * chart.dpi;
        let height = chart.size_in.1 * chart.dpi;
        let cx = width / 2.0;
        let cy = (height + TITLE_SPACE) / 2.0;
        let rx = (width / 2.0 - MARGIN).max(1.0);
        let ry = ((height - TITLE_SPACE) / 2.0 - MARGIN).max(1.0);
        // Layout coordinates lie in [-1, 1]; y grows upward.
        let to_px = |p: Point| (cx + p.x * rx, cy - p.y * ry);

        let mut svg = SvgWriter::new(width, height)?;
        svg.text(
            cx,
            TITLE_SPACE / 2.0 + 5.0,
            &chart.title,
            TextStyle {
                size: 14.0,
                bold: true,
                ..TextStyle::default()
            },
        )?;

        for edge in chart.edges.iter().chain(&chart.path_edges) {
            svg.line(
                to_px(chart.position(edge.u)),
                to_px(chart.position(edge.v)),
                &edge.color,
                edge.width,
                false,
            )?;
        }

        for node in &chart.nodes {
            let (x, y) = to_px(node.position);
            svg.circle(x, y, chart.node_radius, &chart.node_color)?;
            svg.text(x, y, &node.label, TextStyle::default())?;
        }

        for label in &chart.edge_labels {
            let (x, y) = to_px(label.position);
            svg.rect(x - 16.0, y - 7.0, 32.0, 14.0, "white", "white", 0.0, 0.9)?;
            svg.text(
                x,
                y,
                &label.text,
                TextStyle {
                    size: 9.0,
                    ..TextStyle::default()
                },
            )?;
        }

        Ok(svg.finish()?)
    }
}

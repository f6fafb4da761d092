//! Gantt chart model for single-machine timelines.
//!
//! [`GanttChart`] is a backend-agnostic description of the chart: bars,
//! markers, labels, axis range, and legend. A [`GanttSink`] turns it into
//! an artifact. [`SvgGanttSink`] is the bundled sink.
//!
//! # Layout
//!
//! One row per sequence position, first position at the top. Each row has
//! an optional idle bar ending at the job's start, the job bar itself, a
//! dashed release marker, and a release label when the job waited past
//! its release.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Timeline;

use super::svg::{Anchor, SvgWriter, TextStyle};

/// Styling and sizing for Gantt charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanttConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Axis upper bound as a multiple of the makespan.
    pub x_padding: f64,
    /// Figure width (inches).
    pub width_in: f64,
    /// Minimum figure height (inches).
    pub min_height_in: f64,
    /// Height per row (inches); the figure grows past `min_height_in`.
    pub row_height_in: f64,
    /// Pixels per inch for raster-sized sinks.
    pub dpi: f64,
    pub job_color: String,
    pub idle_color: String,
    pub release_color: String,
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self {
            title: "Gantt Chart: Single Machine Schedule (1|r_j|∑C_j)".into(),
            x_label: "Time".into(),
            y_label: "Execution Order".into(),
            x_padding: 1.05,
            width_in: 14.0,
            min_height_in: 6.0,
            row_height_in: 0.5,
            dpi: 100.0,
            job_color: "skyblue".into(),
            idle_color: "lightgray".into(),
            release_color: "red".into(),
        }
    }
}

impl GanttConfig {
    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the axis padding factor.
    pub fn with_x_padding(mut self, x_padding: f64) -> Self {
        self.x_padding = x_padding;
        self
    }

    /// Sets the figure width and minimum height (inches).
    pub fn with_size(mut self, width_in: f64, min_height_in: f64) -> Self {
        self.width_in = width_in;
        self.min_height_in = min_height_in;
        self
    }

    /// Sets the pixels per inch.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }
}

/// A horizontal bar on one row, spanning `[from, to]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttBar {
    pub row: usize,
    pub from: f64,
    pub to: f64,
    /// Centered label, if any.
    pub label: Option<String>,
}

/// Dashed vertical release marker at `x`, spanning rows `[y_from, y_to]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseMarker {
    pub row: usize,
    pub x: f64,
    pub y_from: f64,
    pub y_to: f64,
}

/// Free-standing text at chart coordinates (x in time, y in rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartText {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Legend entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendEntry {
    Idle,
    Release,
}

impl LegendEntry {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Release => "Release",
        }
    }
}

/// Backend-agnostic Gantt chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `"Position {p}"` per row, top to bottom.
    pub row_labels: Vec<String>,
    pub idle_bars: Vec<GanttBar>,
    pub job_bars: Vec<GanttBar>,
    pub release_markers: Vec<ReleaseMarker>,
    pub release_labels: Vec<ChartText>,
    /// Visible time range.
    pub x_range: (f64, f64),
    pub legend: Vec<LegendEntry>,
    /// Figure size (inches).
    pub size_in: (f64, f64),
    pub dpi: f64,
    pub job_color: String,
    pub idle_color: String,
    pub release_color: String,
}

impl GanttChart {
    /// Builds a chart from a timeline.
    pub fn from_timeline(timeline: &Timeline, config: &GanttConfig) -> Self {
        let n = timeline.len();
        let mut idle_bars = Vec::new();
        let mut job_bars = Vec::with_capacity(n);
        let mut release_markers = Vec::with_capacity(n);
        let mut release_labels = Vec::new();

        for (row, record) in timeline.records.iter().enumerate() {
            if record.idle > 0.0 {
                idle_bars.push(GanttBar {
                    row,
                    from: record.start - record.idle,
                    to: record.start,
                    label: None,
                });
            }

            job_bars.push(GanttBar {
                row,
                from: record.start,
                to: record.finish,
                label: Some(format!("Job {}", record.job)),
            });

            let y = row as f64;
            release_markers.push(ReleaseMarker {
                row,
                x: record.release,
                y_from: y - 0.4,
                y_to: y + 0.4,
            });

            if record.release < record.start {
                release_labels.push(ChartText {
                    x: record.release,
                    y: y - 0.5,
                    text: format!("r={}", record.release.trunc() as i64),
                });
            }
        }

        let mut legend = Vec::new();
        if !idle_bars.is_empty() {
            legend.push(LegendEntry::Idle);
        }
        if n > 0 {
            legend.push(LegendEntry::Release);
        }

        let x_max = if timeline.makespan > 0.0 {
            timeline.makespan * config.x_padding
        } else {
            1.0
        };
        let height_in = config.min_height_in.max(n as f64 * config.row_height_in);

        Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            row_labels: (0..n).map(|p| format!("Position {p}")).collect(),
            idle_bars,
            job_bars,
            release_markers,
            release_labels,
            x_range: (0.0, x_max),
            legend,
            size_in: (config.width_in, height_in),
            dpi: config.dpi,
            job_color: config.job_color.clone(),
            idle_color: config.idle_color.clone(),
            release_color: config.release_color.clone(),
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }
}

/// Consumes a Gantt chart and produces an artifact.
pub trait GanttSink {
    type Output;

    fn render_gantt(&mut self, chart: &GanttChart) -> Result<Self::Output>;
}

/// Renders Gantt charts as standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgGanttSink;

const MARGIN_LEFT: f64 = 110.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 55.0;

impl GanttSink for SvgGanttSink {
    type Output = String;

    fn render_gantt(&mut self, chart: &GanttChart) -> Result<String> {
        let width = chart.size_in.0 * chart.dpi;
        let height = chart.size_in.1 * chart.dpi;
        let plot_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let band = plot_h / chart.row_count().max(1) as f64;

        let (x0, x1) = chart.x_range;
        let span = (x1 - x0).max(f64::EPSILON);
        let px = |x: f64| MARGIN_LEFT + (x - x0) / span * plot_w;
        // Row centers; row 0 at the top.
        let py = |y: f64| MARGIN_TOP + (y + 0.5) * band;

        let mut svg = SvgWriter::new(width, height)?;

        svg.text(
            width / 2.0,
            MARGIN_TOP / 2.0,
            &chart.title,
            TextStyle {
                size: 14.0,
                bold: true,
                ..TextStyle::default()
            },
        )?;

        // Vertical grid
        for i in 0..=10 {
            let x = x0 + span * i as f64 / 10.0;
            let gx = px(x);
            svg.line(
                (gx, MARGIN_TOP),
                (gx, MARGIN_TOP + plot_h),
                "#dddddd",
                0.5,
                false,
            )?;
            svg.text(
                gx,
                MARGIN_TOP + plot_h + 12.0,
                &format_tick(x),
                TextStyle {
                    size: 9.0,
                    ..TextStyle::default()
                },
            )?;
        }

        for bar in &chart.idle_bars {
            svg.rect(
                px(bar.from),
                py(bar.row as f64) - 0.4 * band,
                px(bar.to) - px(bar.from),
                0.8 * band,
                &chart.idle_color,
                "gray",
                0.5,
                0.5,
            )?;
        }

        for bar in &chart.job_bars {
            svg.rect(
                px(bar.from),
                py(bar.row as f64) - 0.4 * band,
                px(bar.to) - px(bar.from),
                0.8 * band,
                &chart.job_color,
                "black",
                1.5,
                1.0,
            )?;
            if let Some(label) = &bar.label {
                svg.text(
                    px((bar.from + bar.to) / 2.0),
                    py(bar.row as f64),
                    label,
                    TextStyle {
                        bold: true,
                        ..TextStyle::default()
                    },
                )?;
            }
        }

        for marker in &chart.release_markers {
            svg.line(
                (px(marker.x), py(marker.y_from)),
                (px(marker.x), py(marker.y_to)),
                &chart.release_color,
                2.0,
                true,
            )?;
        }

        for label in &chart.release_labels {
            svg.text(
                px(label.x),
                py(label.y) + 5.0,
                &label.text,
                TextStyle {
                    size: 8.0,
                    color: &chart.release_color,
                    ..TextStyle::default()
                },
            )?;
        }

        for (row, label) in chart.row_labels.iter().enumerate() {
            svg.text(
                MARGIN_LEFT - 6.0,
                py(row as f64),
                label,
                TextStyle {
                    size: 9.0,
                    anchor: Anchor::End,
                    ..TextStyle::default()
                },
            )?;
        }

        svg.text(
            MARGIN_LEFT + plot_w / 2.0,
            height - 15.0,
            &chart.x_label,
            TextStyle {
                size: 12.0,
                ..TextStyle::default()
            },
        )?;
        svg.text(
            12.0,
            MARGIN_TOP + plot_h / 2.0,
            &chart.y_label,
            TextStyle {
                size: 12.0,
                anchor: Anchor::Start,
                ..TextStyle::default()
            },
        )?;

        let legend_x = width - MARGIN_RIGHT - 90.0;
        for (i, entry) in chart.legend.iter().enumerate() {
            let y = MARGIN_TOP + 12.0 + i as f64 * 16.0;
            match entry {
                LegendEntry::Idle => svg.rect(
                    legend_x,
                    y - 5.0,
                    18.0,
                    10.0,
                    &chart.idle_color,
                    "gray",
                    0.5,
                    0.5,
                )?,
                LegendEntry::Release => svg.line(
                    (legend_x, y),
                    (legend_x + 18.0, y),
                    &chart.release_color,
                    2.0,
                    true,
                )?,
            }
            svg.text(
                legend_x + 24.0,
                y,
                entry.label(),
                TextStyle {
                    size: 9.0,
                    anchor: Anchor::Start,
                    ..TextStyle::default()
                },
            )?;
        }

        Ok(svg.finish()?)
    }
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSet;
    use crate::scheduler::reconstruct;

    fn idle_timeline() -> Timeline {
        // J0 [0,2], J1 released at 5 → idle [2,5], runs [5,7]
        let jobs = JobSet::new(vec![2.0, 2.0], vec![0.0, 5.0]);
        reconstruct(&[0, 1], &jobs).unwrap()
    }

    #[test]
    fn test_bars_follow_records() {
        let chart = GanttChart::from_timeline(&idle_timeline(), &GanttConfig::default());

        assert_eq!(chart.job_bars.len(), 2);
        assert_eq!(chart.job_bars[1].from, 5.0);
        assert_eq!(chart.job_bars[1].to, 7.0);
        assert_eq!(chart.job_bars[1].label.as_deref(), Some("Job 1"));

        assert_eq!(chart.idle_bars.len(), 1);
        assert_eq!(chart.idle_bars[0].row, 1);
        assert_eq!(chart.idle_bars[0].from, 2.0);
        assert_eq!(chart.idle_bars[0].to, 5.0);
    }

    #[test]
    fn test_release_markers_and_labels() {
        let jobs = JobSet::new(vec![5.0, 1.0], vec![0.0, 2.5]);
        let t = reconstruct(&[0, 1], &jobs).unwrap();
        let chart = GanttChart::from_timeline(&t, &GanttConfig::default());

        assert_eq!(chart.release_markers.len(), 2);
        let m = &chart.release_markers[1];
        assert_eq!(m.x, 2.5);
        assert!((m.y_from - 0.6).abs() < 1e-10);
        assert!((m.y_to - 1.4).abs() < 1e-10);

        // Only job 1 started after its release
        assert_eq!(chart.release_labels.len(), 1);
        assert_eq!(chart.release_labels[0].text, "r=2");
        assert!((chart.release_labels[0].y - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_axis_and_size() {
        let chart = GanttChart::from_timeline(&idle_timeline(), &GanttConfig::default());
        assert_eq!(chart.x_range.0, 0.0);
        assert!((chart.x_range.1 - 7.35).abs() < 1e-10);
        assert_eq!(chart.size_in, (14.0, 6.0));
        assert_eq!(chart.row_labels, vec!["Position 0", "Position 1"]);
    }

    #[test]
    fn test_tall_chart_grows() {
        let jobs = JobSet::released_at_zero(vec![1.0; 20]);
        let seq: Vec<usize> = (0..20).collect();
        let t = reconstruct(&seq, &jobs).unwrap();
        let chart = GanttChart::from_timeline(&t, &GanttConfig::default());
        assert_eq!(chart.size_in.1, 10.0);
    }

    #[test]
    fn test_legend() {
        let chart = GanttChart::from_timeline(&idle_timeline(), &GanttConfig::default());
        assert_eq!(chart.legend, vec![LegendEntry::Idle, LegendEntry::Release]);

        let jobs = JobSet::new(vec![1.0], vec![0.0]);
        let t = reconstruct(&[0], &jobs).unwrap();
        let chart = GanttChart::from_timeline(&t, &GanttConfig::default());
        assert_eq!(chart.legend, vec![LegendEntry::Release]);
    }

    #[test]
    fn test_empty_timeline() {
        let chart = GanttChart::from_timeline(&Timeline::default(), &GanttConfig::default());
        assert_eq!(chart.row_count(), 0);
        assert!(chart.legend.is_empty());
        assert_eq!(chart.x_range, (0.0, 1.0));
    }

    #[test]
    fn test_config_overrides() {
        let config = GanttConfig::default()
            .with_title("Plan")
            .with_x_padding(1.0)
            .with_size(8.0, 3.0);
        let chart = GanttChart::from_timeline(&idle_timeline(), &config);
        assert_eq!(chart.title, "Plan");
        assert_eq!(chart.x_range.1, 7.0);
        assert_eq!(chart.size_in, (8.0, 3.0));
    }

    #[test]
    fn test_svg_sink() {
        let chart = GanttChart::from_timeline(&idle_timeline(), &GanttConfig::default());
        let svg = SvgGanttSink.render_gantt(&chart).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="1400""#));
        assert!(svg.contains("Job 0"));
        assert!(svg.contains("Job 1"));
        assert!(svg.contains("Position 1"));
        assert!(!svg.contains("r=5"));
        assert!(svg.contains("1|r_j|∑C_j"));
        assert!(svg.contains(">Idle<"));
        assert!(svg.contains(">Release<"));
    }

    #[test]
    fn test_svg_sink_empty() {
        let chart = GanttChart::from_timeline(&Timeline::default(), &GanttConfig::default());
        let svg = SvgGanttSink.render_gantt(&chart).unwrap();
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(5.0), "5");
        assert_eq!(format_tick(0.735), "0.7");
    }
}

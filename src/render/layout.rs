//! Force-directed node layout.
//!
//! # Algorithm
//!
//! Fruchterman–Reingold with weighted attraction:
//! 1. Place nodes uniformly at random in `[0, 1)²`.
//! 2. Each iteration, node i moves along
//!    `Σ_j d_ij · (k² / |d_ij|² − A_ij · |d_ij| / k)`, capped at the
//!    current temperature, with `k = sqrt(1/n)` and distances floored at
//!    0.01.
//! 3. Temperature starts at 10% of the initial spread and cools linearly.
//!    The loop stops early once the mean step falls below `threshold`.
//! 4. Positions are centered on the origin and scaled so the largest
//!    coordinate magnitude equals `scale`.
//!
//! # Complexity
//! O(iterations · n²).
//!
//! # Reference
//! Fruchterman & Reingold (1991), "Graph Drawing by Force-directed Placement"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::WeightMatrix;
use crate::seed;

/// A 2-D position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Spring layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum number of iterations.
    pub iterations: usize,
    /// Early-stop threshold on the mean node step.
    pub threshold: f64,
    /// Largest coordinate magnitude after rescaling.
    pub scale: f64,
    /// Seed for a private generator. `None` draws initial positions from
    /// the process-wide generator (see [`crate::seed`]).
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            threshold: 1e-4,
            scale: 1.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    /// Uses a private generator seeded with `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the iteration limit.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Computes node positions for a weighted graph.
///
/// An empty graph yields no positions; a single node sits at the origin.
pub fn spring_layout(matrix: &WeightMatrix, config: &LayoutConfig) -> Vec<Point> {
    let n = matrix.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![Point::ORIGIN],
        _ => {}
    }

    let mut pos = match config.seed {
        Some(s) => initial_positions(n, &mut StdRng::seed_from_u64(s)),
        None => seed::with_rng(|rng| initial_positions(n, rng)),
    };
    let adjacency = matrix.adjacency();

    let k = (1.0 / n as f64).sqrt();
    let spread = |axis: usize| {
        let (lo, hi) = pos.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
        hi - lo
    };
    let mut temperature = spread(0).max(spread(1)) * 0.1;
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut performed = 0;
    for _ in 0..config.iterations {
        performed += 1;
        let mut displacement = vec![[0.0f64; 2]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let distance = (dx * dx + dy * dy).sqrt().max(0.01);
                let force =
                    k * k / (distance * distance) - adjacency[i * n + j] * distance / k;
                displacement[i][0] += dx * force;
                displacement[i][1] += dy * force;
            }
        }

        let mut moved_sq = 0.0;
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let length = (d[0] * d[0] + d[1] * d[1]).sqrt();
            let length = if length < 0.01 { 0.1 } else { length };
            let step = [d[0] * temperature / length, d[1] * temperature / length];
            p[0] += step[0];
            p[1] += step[1];
            moved_sq += step[0] * step[0] + step[1] * step[1];
        }

        temperature -= cooling;
        if moved_sq.sqrt() / (n as f64) < config.threshold {
            break;
        }
    }

    debug!(nodes = n, iterations = performed, "spring layout converged");
    rescale(&pos, config.scale)
}

fn initial_positions<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<[f64; 2]> {
    (0..n).map(|_| [rng.random(), rng.random()]).collect()
}

/// Centers positions on the origin and scales the largest coordinate
/// magnitude to `scale`.
fn rescale(pos: &[[f64; 2]], scale: f64) -> Vec<Point> {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p[1]).sum::<f64>() / n;

    let lim = pos
        .iter()
        .flat_map(|p| [(p[0] - cx).abs(), (p[1] - cy).abs()])
        .fold(0.0f64, f64::max);
    let factor = if lim > 0.0 { scale / lim } else { 1.0 };

    pos.iter()
        .map(|p| Point::new((p[0] - cx) * factor, (p[1] - cy) * factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightMatrix {
        WeightMatrix::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.5],
            vec![2.0, 1.5, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_and_single() {
        let empty = WeightMatrix::new(vec![]).unwrap();
        assert!(spring_layout(&empty, &LayoutConfig::default()).is_empty());

        let single = WeightMatrix::new(vec![vec![0.0]]).unwrap();
        assert_eq!(
            spring_layout(&single, &LayoutConfig::default()),
            vec![Point::ORIGIN]
        );
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let config = LayoutConfig::default().with_seed(42);
        let a = spring_layout(&triangle(), &config);
        let b = spring_layout(&triangle(), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = spring_layout(&triangle(), &LayoutConfig::default().with_seed(1));
        let b = spring_layout(&triangle(), &LayoutConfig::default().with_seed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_layout_is_normalized() {
        let pos = spring_layout(&triangle(), &LayoutConfig::default().with_seed(7));
        assert_eq!(pos.len(), 3);

        let cx: f64 = pos.iter().map(|p| p.x).sum::<f64>() / 3.0;
        let cy: f64 = pos.iter().map(|p| p.y).sum::<f64>() / 3.0;
        assert!(cx.abs() < 1e-9);
        assert!(cy.abs() < 1e-9);

        let lim = pos
            .iter()
            .flat_map(|p| [p.x.abs(), p.y.abs()])
            .fold(0.0f64, f64::max);
        assert!((lim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_nodes_are_separated() {
        let pos = spring_layout(&triangle(), &LayoutConfig::default().with_seed(3));
        for i in 0..3 {
            for j in (i + 1)..3 {
                let d = ((pos[i].x - pos[j].x).powi(2) + (pos[i].y - pos[j].y).powi(2)).sqrt();
                assert!(d > 1e-3, "nodes {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn test_zero_iterations_keeps_initial_shape() {
        let config = LayoutConfig::default().with_seed(5).with_iterations(0);
        let pos = spring_layout(&triangle(), &config);
        assert_eq!(pos.len(), 3);
        assert!(pos.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_rescale_custom_scale() {
        let pos = rescale(&[[0.0, 0.0], [2.0, 0.0]], 3.0);
        assert_eq!(pos[0], Point::new(-3.0, 0.0));
        assert_eq!(pos[1], Point::new(3.0, 0.0));
    }

    #[test]
    fn test_midpoint() {
        let m = Point::new(0.0, 2.0).midpoint(Point::new(2.0, 0.0));
        assert_eq!(m, Point::new(1.0, 1.0));
    }
}

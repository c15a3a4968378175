//! Force-directed vertex placement (Fruchterman–Reingold style, repulsion only).
//!
//! Every vertex pushes every other vertex away with a force of magnitude
//! `k² / d`. Per-step displacement is capped by a temperature that decays
//! geometrically, and positions are clamped to the canvas after every step.
//! Edges play no part in the simulation.

use log::{debug, trace};
use rand::Rng;

use super::types::{Point, Vec2};
use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;

pub struct ForceLayout {
    config: LayoutConfig,
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl ForceLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Compute one position per vertex inside `[0, width-1] × [0, height-1]`.
    pub fn positions<R: Rng + ?Sized>(
        &self,
        vertex_count: usize,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Vec<Point>> {
        match vertex_count {
            0 => {
                return Err(Error::InvalidGraph(
                    "graph must have at least one vertex".to_string(),
                ));
            }
            1 => {
                return Err(Error::DegenerateLayout(
                    "force layout needs at least two vertices".to_string(),
                ));
            }
            _ => {}
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidCanvas { width, height });
        }
        self.config.validate()?;

        let n = vertex_count as f64;
        let w = width as f64;
        let h = height as f64;
        let k = self
            .config
            .ideal_edge_length
            .unwrap_or_else(|| (w * h / n).sqrt());
        let k_sq = k * k;
        let mut temperature = self.config.initial_temperature.unwrap_or(w / 10.0);
        debug!(
            "force layout: {} vertices, k={:.3}, t0={:.3}, {} iterations",
            vertex_count, k, temperature, self.config.iterations
        );

        let mut pos: Vec<Vec2> = (0..vertex_count)
            .map(|_| Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
            .collect();
        let mut force = vec![Vec2::default(); vertex_count];

        for _ in 0..self.config.iterations {
            repulse(&pos, k_sq, &mut force);
            for (p, f) in pos.iter_mut().zip(&force) {
                let magnitude = f.length();
                if magnitude > 0.0 {
                    *p += *f * (magnitude.min(temperature) / magnitude);
                }
                p.x = p.x.clamp(0.0, w - 1.0);
                p.y = p.y.clamp(0.0, h - 1.0);
            }
            temperature *= self.config.cooling_factor;
        }
        trace!("force layout: final temperature {:.6}", temperature);

        let max_x = width as i64 - 1;
        let max_y = height as i64 - 1;
        Ok(pos
            .into_iter()
            .map(|p| Point::new((p.x as i64).min(max_x), (p.y as i64).min(max_y)))
            .collect())
    }

    /// Lay out `graph` in place, overwriting every vertex position.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        graph: &mut Graph,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<()> {
        let positions = self.positions(graph.vertex_count(), width, height, rng)?;
        graph.set_positions(&positions);
        Ok(())
    }
}

/// Net repulsive force on every vertex. Coincident pairs contribute nothing.
fn repulse(pos: &[Vec2], k_sq: f64, force: &mut [Vec2]) {
    for (i, f) in force.iter_mut().enumerate() {
        *f = Vec2::default();
        for (j, other) in pos.iter().enumerate() {
            if i == j {
                continue;
            }
            let delta = pos[i] - *other;
            let d_sq = delta.length_sq();
            if d_sq == 0.0 {
                continue;
            }
            *f += delta * (k_sq / d_sq);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_force.rs"]
mod tests;

//! Seeded force-directed graph layout.
//!
//! Spring embedding with pairwise repulsion, edge attraction toward a rest
//! length, center gravity, and linear cooling. Initial positions come from
//! a seeded RNG, so the same graph and config always produce identical
//! coordinates; vary [`LayoutConfig::seed`] to get a different embedding.

use crate::graph::KeywordGraph;
use crate::text::Token;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// A 2D position in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Spring-layout parameters.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// RNG seed for initial placement.
    pub seed: u64,
    /// Physics iterations.
    pub iterations: usize,
    /// Layout canvas edge length.
    pub size: f64,
    /// Pairwise repulsion strength.
    pub repulsion: f64,
    /// Edge rest length.
    pub spring_length: f64,
    /// Edge attraction strength.
    pub spring_strength: f64,
    /// Pull toward the canvas center.
    pub gravity: f64,
    /// Initial per-step movement cap; cools linearly to zero.
    pub temperature: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0x6e65_7773,
            iterations: 100,
            size: 1000.0,
            repulsion: 8000.0,
            spring_length: 30.0,
            spring_strength: 0.02,
            gravity: 0.01,
            temperature: 10.0,
        }
    }
}

/// Compute node positions for the graph.
///
/// Keyword graphs stay small, so repulsion is evaluated over all node
/// pairs each iteration. An empty graph yields an empty position map.
pub fn force_layout(graph: &KeywordGraph, config: &LayoutConfig) -> IndexMap<Token, Vec2> {
    let n = graph.node_count();
    if n == 0 {
        return IndexMap::new();
    }

    let margin = config.size * 0.1;
    let center = config.size / 2.0;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Vec2> = (0..n)
        .map(|_| Vec2 {
            x: rng.gen_range(margin..config.size - margin),
            y: rng.gen_range(margin..config.size - margin),
        })
        .collect();

    // Edges as dense index pairs, resolved once.
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .map(|(a, b)| {
            (
                graph.node_index(a).expect("edge endpoint is a node"),
                graph.node_index(b).expect("edge endpoint is a node"),
            )
        })
        .collect();

    for iter in 0..config.iterations {
        let mut forces = vec![Vec2::default(); n];
        let temperature =
            config.temperature * (1.0 - iter as f64 / config.iterations as f64);

        // Pairwise repulsion.
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let dist_sq = dx * dx + dy * dy + 1.0;
                let force = config.repulsion / dist_sq;
                forces[i].x += dx * force;
                forces[i].y += dy * force;
            }
        }

        // Attraction along edges.
        for &(u, v) in &edges {
            let dx = positions[v].x - positions[u].x;
            let dy = positions[v].y - positions[u].y;
            let dist = (dx * dx + dy * dy).sqrt().max(1.0);
            let force = (dist - config.spring_length) * config.spring_strength;
            let fx = (dx / dist) * force;
            let fy = (dy / dist) * force;
            forces[u].x += fx;
            forces[u].y += fy;
            forces[v].x -= fx;
            forces[v].y -= fy;
        }

        // Apply forces with temperature clamping, gravity, and bounds.
        for i in 0..n {
            positions[i].x += forces[i].x.clamp(-temperature, temperature);
            positions[i].y += forces[i].y.clamp(-temperature, temperature);

            positions[i].x += (center - positions[i].x) * config.gravity;
            positions[i].y += (center - positions[i].y) * config.gravity;

            positions[i].x = positions[i].x.clamp(margin * 0.2, config.size - margin * 0.2);
            positions[i].y = positions[i].y.clamp(margin * 0.2, config.size - margin * 0.2);
        }
    }

    graph
        .nodes()
        .zip(positions)
        .map(|(token, pos)| (token.clone(), pos))
        .collect()
}

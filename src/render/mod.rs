//! SVG rendering of the keyword network.
//!
//! Pixel-level chart plotting lives outside this crate; what is owned here
//! is the contract a renderer must honor: node sizes map through min-max
//! normalization into a perceptually-uniform colormap, radii scale with
//! the square root of the size, and an empty graph renders a placeholder
//! rather than failing.

use crate::graph::KeywordGraph;
use crate::layout::Vec2;
use crate::text::Token;
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Anchor points of the plasma colormap, sampled evenly over [0, 1].
const PLASMA_ANCHORS: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (84, 2, 163),
    (139, 10, 165),
    (185, 50, 137),
    (219, 92, 104),
    (244, 136, 73),
    (254, 188, 43),
    (240, 249, 33),
    (240, 249, 33),
];

/// Sample the colormap at `t` in [0, 1], linearly interpolating between
/// anchors.
fn plasma(t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (PLASMA_ANCHORS.len() - 1) as f64;
    let low = scaled.floor() as usize;
    let high = (low + 1).min(PLASMA_ANCHORS.len() - 1);
    let frac = scaled - low as f64;

    let (r0, g0, b0) = PLASMA_ANCHORS[low];
    let (r1, g1, b1) = PLASMA_ANCHORS[high];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

fn hex_color((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Rendering parameters for the network SVG.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Canvas edge length in pixels; positions are assumed to live in the
    /// same coordinate space (see `LayoutConfig::size`).
    pub canvas: f64,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            canvas: 1000.0,
            font_family: "sans-serif".to_string(),
            font_size: 12,
        }
    }
}

/// Render the network to an SVG string.
///
/// Node fill color is the node size min-max normalized against the graph
/// maximum and mapped through the plasma colormap; radius grows with the
/// square root of the size so area tracks the size linearly.
pub fn render_network_svg(
    graph: &KeywordGraph,
    sizes: &IndexMap<Token, u32>,
    positions: &IndexMap<Token, Vec2>,
    seed: &str,
    options: &SvgOptions,
) -> String {
    let canvas = options.canvas;
    let mut svg = String::with_capacity(16 * 1024);
    let _ = write!(
        svg,
        r#"<svg width="{canvas}" height="{canvas}" xmlns="http://www.w3.org/2000/svg" style="background-color: #ffffff;">"#,
    );
    svg.push('\n');
    let _ = write!(
        svg,
        r#"<text x="{x}" y="30" text-anchor="middle" font-family="{font}" font-size="20" font-weight="bold">Network graph for keyword "{seed}"</text>"#,
        x = canvas / 2.0,
        font = options.font_family,
        seed = escape_xml(seed),
    );
    svg.push('\n');

    if graph.is_empty() {
        let _ = write!(
            svg,
            r##"<text x="{x}" y="{y}" text-anchor="middle" font-family="{font}" font-size="16" fill="#64748b">No co-occurring keywords found</text>"##,
            x = canvas / 2.0,
            y = canvas / 2.0,
            font = options.font_family,
        );
        svg.push('\n');
        svg.push_str("</svg>\n");
        return svg;
    }

    let max_size = sizes.values().copied().max().unwrap_or(1).max(1) as f64;

    // Edges first so nodes draw on top.
    for (a, b) in graph.edges() {
        let (Some(pa), Some(pb)) = (positions.get(a), positions.get(b)) else {
            continue;
        };
        let _ = write!(
            svg,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#9ca3af" stroke-width="0.8" opacity="0.6"/>"##,
            pa.x, pa.y, pb.x, pb.y,
        );
        svg.push('\n');
    }

    for node in graph.nodes() {
        let (Some(pos), Some(&size)) = (positions.get(node), sizes.get(node)) else {
            continue;
        };
        let normalized = size as f64 / max_size;
        let color = hex_color(plasma(normalized));
        let radius = (size as f64).sqrt();
        let _ = write!(
            svg,
            r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="#374151" stroke-width="0.5" opacity="0.85"/>"##,
            pos.x, pos.y, radius, color,
        );
        svg.push('\n');
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="bold">{}</text>"#,
            pos.x,
            pos.y - radius - 3.0,
            options.font_family,
            options.font_size,
            escape_xml(node),
        );
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Render and write the network SVG to `path`.
pub fn write_network_svg(
    graph: &KeywordGraph,
    sizes: &IndexMap<Token, u32>,
    positions: &IndexMap<Token, Vec2>,
    seed: &str,
    options: &SvgOptions,
    path: impl AsRef<Path>,
) -> RenderResult<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let svg = render_network_svg(graph, sizes, positions, seed, options);
    fs::write(path, svg).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "network SVG written");
    Ok(path.to_path_buf())
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

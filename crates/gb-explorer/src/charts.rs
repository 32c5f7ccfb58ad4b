//! SVG chart generation for the sequence and the level hierarchy.
//!
//! Charts are plain SVG strings built from calculator output.

use std::fmt::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gb_sequence::{DimensionLabel, LevelProperties, Sequence, SequenceCalculator, TimeSpaceRelation};
use tracing::info;

const SPACE_COLOR: &str = "#87ceeb";
const TIME_COLOR: &str = "#f08080";
const LEVEL_COLOR: &str = "#add8e6";
const INK: &str = "#374151";
const MUTED: &str = "#6b7280";

fn label_color(label: DimensionLabel) -> &'static str {
    match label {
        DimensionLabel::Space => SPACE_COLOR,
        DimensionLabel::Time => TIME_COLOR,
    }
}

/// One bar per dimension, colored by its label.
pub fn sequence_svg(sequence: &Sequence) -> String {
    if sequence.is_empty() {
        return String::from("<svg></svg>");
    }

    let margin = 50;
    let bar_width = 56;
    let bar_height = 160;
    let width = 2 * margin + bar_width * sequence.len();
    let height = bar_height + 2 * margin + 60;
    let top = margin + 30;

    let mut bars = String::new();
    for (i, dimension) in sequence.iter().enumerate() {
        let x = margin + i * bar_width;
        let cx = x + bar_width / 2;
        let cy = top + bar_height / 2;
        let _ = write!(
            bars,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="black"/>
  <text x="{}" y="{}" text-anchor="middle" font-size="13" font-weight="bold" fill="{}">{}</text>
  <text x="{}" y="{}" text-anchor="middle" font-size="12" fill="{}">({})</text>
  "##,
            x, top, bar_width, bar_height, label_color(dimension.label),
            cx, cy - 8, INK, dimension,
            cx, cy + 12, INK, dimension.label.short(),
        );
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:white">
  <text x="{}" y="22" text-anchor="middle" font-size="15" font-weight="600" fill="{}">García-Barbosa sequence</text>
  <text x="{}" y="42" text-anchor="middle" font-size="12" fill="{}">{}</text>
  {}<rect x="{}" y="{}" width="12" height="12" fill="{}" stroke="black"/>
  <text x="{}" y="{}" font-size="11" fill="{}">S = spatial dimension</text>
  <rect x="{}" y="{}" width="12" height="12" fill="{}" stroke="black"/>
  <text x="{}" y="{}" font-size="11" fill="{}">T = temporal dimension</text>
</svg>"##,
        width, height,
        width / 2, INK,
        width / 2, MUTED, sequence.pattern(),
        bars,
        margin, top + bar_height + 20, SPACE_COLOR,
        margin + 18, top + bar_height + 30, MUTED,
        margin + 180, top + bar_height + 20, TIME_COLOR,
        margin + 198, top + bar_height + 30, MUTED,
    )
}

/// Horizontal bars of inhabited spatial dimensions per level, annotated with
/// each level's time dimension.
///
/// Levels whose time lies past `n_dims` are flagged as a paradox.
pub fn hierarchy_svg(levels: &[LevelProperties], n_dims: usize) -> String {
    if levels.is_empty() {
        return String::from("<svg></svg>");
    }

    let margin = 50;
    let label_width = 110;
    let row_height = 44;
    let chart_width = 560;
    let width = margin * 2 + label_width + chart_width + 120;
    let height = margin * 2 + row_height * levels.len() + 30;

    let max_dim = levels
        .iter()
        .map(|l| l.temporal_dim)
        .chain(std::iter::once(n_dims))
        .max()
        .unwrap_or(n_dims)
        + 1;
    let scale = chart_width as f64 / max_dim as f64;
    let x0 = (margin + label_width) as f64;
    let top = margin + 20;

    let mut rows = String::new();
    let mut ends: Vec<(f64, f64)> = Vec::with_capacity(levels.len());
    for (i, props) in levels.iter().enumerate() {
        let y = (top + i * row_height) as f64;
        let bar = props.spatial_dims as f64 * scale;
        let mid = y + row_height as f64 / 2.0;
        let time_note = if props.exceeds_sequence(n_dims) {
            format!("Time: D{} (paradox: no D{})", props.temporal_dim, props.temporal_dim)
        } else {
            format!("Time: D{}", props.temporal_dim)
        };
        let _ = write!(
            rows,
            r##"<text x="{}" y="{:.1}" text-anchor="end" font-size="12" font-weight="bold" fill="{}">L{} ({})</text>
  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="black"/>
  <text x="{:.1}" y="{:.1}" font-size="11" font-weight="bold" fill="{}">{}</text>
  "##,
            x0 - 8.0, mid + 4.0, INK, props.level, props.name,
            x0, y + 6.0, bar, row_height as f64 - 12.0, SPACE_COLOR,
            x0 + bar + 8.0, mid + 4.0, if props.exceeds_sequence(n_dims) { TIME_COLOR } else { INK }, time_note,
        );
        ends.push((x0 + bar, mid));
    }

    let mut arrows = String::new();
    for pair in ends.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        let _ = write!(
            arrows,
            r##"<path d="M {:.1} {:.1} Q {:.1} {:.1} {:.1} {:.1}" fill="none" stroke="red" stroke-width="1.5" marker-end="url(#arrow)"/>
  "##,
            x1, y1, x2 + 20.0, (y1 + y2) / 2.0, x2, y2,
        );
    }

    let limit_x = x0 + n_dims as f64 * scale;
    let bottom = top + row_height * levels.len();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:white">
  <defs><marker id="arrow" markerWidth="8" markerHeight="8" refX="6" refY="3" orient="auto"><path d="M0,0 L6,3 L0,6 z" fill="red"/></marker></defs>
  <text x="{}" y="24" text-anchor="middle" font-size="15" font-weight="600" fill="{}">Hierarchy of perceptual levels</text>
  {}{}<line x1="{:.1}" y1="{}" x2="{:.1}" y2="{}" stroke="{}" stroke-width="1" stroke-dasharray="4,2"/>
  <text x="{:.1}" y="{}" text-anchor="middle" font-size="11" fill="{}">D{}</text>
  <text x="{:.1}" y="{}" text-anchor="middle" font-size="12" fill="{}">Number of spatial dimensions</text>
</svg>"##,
        width, height,
        width / 2, INK,
        rows, arrows,
        limit_x, top, limit_x, bottom, MUTED,
        limit_x, bottom + 14, MUTED, n_dims,
        x0 + chart_width as f64 / 2.0, bottom + 30, MUTED,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Level(u32),
    Dimension(usize),
}

/// Chain of levels and the dimensions they hand over: each level's time
/// becomes space for the next.
pub fn relations_svg(relations: &[TimeSpaceRelation]) -> String {
    if relations.is_empty() {
        return String::from("<svg></svg>");
    }

    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<(usize, usize, String, bool)> = Vec::new();
    for relation in relations {
        let (lower, upper) = relation.levels();
        if nodes.last() != Some(&Node::Level(lower)) {
            nodes.push(Node::Level(lower));
        }
        let from = nodes.len() - 1;
        match relation.dimension() {
            Some(dimension) => {
                nodes.push(Node::Dimension(dimension));
                let via = nodes.len() - 1;
                edges.push((from, via, format!("time of L{}", lower), false));
                nodes.push(Node::Level(upper));
                edges.push((via, nodes.len() - 1, format!("space for L{}", upper), false));
            }
            None => {
                nodes.push(Node::Level(upper));
                edges.push((from, nodes.len() - 1, "no direct relation".to_string(), true));
            }
        }
    }

    let margin = 60.0;
    let step_x = 90.0;
    let step_y = 50.0;
    let span = (nodes.len() - 1) as f64;
    let width = margin * 2.0 + step_x * span;
    let height = margin * 2.0 + step_y * span + 30.0;
    let position = |i: usize| (margin + step_x * i as f64, height - margin - step_y * i as f64);

    let mut edge_svg = String::new();
    for (from, to, caption, dashed) in &edges {
        let (x1, y1) = position(*from);
        let (x2, y2) = position(*to);
        let dash = if *dashed { r#" stroke-dasharray="5,3""# } else { "" };
        let _ = write!(
            edge_svg,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1.5"{} marker-end="url(#arrow)"/>
  <text x="{:.1}" y="{:.1}" font-size="10" fill="{}">{}</text>
  "##,
            x1, y1, x2, y2, INK, dash,
            (x1 + x2) / 2.0 + 6.0, (y1 + y2) / 2.0 + 14.0, MUTED, caption,
        );
    }

    let mut node_svg = String::new();
    for (i, node) in nodes.iter().enumerate() {
        let (x, y) = position(i);
        match node {
            Node::Level(level) => {
                let _ = write!(
                    node_svg,
                    r##"<circle cx="{:.1}" cy="{:.1}" r="26" fill="{}" stroke="black" stroke-width="2"/>
  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" font-weight="bold" fill="{}">L{}</text>
  "##,
                    x, y, LEVEL_COLOR, x, y + 5.0, INK, level,
                );
            }
            Node::Dimension(dimension) => {
                let _ = write!(
                    node_svg,
                    r##"<rect x="{:.1}" y="{:.1}" width="44" height="24" fill="{}" stroke="black" stroke-width="2"/>
  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" font-weight="bold" fill="{}">D{}</text>
  "##,
                    x - 22.0, y - 12.0, TIME_COLOR, x, y + 4.0, INK, dimension,
                );
            }
        }
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" style="background:white">
  <defs><marker id="arrow" markerWidth="8" markerHeight="8" refX="6" refY="3" orient="auto"><path d="M0,0 L6,3 L0,6 z" fill="{}"/></marker></defs>
  <text x="{:.1}" y="24" text-anchor="middle" font-size="15" font-weight="600" fill="{}">Time of one level is space for the next</text>
  {}{}</svg>"##,
        width, height, INK,
        width / 2.0, INK,
        edge_svg, node_svg,
    )
}

/// Write `sequence.svg`, `hierarchy.svg` and `relations.svg` into `dir`.
pub fn write_charts(
    dir: impl AsRef<Path>,
    calculator: &SequenceCalculator,
    levels: RangeInclusive<u32>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create chart directory {}", dir.display()))?;

    let charts = [
        ("sequence.svg", sequence_svg(calculator.sequence())),
        (
            "hierarchy.svg",
            hierarchy_svg(&calculator.levels(levels.clone())?, calculator.n_dims()),
        ),
        ("relations.svg", relations_svg(&calculator.hierarchy(levels)?)),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (name, svg) in charts {
        let path = dir.join(name);
        std::fs::write(&path, svg)
            .with_context(|| format!("Failed to write chart {}", path.display()))?;
        info!(path = %path.display(), "Chart saved");
        written.push(path);
    }
    Ok(written)
}

//! Console rendering of calculator results.
//!
//! Each function returns the text for one section so the binary only has to
//! print it and tests can inspect it.

use std::fmt::Write;
use std::ops::RangeInclusive;

use anyhow::{bail, Result};
use gb_sequence::{LevelMetric, LevelProperties, Sequence, SequenceCalculator, TemporalParadox};

const RULE_WIDTH: usize = 60;

/// Heading framed by `=` rules.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{}\n{}\n{}", rule, title, rule)
}

/// `D1: SPACE` style listing of the sequence.
pub fn sequence_table(sequence: &Sequence) -> String {
    let rule = "-".repeat(40);
    let mut out = String::new();
    let _ = writeln!(out, "García-Barbosa sequence:");
    let _ = writeln!(out, "{}", rule);
    for dimension in sequence {
        let _ = writeln!(out, "{}: {}", dimension, dimension.label);
    }
    let _ = write!(out, "{}", rule);
    out
}

/// Summary block for one level.
pub fn level_block(props: &LevelProperties) -> String {
    format!(
        "{}:\n  - Inhabited spatial dimensions: D1-D{}\n  - Experiential time: D{}\n  - Total dimensions: {}D",
        props.name, props.spatial_dims, props.experiential_time, props.total_dims
    )
}

/// Level blocks for `levels`, each followed by its relation with the level below.
pub fn level_table(calculator: &SequenceCalculator, levels: RangeInclusive<u32>) -> Result<String> {
    let first = *levels.start();
    let mut blocks = Vec::new();
    for level in levels {
        let props = calculator.level_properties(level)?;
        let mut block = level_block(&props);
        if level > first {
            let relation = calculator.time_space_relation(level - 1, level)?;
            let _ = write!(block, "\n  - Relation: {}", relation);
        }
        blocks.push(block);
    }
    Ok(blocks.join("\n\n"))
}

/// Signature and diagonal of one metric.
pub fn metric_block(metric: &LevelMetric) -> String {
    let diagonal = metric
        .diagonal()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Level {} (signature {}):\nMetric (diagonal form): diag({})",
        metric.level, metric.signature, diagonal
    )
}

pub fn metric_table(calculator: &SequenceCalculator, levels: RangeInclusive<u32>) -> Result<String> {
    let blocks = calculator
        .metrics(levels)?
        .iter()
        .map(metric_block)
        .collect::<Vec<_>>();
    Ok(blocks.join("\n\n"))
}

/// Squared interval of a displacement `v` in the metric of `level`.
pub fn interval_line(calculator: &SequenceCalculator, level: u32, v: &[i32]) -> Result<String> {
    let metric = calculator.level_metric(level)?;
    if v.len() != metric.dimensions {
        bail!(
            "Level {} needs {} components, got {}",
            level,
            metric.dimensions,
            v.len()
        );
    }
    let Some(interval) = metric.interval(v) else {
        bail!("Interval overflows for level {}", level);
    };
    let kind = match interval {
        i if i > 0 => "space-like",
        i if i < 0 => "time-like",
        _ => "light-like",
    };
    Ok(format!(
        "Level {} (signature {}): interval = {} ({})",
        level, metric.signature, interval, kind
    ))
}

/// Paradox analysis with numbered resolutions.
pub fn paradox_block(paradox: &TemporalParadox) -> String {
    let mut out = format!(
        "{}:\n- Inhabits dimensions: D1-D{}\n- Its time would be: D{}\n- Problem: D{} > {}, it does not exist in the sequence!\n\nRequired resolution:",
        paradox.name,
        paradox.spatial_dims,
        paradox.temporal_dim,
        paradox.temporal_dim,
        paradox.n_dims
    );
    for (i, resolution) in paradox.resolutions().iter().enumerate() {
        let _ = write!(out, "\n{}. {}", i + 1, resolution);
    }
    out
}

/// The full demonstration: sequence, levels 2-6, metrics 2-4, level 6 paradox.
pub fn demo(calculator: &SequenceCalculator) -> Result<String> {
    let mut sections = vec![
        banner("THEORY OF ALTERNATING PERCEPTUAL DIMENSIONS"),
        sequence_table(calculator.sequence()),
        banner("PROPERTIES BY LEVEL"),
        level_table(calculator, 2..=6)?,
        banner("METRICS BY LEVEL"),
        metric_table(calculator, 2..=4)?,
        banner("TEMPORAL PARADOX OF LEVEL 6"),
    ];
    match calculator.temporal_paradox(6)? {
        Some(paradox) => sections.push(paradox_block(&paradox)),
        None => sections.push(format!(
            "Level 6 lives its time inside the {}-dimension sequence.",
            calculator.n_dims()
        )),
    }
    Ok(sections.join("\n\n"))
}

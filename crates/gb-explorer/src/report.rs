//! JSON report of a calculator run.
//!
//! Captures:
//! - The labelled sequence
//! - Properties and metrics for a range of levels
//! - Relations between consecutive levels
//! - Levels whose time lies outside the sequence

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use gb_sequence::{
    LevelMetric, LevelProperties, Sequence, SequenceCalculator, TemporalParadox,
    TimeSpaceRelation,
};
use serde::{Deserialize, Serialize};

/// A relation together with its rendered statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
    pub statement: String,
    pub relation: TimeSpaceRelation,
}

impl From<TimeSpaceRelation> for RelationEntry {
    fn from(relation: TimeSpaceRelation) -> Self {
        Self {
            statement: relation.to_string(),
            relation,
        }
    }
}

/// Full report for one calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub n_dims: usize,
    /// Compact form, e.g. `1S-2S-3S-4T-...`
    pub pattern: String,
    pub sequence: Sequence,
    pub levels: Vec<LevelProperties>,
    pub metrics: Vec<LevelMetric>,
    pub relations: Vec<RelationEntry>,
    pub paradoxes: Vec<TemporalParadox>,
}

impl Report {
    /// Build a report for `levels` from the calculator.
    pub fn build(calculator: &SequenceCalculator, levels: RangeInclusive<u32>) -> Result<Self> {
        let sequence = calculator.generate_sequence();
        Ok(Self {
            generated_at: Utc::now(),
            n_dims: calculator.n_dims(),
            pattern: sequence.pattern(),
            sequence,
            levels: calculator.levels(levels.clone())?,
            metrics: calculator.metrics(levels.clone())?,
            relations: calculator
                .hierarchy(levels.clone())?
                .into_iter()
                .map(RelationEntry::from)
                .collect(),
            paradoxes: calculator.paradoxes(levels)?,
        })
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report {}", path.display()))?;
        let report = serde_json::from_str(&json)
            .with_context(|| format!("Invalid report {}", path.display()))?;
        Ok(report)
    }
}

/// Generate a timestamped output path from the given path.
/// e.g., "report.json" -> "report-20260108-010530.json"
pub fn timestamped_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("report");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!("{}-{}.{}", stem, timestamp, ext))
}

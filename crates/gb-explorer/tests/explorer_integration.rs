//! Integration tests for the explorer front end.
//!
//! Tests the full flow of:
//! - Config file -> calculator -> report on disk
//! - Charts and console output following the configured sequence length

use std::io::Write;

use gb_explorer::charts::{hierarchy_svg, sequence_svg, write_charts};
use gb_explorer::config::load_config;
use gb_explorer::display;
use gb_explorer::report::Report;
use gb_sequence::SequenceCalculator;

/// Test helper to build a calculator from a JSON config on disk
fn calculator_from_json(json: &str) -> SequenceCalculator {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    SequenceCalculator::new(load_config(file.path()).unwrap()).unwrap()
}

#[test]
fn report_follows_configured_length() {
    let calculator = calculator_from_json(r#"{ "n_dims": 14 }"#);
    let report = Report::build(&calculator, 2..=6).unwrap();

    assert_eq!(report.n_dims, 14);
    assert_eq!(report.sequence.len(), 14);
    // D14 exists now, so level 6 has no paradox
    assert!(report.paradoxes.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    report.save(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["n_dims"], 14);
    assert_eq!(json["sequence"][3]["label"], "TIME");
    assert_eq!(json["levels"][0]["spatial_dims"], 5);
    assert_eq!(json["metrics"][0]["signature"]["positive"], 5);
    assert_eq!(json["relations"][0]["relation"]["kind"], "related");
}

#[test]
fn charts_follow_configured_length() {
    let calculator = calculator_from_json(r#"{ "n_dims": 6 }"#);

    let svg = sequence_svg(calculator.sequence());
    assert!(svg.contains("1S-2S-3S-4T-5S-6T"));
    assert!(!svg.contains(">D7<"));

    let levels = calculator.levels(2..=3).unwrap();
    let svg = hierarchy_svg(&levels, calculator.n_dims());
    // level 2 lives D6, level 3 lives D8 which a six-dimension sequence lacks
    assert!(svg.contains("Time: D6<"));
    assert!(svg.contains("Time: D8 (paradox: no D8)"));
}

#[test]
fn charts_written_to_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts").join("gb");

    let written = write_charts(&out, &SequenceCalculator::default(), 2..=4).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["sequence.svg", "hierarchy.svg", "relations.svg"]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn invalid_levels_surface_as_errors() {
    let calculator = SequenceCalculator::default();
    let dir = tempfile::tempdir().unwrap();

    assert!(Report::build(&calculator, 1..=3).is_err());
    assert!(display::metric_table(&calculator, 0..=2).is_err());
    assert!(write_charts(dir.path(), &calculator, 1..=3).is_err());
}

#[test]
fn demo_output_sections() {
    let text = display::demo(&SequenceCalculator::default()).unwrap();
    let sequence_pos = text.find("D1: SPACE").unwrap();
    let levels_pos = text.find("PROPERTIES BY LEVEL").unwrap();
    let metrics_pos = text.find("METRICS BY LEVEL").unwrap();
    let paradox_pos = text.find("TEMPORAL PARADOX OF LEVEL 6").unwrap();
    assert!(sequence_pos < levels_pos);
    assert!(levels_pos < metrics_pos);
    assert!(metrics_pos < paradox_pos);
    assert!(text.contains("Level 4 (signature (9, 1))"));
}

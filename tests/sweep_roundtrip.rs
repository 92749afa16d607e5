//! Integration tests for the experiment sweep and its exports

use seeker::{
    ExperimentSweep, SearchPolicy, SweepConfig, SweepResult, TargetPlacement, Terrain,
    export::SweepCsvExporter,
};

fn tiny_config() -> SweepConfig {
    SweepConfig {
        size: 5,
        runs: 4,
        seed: Some(1337),
        policies: vec![SearchPolicy::BeliefMax, SearchPolicy::Adaptive],
        placements: vec![TargetPlacement::Anywhere, TargetPlacement::On(Terrain::Flat)],
    }
}

#[test]
fn sweep_aggregates_every_pair() {
    let result = ExperimentSweep::new(tiny_config()).run(|| {}).unwrap();
    assert_eq!(result.seed, 1337);
    assert_eq!(result.rows.len(), 4);
    for row in &result.rows {
        assert_eq!(row.runs, 4);
        assert!(row.mean_score >= row.min_score as f64);
        assert!(row.mean_score <= row.max_score as f64);
        assert!(row.std_dev >= 0.0);
    }
}

#[test]
fn sweep_result_json_round_trips() {
    let result = ExperimentSweep::new(tiny_config()).run(|| {}).unwrap();

    let path = std::env::temp_dir().join("seeker_sweep_roundtrip.json");
    result.save(&path).unwrap();
    let loaded = SweepResult::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.seed, result.seed);
    assert_eq!(loaded.rows.len(), result.rows.len());
    for (a, b) in loaded.rows.iter().zip(&result.rows) {
        assert_eq!(a.policy, b.policy);
        assert_eq!(a.placement, b.placement);
        assert_eq!(a.mean_score, b.mean_score);
    }
}

#[test]
fn csv_export_writes_one_line_per_row() {
    let result = ExperimentSweep::new(tiny_config()).run(|| {}).unwrap();

    let path = std::env::temp_dir().join("seeker_sweep_roundtrip.csv");
    SweepCsvExporter::write(&result, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1 + result.rows.len());
    assert!(lines[0].starts_with("placement,policy,runs"));
    assert!(lines.iter().skip(1).any(|line| line.contains("adaptive")));
}

#[test]
fn identical_seeds_reproduce_identical_sweeps() {
    let first = ExperimentSweep::new(tiny_config()).run(|| {}).unwrap();
    let second = ExperimentSweep::new(tiny_config()).run(|| {}).unwrap();
    for (a, b) in first.rows.iter().zip(&second.rows) {
        assert_eq!(a.mean_score, b.mean_score);
        assert_eq!(a.std_dev, b.std_dev);
    }
}

//! End-to-end tests for the benchmark harness: dataset loading, runs and reports.

use sortlab::benchmark::{
    run_session, BenchmarkReport, BenchmarkRunner, DataSource, Dataset, RatingColumn,
};
use sortlab::config::{BenchmarkConfig, Config};
use sortlab::{ContainerKind, SortAlgorithm, ValueRange};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn ratings_file(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "userId,movieId,rating,timestamp").unwrap();
    for i in 0..rows {
        let rating = ((i % 10) + 1) as f64 / 2.0;
        writeln!(file, "{},{},{},{}", i / 20 + 1, (i * 37) % 500 + 1, rating, 1_260_759_144 + i).unwrap();
    }
    file.flush().unwrap();
    file
}

fn quick_config() -> BenchmarkConfig {
    BenchmarkConfig {
        sizes: vec![10, 100],
        executions: 2,
        ..BenchmarkConfig::default()
    }
}

#[test]
fn test_dataset_from_ratings_file() {
    let file = ratings_file(50);
    let dataset = Dataset::from_csv(file.path(), RatingColumn::Rating, 1_000).unwrap();

    assert_eq!(dataset.len(), 50);
    assert!(dataset.values().iter().all(|v| (1..=10).contains(v)));
    assert_eq!(&dataset.values()[..3], &[1, 2, 3]);
}

#[test]
fn test_session_on_csv_dataset() {
    let file = ratings_file(150);
    let config = BenchmarkConfig {
        dataset_path: Some(file.path().to_path_buf()),
        counting_range: Some(ValueRange::RATINGS),
        ..quick_config()
    };

    let report = run_session(&config).unwrap();
    assert_eq!(report.dataset, DataSource::File(file.path().to_path_buf()));
    assert_eq!(report.results.len(), 2 * 2 * 6);
    assert_eq!(report.sizes(), vec![10, 100]);
    assert!(report.results.iter().all(|r| r.runs.len() == 2));
}

#[test]
fn test_session_falls_back_to_synthetic() {
    let config = BenchmarkConfig {
        dataset_path: Some("/nonexistent/ratings.csv".into()),
        ..quick_config()
    };
    let report = run_session(&config).unwrap();
    assert_eq!(report.dataset, DataSource::Synthetic);
    assert_eq!(report.results.len(), 24);
}

#[test]
fn test_movie_id_column_runs_with_unbounded_counting() {
    let file = ratings_file(100);
    let config = BenchmarkConfig {
        dataset_path: Some(file.path().to_path_buf()),
        column: RatingColumn::MovieId,
        sizes: vec![100],
        executions: 1,
        algorithms: vec![SortAlgorithm::Counting],
        ..BenchmarkConfig::default()
    };
    let report = run_session(&config).unwrap();
    assert_eq!(report.results.len(), 6);
    assert!(report.results.iter().all(|r| r.data_size == 100));
}

#[test]
fn test_runner_order_follows_config() {
    let config = BenchmarkConfig {
        sizes: vec![20],
        executions: 1,
        algorithms: vec![SortAlgorithm::Radix, SortAlgorithm::Counting],
        containers: vec![ContainerKind::LinkedStack, ContainerKind::ArrayList],
        ..BenchmarkConfig::default()
    };
    let runner = BenchmarkRunner::new(config).unwrap();
    let results = runner.run(&Dataset::synthetic(20)).unwrap();

    let order: Vec<(SortAlgorithm, ContainerKind)> =
        results.iter().map(|r| (r.algorithm, r.container)).collect();
    assert_eq!(
        order,
        vec![
            (SortAlgorithm::Radix, ContainerKind::LinkedStack),
            (SortAlgorithm::Radix, ContainerKind::ArrayList),
            (SortAlgorithm::Counting, ContainerKind::LinkedStack),
            (SortAlgorithm::Counting, ContainerKind::ArrayList),
        ]
    );
}

#[test]
fn test_report_files_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = BenchmarkConfig {
        log_dir: temp_dir.path().to_path_buf(),
        ..quick_config()
    };

    let report = run_session(&config).unwrap();
    let paths = report.save(&config.log_dir, config.write_json).unwrap();

    let text = std::fs::read_to_string(&paths.log).unwrap();
    assert!(text.contains("Executions per test: 2"));
    assert!(text.contains("=== DATASET SIZE: 100 elements ==="));
    assert!(text.contains("Radix Sort - Linked Queue (dynamic) - 10 elements:"));
    assert!(text.contains("FINAL SUMMARY"));

    let json = std::fs::read_to_string(paths.json.unwrap()).unwrap();
    let parsed = BenchmarkReport::from_json(&json).unwrap();
    assert_eq!(parsed.system, report.system);
    assert_eq!(parsed.dataset, report.dataset);
    assert_eq!(parsed.results.len(), report.results.len());
    for (parsed, original) in parsed.results.iter().zip(&report.results) {
        assert_eq!(parsed.algorithm, original.algorithm);
        assert_eq!(parsed.container, original.container);
        assert_eq!(parsed.runs, original.runs);
    }
}

#[test]
fn test_config_file_drives_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sortlab.json");

    let config = BenchmarkConfig {
        sizes: vec![30],
        executions: 1,
        containers: vec![ContainerKind::CircularQueue],
        ..BenchmarkConfig::default()
    };
    config.save_to_file(&path).unwrap();

    let loaded = BenchmarkConfig::load_from_file(&path).unwrap();
    let report = run_session(&loaded).unwrap();
    assert_eq!(report.results.len(), 2);
    assert!(report
        .results
        .iter()
        .all(|r| r.container == ContainerKind::CircularQueue && r.data_size == 30));
}

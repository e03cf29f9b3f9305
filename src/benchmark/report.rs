//! Benchmark reports
//!
//! The text report is a system header, one run table per result and a summary
//! of average time, allocation and peak heap growth per container and size. The same data can be
//! exported as JSON.

use super::dataset::DataSource;
use super::runner::BenchmarkResult;
use crate::algorithms::SortAlgorithm;
use crate::containers::ContainerKind;
use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const RULE: &str = "==========================================";

/// Machine and session details printed at the top of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Seconds since the Unix epoch when the session started
    pub timestamp: u64,
    /// Operating system name
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Available parallelism
    pub cpus: usize,
    /// Version of this crate
    pub version: String,
}

impl SystemInfo {
    /// Describe the current machine
    pub fn collect() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp,
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpus: std::thread::available_parallelism().map_or(1, |n| n.get()),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Everything a benchmark session produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Machine the session ran on
    pub system: SystemInfo,
    /// Origin of the input values
    pub dataset: DataSource,
    /// Executions per result
    pub executions: usize,
    /// Results in run order
    pub results: Vec<BenchmarkResult>,
}

/// Files written by [`BenchmarkReport::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Text report
    pub log: PathBuf,
    /// JSON export, if requested
    pub json: Option<PathBuf>,
}

impl BenchmarkReport {
    /// Assemble a report from finished results
    pub fn new(
        system: SystemInfo,
        dataset: DataSource,
        executions: usize,
        results: Vec<BenchmarkResult>,
    ) -> Self {
        Self {
            system,
            dataset,
            executions,
            results,
        }
    }

    /// Distinct data sizes in first-seen order
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for result in &self.results {
            if !sizes.contains(&result.data_size) {
                sizes.push(result.data_size);
            }
        }
        sizes
    }

    /// Distinct algorithms in first-seen order
    pub fn algorithms(&self) -> Vec<SortAlgorithm> {
        let mut algorithms = Vec::new();
        for result in &self.results {
            if !algorithms.contains(&result.algorithm) {
                algorithms.push(result.algorithm);
            }
        }
        algorithms
    }

    fn find(
        &self,
        algorithm: SortAlgorithm,
        container: ContainerKind,
        size: usize,
    ) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.container == container && r.data_size == size)
    }

    /// Write the full text report
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_header(out)?;

        let mut current_size = None;
        for result in &self.results {
            if current_size != Some(result.data_size) {
                writeln!(out, "\n=== DATASET SIZE: {} elements ===", result.data_size)?;
                current_size = Some(result.data_size);
            }
            write_result(out, result)?;
        }

        self.write_summary(out)?;

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "         BENCHMARK FINISHED")?;
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        let algorithms: Vec<String> = self.algorithms().iter().map(|a| a.to_string()).collect();

        writeln!(out, "{}", RULE)?;
        writeln!(out, "     NON-COMPARATIVE SORTING BENCHMARK")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Timestamp: {} (unix)", self.system.timestamp)?;
        writeln!(out, "System: {}/{}", self.system.os, self.system.arch)?;
        writeln!(out, "CPUs: {}", self.system.cpus)?;
        writeln!(out, "sortlab: {}", self.system.version)?;
        writeln!(out, "Dataset: {}", self.dataset)?;
        writeln!(out, "Algorithms: {}", algorithms.join(", "))?;
        writeln!(out, "Executions per test: {}", self.executions)?;
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        let sizes = self.sizes();

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "           FINAL SUMMARY")?;
        writeln!(out, "{}", RULE)?;

        for algorithm in self.algorithms() {
            writeln!(out, "\n{}", algorithm)?;
            write!(out, "{:<20} | {:<8} | ", "Structure", "Type")?;
            for size in &sizes {
                write!(out, "{:>10} | ", size)?;
            }
            writeln!(out)?;
            write!(out, "{:-<20}-+-{:-<8}-+-", "", "")?;
            for _ in &sizes {
                write!(out, "-----------+-")?;
            }
            writeln!(out)?;

            writeln!(out, "\nAVERAGE TIME (ms):")?;
            self.write_summary_rows(out, algorithm, &sizes, |r| r.avg_time_ms)?;
            writeln!(out, "\nAVERAGE MEMORY (MB):")?;
            self.write_summary_rows(out, algorithm, &sizes, |r| r.avg_memory_mb)?;
            writeln!(out, "\nAVERAGE PEAK GROWTH (MB):")?;
            self.write_summary_rows(out, algorithm, &sizes, |r| r.avg_heap_growth_mb)?;
        }
        Ok(())
    }

    fn write_summary_rows<W, F>(
        &self,
        out: &mut W,
        algorithm: SortAlgorithm,
        sizes: &[usize],
        value: F,
    ) -> Result<()>
    where
        W: Write,
        F: Fn(&BenchmarkResult) -> f64,
    {
        for container in ContainerKind::ALL {
            let cells: Vec<Option<&BenchmarkResult>> = sizes
                .iter()
                .map(|&size| self.find(algorithm, container, size))
                .collect();
            if cells.iter().all(Option::is_none) {
                continue;
            }

            write!(
                out,
                "{:<20} | {:<8} | ",
                container.display_name(),
                container.storage_label()
            )?;
            for cell in cells {
                match cell {
                    Some(result) => write!(out, "{:>10.2} | ", value(result))?,
                    None => write!(out, "{:>10} | ", "-")?,
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Render the text report into a string
    pub fn to_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_text(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| SortlabError::serialization(e.to_string()))
    }

    /// Write the report as pretty JSON
    pub fn write_json<W: Write>(&self, out: W) -> Result<()> {
        serde_json::to_writer_pretty(out, self)?;
        Ok(())
    }

    /// Read a report back from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write `benchmark_<timestamp>.log` (and `.json`) into `dir`
    pub fn save<P: AsRef<Path>>(&self, dir: P, with_json: bool) -> Result<ReportPaths> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let stem = format!("benchmark_{}", self.system.timestamp);

        let log_path = dir.join(format!("{}.log", stem));
        let mut log_file = BufWriter::new(File::create(&log_path)?);
        self.write_text(&mut log_file)?;
        log_file.flush()?;
        log::info!("wrote benchmark log to {}", log_path.display());

        let json_path = if with_json {
            let path = dir.join(format!("{}.json", stem));
            let mut json_file = BufWriter::new(File::create(&path)?);
            self.write_json(&mut json_file)?;
            json_file.flush()?;
            log::info!("wrote benchmark results to {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(ReportPaths {
            log: log_path,
            json: json_path,
        })
    }
}

fn write_result<W: Write>(out: &mut W, result: &BenchmarkResult) -> Result<()> {
    writeln!(
        out,
        "\n{} - {} ({}) - {} elements:",
        result.algorithm,
        result.container.display_name(),
        result.container.storage_label(),
        result.data_size
    )?;
    writeln!(out, "----------------------------------------")?;
    writeln!(out, "Execution | Time (ms) | Memory (MB) | Peak (MB)")?;
    writeln!(out, "----------|-----------|-------------|----------")?;
    for run in &result.runs {
        writeln!(
            out,
            "{:>9} | {:>9.2} | {:>11.2} | {:>9.2}",
            run.execution,
            run.time_ms(),
            run.memory_mb(),
            run.heap_growth_mb()
        )?;
    }
    writeln!(out, "----------|-----------|-------------|----------")?;
    writeln!(
        out,
        "AVERAGE   | {:>9.2} | {:>11.2} | {:>9.2}",
        result.avg_time_ms, result.avg_memory_mb, result.avg_heap_growth_mb
    )?;
    writeln!(
        out,
        "MIN       | {:>9.2} | {:>11.2} | {:>9}",
        result.min_time_ms, result.min_memory_mb, "-"
    )?;
    writeln!(
        out,
        "MAX       | {:>9.2} | {:>11.2} | {:>9.2}",
        result.max_time_ms, result.max_memory_mb, result.max_heap_growth_mb
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::runner::BenchmarkRun;
    use tempfile::TempDir;

    fn sample_report() -> BenchmarkReport {
        let runs = |ns: u64| {
            vec![
                BenchmarkRun {
                    execution: 1,
                    time_ns: ns,
                    memory_bytes: 1024 * 1024,
                    heap_growth_bytes: 1024 * 1024,
                },
                BenchmarkRun {
                    execution: 2,
                    time_ns: ns * 3,
                    memory_bytes: 3 * 1024 * 1024,
                    heap_growth_bytes: 2 * 1024 * 1024,
                },
            ]
        };
        let results = vec![
            BenchmarkResult::from_runs(SortAlgorithm::Counting, ContainerKind::ArrayList, 100, runs(1_000_000)),
            BenchmarkResult::from_runs(SortAlgorithm::Counting, ContainerKind::LinkedStack, 100, runs(2_000_000)),
            BenchmarkResult::from_runs(SortAlgorithm::Counting, ContainerKind::ArrayList, 1000, runs(5_000_000)),
        ];
        let system = SystemInfo {
            timestamp: 1_700_000_000,
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            cpus: 8,
            version: "0.1.0".to_string(),
        };
        BenchmarkReport::new(system, DataSource::Synthetic, 2, results)
    }

    #[test]
    fn test_sizes_and_algorithms() {
        let report = sample_report();
        assert_eq!(report.sizes(), vec![100, 1000]);
        assert_eq!(report.algorithms(), vec![SortAlgorithm::Counting]);
    }

    #[test]
    fn test_text_report_layout() {
        let text = sample_report().to_text().unwrap();

        assert!(text.contains("System: linux/x86_64"));
        assert!(text.contains("Executions per test: 2"));
        assert!(text.contains("=== DATASET SIZE: 100 elements ==="));
        assert!(text.contains("Counting Sort - Array List (linear) - 1000 elements:"));
        assert!(text.contains("Execution | Time (ms) | Memory (MB) | Peak (MB)"));
        assert!(text.contains("        2 |      3.00 |        3.00 |      2.00"));
        assert!(text.contains("AVERAGE   |      2.00 |        2.00 |      1.50"));
        assert!(text.contains("MIN       |      1.00 |        1.00 |         -"));
        assert!(text.contains("MAX       |      3.00 |        3.00 |      2.00"));
        assert!(text.contains("AVERAGE TIME (ms):"));
        assert!(text.contains("AVERAGE MEMORY (MB):"));
        assert!(text.contains("AVERAGE PEAK GROWTH (MB):"));
    }

    #[test]
    fn test_summary_marks_missing_cells() {
        let text = sample_report().to_text().unwrap();
        let stack_row = text
            .lines()
            .find(|line| line.starts_with("Linked Stack"))
            .unwrap();
        assert!(stack_row.contains("4.00"));
        assert!(stack_row.contains(" - |"));
        assert!(!text.lines().any(|line| line.starts_with("Circular Queue")));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let mut buffer = Vec::new();
        report.write_json(&mut buffer).unwrap();
        let parsed = BenchmarkReport::from_json(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_save_writes_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = sample_report().save(temp_dir.path().join("logs"), true).unwrap();

        assert_eq!(paths.log.file_name().unwrap(), "benchmark_1700000000.log");
        assert!(paths.log.exists());
        let json = paths.json.unwrap();
        assert!(json.exists());

        let paths = sample_report().save(temp_dir.path(), false).unwrap();
        assert!(paths.json.is_none());
    }
}

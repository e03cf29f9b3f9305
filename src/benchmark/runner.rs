//! Benchmark driver
//!
//! Every measured run builds a fresh container and times the full round trip:
//! load the data into the container, read it back out, sort, and load the
//! sorted values back in. Heap cost is reported two ways by
//! [`TrackingAllocator`](super::TrackingAllocator): the bytes allocated during
//! that window, and how far the live heap rose above where it started.
//!
//! A combination that cannot run at all, such as an unranged counting sort
//! over values too wide for a count table, is skipped with a warning so the
//! rest of the session still reports.

use super::dataset::Dataset;
use super::memory::{self, bytes_to_mb, AllocationSnapshot};
use crate::algorithms::{is_sorted, Algorithm, SortAlgorithm};
use crate::config::{BenchmarkConfig, Config};
use crate::containers::ContainerKind;
use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One timed execution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// 1-based execution number
    pub execution: usize,
    /// Wall-clock time of the round trip
    pub time_ns: u64,
    /// Bytes allocated during the round trip
    pub memory_bytes: usize,
    /// Peak live heap during the round trip minus the live heap before it
    #[serde(default)]
    pub heap_growth_bytes: usize,
}

impl BenchmarkRun {
    /// Elapsed time in milliseconds
    pub fn time_ms(&self) -> f64 {
        self.time_ns as f64 / 1_000_000.0
    }

    /// Allocated memory in mebibytes
    pub fn memory_mb(&self) -> f64 {
        bytes_to_mb(self.memory_bytes)
    }

    /// Peak heap growth in mebibytes
    pub fn heap_growth_mb(&self) -> f64 {
        bytes_to_mb(self.heap_growth_bytes)
    }
}

/// All executions of one (algorithm, container, size) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Sort that ran
    pub algorithm: SortAlgorithm,
    /// Container the data went through
    pub container: ContainerKind,
    /// Input length
    pub data_size: usize,
    /// Individual executions in order
    pub runs: Vec<BenchmarkRun>,
    /// Mean run time in milliseconds
    pub avg_time_ms: f64,
    /// Fastest run in milliseconds
    pub min_time_ms: f64,
    /// Slowest run in milliseconds
    pub max_time_ms: f64,
    /// Mean allocation in mebibytes
    pub avg_memory_mb: f64,
    /// Smallest allocation in mebibytes
    pub min_memory_mb: f64,
    /// Largest allocation in mebibytes
    pub max_memory_mb: f64,
    /// Mean peak heap growth in mebibytes
    #[serde(default)]
    pub avg_heap_growth_mb: f64,
    /// Largest peak heap growth in mebibytes
    #[serde(default)]
    pub max_heap_growth_mb: f64,
}

impl BenchmarkResult {
    /// Aggregate a set of runs; all statistics are zero when `runs` is empty
    pub fn from_runs(
        algorithm: SortAlgorithm,
        container: ContainerKind,
        data_size: usize,
        runs: Vec<BenchmarkRun>,
    ) -> Self {
        let times: Vec<f64> = runs.iter().map(BenchmarkRun::time_ms).collect();
        let memory: Vec<f64> = runs.iter().map(BenchmarkRun::memory_mb).collect();
        let growth: Vec<f64> = runs.iter().map(BenchmarkRun::heap_growth_mb).collect();
        let (avg_time_ms, min_time_ms, max_time_ms) = summarize(&times);
        let (avg_memory_mb, min_memory_mb, max_memory_mb) = summarize(&memory);
        let (avg_heap_growth_mb, _, max_heap_growth_mb) = summarize(&growth);

        Self {
            algorithm,
            container,
            data_size,
            runs,
            avg_time_ms,
            min_time_ms,
            max_time_ms,
            avg_memory_mb,
            min_memory_mb,
            max_memory_mb,
            avg_heap_growth_mb,
            max_heap_growth_mb,
        }
    }
}

/// (mean, min, max)
fn summarize(samples: &[f64]) -> (f64, f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let sum: f64 = samples.iter().sum();
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (sum / samples.len() as f64, min, max)
}

/// Drives every configured combination over a dataset
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Create a runner; fails if `config` does not validate
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every size, algorithm and container in configuration order.
    ///
    /// Sizes larger than the dataset run on the whole dataset.
    pub fn run(&self, dataset: &Dataset) -> Result<Vec<BenchmarkResult>> {
        let mut results = Vec::new();

        for &size in &self.config.sizes {
            let data = dataset.prefix(size);
            if data.len() < size {
                log::warn!(
                    "dataset has {} values, requested size {} runs on all of them",
                    data.len(),
                    size
                );
            }
            log::info!("benchmarking {} elements", data.len());
            results.extend(self.run_size(data)?);
        }

        Ok(results)
    }

    /// Run every configured algorithm and container over `data`.
    ///
    /// Combinations failing with [`SortlabError::RangeTooLarge`] are left out
    /// of the results; any other error ends the run.
    pub fn run_size(&self, data: &[i64]) -> Result<Vec<BenchmarkResult>> {
        let mut results =
            Vec::with_capacity(self.config.algorithms.len() * self.config.containers.len());

        for &algorithm in &self.config.algorithms {
            for &container in &self.config.containers {
                match self.benchmark(algorithm, container, data) {
                    Ok(result) => results.push(result),
                    Err(e @ SortlabError::RangeTooLarge { .. }) => {
                        log::warn!(
                            "skipping {} / {} / {}: {}",
                            algorithm,
                            container,
                            data.len(),
                            e
                        );
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(results)
    }

    /// All executions of one combination
    pub fn benchmark(
        &self,
        algorithm: SortAlgorithm,
        container: ContainerKind,
        data: &[i64],
    ) -> Result<BenchmarkResult> {
        let mut sorter = algorithm.build(self.config.counting_range, self.config.max_table_len);
        let mut runs = Vec::with_capacity(self.config.executions);

        for execution in 1..=self.config.executions {
            let run = self.run_once(sorter.as_mut(), container, data, execution)?;
            log::debug!(
                "{} / {} / {}: run {} took {:.3} ms, {:.3} MB allocated, {:.3} MB peak growth",
                algorithm,
                container,
                data.len(),
                execution,
                run.time_ms(),
                run.memory_mb(),
                run.heap_growth_mb()
            );
            runs.push(run);
        }

        let result = BenchmarkResult::from_runs(algorithm, container, data.len(), runs);
        log::info!(
            "{} / {} ({}) / {}: avg {:.3} ms, {:.3} MB",
            algorithm,
            container,
            container.storage_label(),
            data.len(),
            result.avg_time_ms,
            result.avg_memory_mb
        );
        Ok(result)
    }

    fn run_once(
        &self,
        sorter: &mut dyn Algorithm,
        kind: ContainerKind,
        data: &[i64],
        execution: usize,
    ) -> Result<BenchmarkRun> {
        let mut container = kind.create(self.config.container_capacity(data.len()));

        memory::reset_peak();
        let before = AllocationSnapshot::take();
        let start = Instant::now();

        container.from_sequence(data);
        let sequence = container.to_sequence();
        let sorted = sorter.sort(&sequence)?;
        container.from_sequence(&sorted);

        let elapsed = start.elapsed();
        let after = AllocationSnapshot::take();

        if !is_sorted(&sorted) {
            return Err(SortlabError::invalid_input(format!(
                "{} produced unsorted output on {}",
                sorter.name(),
                kind
            )));
        }
        if container.size() != sorted.len() {
            return Err(SortlabError::invalid_input(format!(
                "{} holds {} of {} sorted values",
                kind,
                container.size(),
                sorted.len()
            )));
        }

        Ok(BenchmarkRun {
            execution,
            time_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            memory_bytes: after.allocated_since(&before),
            heap_growth_bytes: after.peak_growth_since(&before),
        })
    }
}

//! Benchmark harness
//!
//! Loads a ratings dataset, runs every configured algorithm over every
//! container at each dataset size, and reports time and heap usage.
//!
//! # Examples
//!
//! ```rust
//! use sortlab::benchmark::{BenchmarkRunner, Dataset};
//! use sortlab::config::BenchmarkConfig;
//!
//! # fn main() -> sortlab::Result<()> {
//! let config = BenchmarkConfig {
//!     sizes: vec![100],
//!     executions: 2,
//!     ..BenchmarkConfig::default()
//! };
//! let runner = BenchmarkRunner::new(config)?;
//! let results = runner.run(&Dataset::synthetic(100))?;
//! assert_eq!(results.len(), 12);
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod memory;
pub mod report;
pub mod runner;

pub use dataset::{DataSource, Dataset, RatingColumn, RatingsReader};
pub use memory::{AllocationSnapshot, TrackingAllocator};
pub use report::{BenchmarkReport, ReportPaths, SystemInfo};
pub use runner::{BenchmarkResult, BenchmarkRun, BenchmarkRunner};

use crate::config::BenchmarkConfig;
use crate::error::Result;

/// Load the configured dataset, run the benchmark and build a report
pub fn run_session(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    let system = SystemInfo::collect();
    let runner = BenchmarkRunner::new(config.clone())?;
    let dataset =
        Dataset::load_or_synthetic(config.dataset_path.as_deref(), config.column, config.max_size())?;

    log::info!(
        "running {} executions per test on {} values from {}",
        config.executions,
        dataset.len(),
        dataset.source()
    );
    if !memory::is_tracking() {
        log::warn!("tracking allocator not installed, memory columns will read zero");
    }

    let results = runner.run(&dataset)?;
    Ok(BenchmarkReport::new(
        system,
        dataset.source().clone(),
        config.executions,
        results,
    ))
}

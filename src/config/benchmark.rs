//! Benchmark run configuration.

use super::{parse_env_bool, parse_env_list, parse_env_var, Config};
use crate::algorithms::{SortAlgorithm, ValueRange, DEFAULT_MAX_TABLE_LEN};
use crate::benchmark::RatingColumn;
use crate::containers::ContainerKind;
use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dataset sizes measured by default
pub const DEFAULT_SIZES: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];

/// What to measure and where to write it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Ratings CSV; synthetic data is used when absent or unreadable
    pub dataset_path: Option<PathBuf>,
    /// Column to sort
    pub column: RatingColumn,
    /// Dataset sizes, smallest first
    pub sizes: Vec<usize>,
    /// Repetitions per (size, algorithm, container)
    pub executions: usize,
    /// Algorithms to run
    pub algorithms: Vec<SortAlgorithm>,
    /// Containers to run
    pub containers: Vec<ContainerKind>,
    /// Extra capacity given to fixed-capacity containers beyond the dataset size
    pub capacity_slack: usize,
    /// Range for counting sort; `None` scans for the maximum
    pub counting_range: Option<ValueRange>,
    /// Largest count table counting sort may allocate
    pub max_table_len: usize,
    /// Directory for log and JSON reports
    pub log_dir: PathBuf,
    /// Also write results as JSON
    pub write_json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            column: RatingColumn::Rating,
            sizes: DEFAULT_SIZES.to_vec(),
            executions: 10,
            algorithms: SortAlgorithm::ALL.to_vec(),
            containers: ContainerKind::ALL.to_vec(),
            capacity_slack: 100,
            counting_range: None,
            max_table_len: DEFAULT_MAX_TABLE_LEN,
            log_dir: PathBuf::from("."),
            write_json: true,
        }
    }
}

impl BenchmarkConfig {
    /// Capacity handed to fixed-capacity containers for a dataset of `len`
    pub fn container_capacity(&self, len: usize) -> usize {
        len.saturating_add(self.capacity_slack)
    }

    /// Largest configured size
    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

impl Config for BenchmarkConfig {
    fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(SortlabError::configuration("sizes must not be empty"));
        }
        if self.sizes.contains(&0) {
            return Err(SortlabError::configuration("sizes must be greater than 0"));
        }
        if self.executions == 0 {
            return Err(SortlabError::configuration("executions must be greater than 0"));
        }
        if self.algorithms.is_empty() {
            return Err(SortlabError::configuration("at least one algorithm is required"));
        }
        if self.containers.is_empty() {
            return Err(SortlabError::configuration("at least one container is required"));
        }
        if self.max_table_len == 0 {
            return Err(SortlabError::configuration("max_table_len must be greater than 0"));
        }
        if let Some(range) = self.counting_range {
            range.validate()?;
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.dataset_path = std::env::var(format!("{}DATASET", prefix))
            .ok()
            .map(PathBuf::from)
            .or(config.dataset_path);
        config.column = parse_env_var(&format!("{}COLUMN", prefix), config.column);
        config.sizes = parse_env_list(&format!("{}SIZES", prefix), config.sizes)?;
        config.executions = parse_env_var(&format!("{}EXECUTIONS", prefix), config.executions);
        config.algorithms = parse_env_list(&format!("{}ALGORITHMS", prefix), config.algorithms)?;
        config.containers = parse_env_list(&format!("{}CONTAINERS", prefix), config.containers)?;
        config.capacity_slack = parse_env_var(&format!("{}CAPACITY_SLACK", prefix), config.capacity_slack);
        config.max_table_len = parse_env_var(&format!("{}MAX_TABLE_LEN", prefix), config.max_table_len);
        config.log_dir = std::env::var(format!("{}LOG_DIR", prefix))
            .map(PathBuf::from)
            .unwrap_or(config.log_dir);
        config.write_json = parse_env_bool(&format!("{}WRITE_JSON", prefix), config.write_json);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            executions: 5,
            ..Self::default()
        }
    }

    fn memory_preset() -> Self {
        Self {
            sizes: vec![100, 1_000, 10_000, 100_000],
            executions: 10,
            capacity_slack: 0,
            max_table_len: 1 << 20,
            ..Self::default()
        }
    }

    fn realtime_preset() -> Self {
        Self {
            sizes: vec![100, 1_000],
            executions: 3,
            write_json: false,
            ..Self::default()
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| SortlabError::configuration(format!("Failed to serialize benchmark config: {}", e)))?;
        std::fs::write(path, serialized)
            .map_err(|e| SortlabError::configuration(format!("Failed to write benchmark config file: {}", e)))?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SortlabError::configuration(format!("Failed to read benchmark config file: {}", e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SortlabError::configuration(format!("Failed to parse benchmark config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

//! Configuration for the benchmark harness
//!
//! Every configuration type implements [`Config`], which covers validation,
//! environment initialization, presets and JSON persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use sortlab::config::{BenchmarkConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads SORTLAB_SIZES, SORTLAB_EXECUTIONS, ... falling back to defaults
//! let config = BenchmarkConfig::from_env()?;
//! assert!(config.executions > 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Presets
//!
//! ```rust
//! use sortlab::config::{BenchmarkConfig, Config};
//!
//! let quick = BenchmarkConfig::realtime_preset();
//! assert!(quick.validate().is_ok());
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod benchmark;


pub use benchmark::BenchmarkConfig;

/// Common configuration trait providing validation, environment
/// initialization, and preset management.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from `SORTLAB_`-prefixed environment variables.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("SORTLAB_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset that favours the largest datasets over repetition count.
    fn performance_preset() -> Self;

    /// Preset that keeps memory usage small.
    fn memory_preset() -> Self;

    /// Preset for a fast smoke run.
    fn realtime_preset() -> Self;

    /// Balanced preset; the defaults.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when unset or
/// unparseable.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}

/// Parse a comma-separated environment variable into a list.
///
/// Returns `Ok(default)` when unset; any unparseable item is an error.
pub fn parse_env_list<T>(var_name: &str, default: Vec<T>) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(var_name) {
        Ok(raw) => parse_list(&raw).map_err(|e| {
            crate::error::SortlabError::configuration(format!("{}: {}", var_name, e))
        }),
        Err(_) => Ok(default),
    }
}

/// Parse a comma-separated list, skipping empty items
pub fn parse_list<T>(raw: &str) -> std::result::Result<Vec<T>, String>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(|e| format!("invalid item '{}': {}", item, e)))
        .collect()
}

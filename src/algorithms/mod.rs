//! Non-comparative sorting algorithms
//!
//! Counting sort and LSD radix sort over `i64` sequences. Both have free
//! function entry points for one-off use and stateful front-ends
//! ([`CountingSort`], [`RadixSort`]) implementing [`Algorithm`], which the
//! benchmark driver drives through [`SortAlgorithm`].

pub mod counting_sort;
pub mod radix_sort;

pub use counting_sort::{
    counting_sort, counting_sort_by_key, counting_sort_in_range, counting_sort_ratings,
    counting_sort_with_range, CountingSort, CountingSortConfig, ValueRange, DEFAULT_MAX_TABLE_LEN,
};
pub use radix_sort::{radix_sort, RadixSort, RadixSortConfig};

use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Performance statistics for the last sort call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlgorithmStats {
    /// Total items processed
    pub items_processed: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
    /// Working memory in bytes (output plus count tables)
    pub memory_used: usize,
    /// Counting passes over the data
    pub passes: usize,
}

impl AlgorithmStats {
    /// Calculate processing rate in items per second
    pub fn items_per_second(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.items_processed as f64) / (self.processing_time_us as f64 / 1_000_000.0)
    }
}

/// A sort over `i64` sequences that reports what it cost
pub trait Algorithm: fmt::Debug + Send {
    /// Short algorithm name
    fn name(&self) -> &'static str;

    /// Sort `data` into a new vector
    fn sort(&mut self, data: &[i64]) -> Result<Vec<i64>>;

    /// Statistics from the last call to [`Algorithm::sort`]
    fn stats(&self) -> AlgorithmStats;

    /// Estimate working memory for the given input size
    fn estimate_memory(&self, input_size: usize) -> usize;
}

/// Which sort to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// [`CountingSort`]
    Counting,
    /// [`RadixSort`]
    Radix,
}

impl SortAlgorithm {
    /// Both algorithms in report order
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Counting, SortAlgorithm::Radix];

    /// Short identifier, also accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Counting => "counting",
            Self::Radix => "radix",
        }
    }

    /// Build a front-end for this algorithm.
    ///
    /// `range` and `max_table_len` only affect counting sort.
    pub fn build(&self, range: Option<ValueRange>, max_table_len: usize) -> Box<dyn Algorithm> {
        match self {
            Self::Counting => Box::new(CountingSort::with_config(CountingSortConfig {
                range,
                max_table_len,
            })),
            Self::Radix => Box::new(RadixSort::new()),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Counting => f.write_str("Counting Sort"),
            Self::Radix => f.write_str("Radix Sort"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "counting" | "counting_sort" | "count" => Ok(Self::Counting),
            "radix" | "radix_sort" | "lsd" => Ok(Self::Radix),
            other => Err(SortlabError::configuration(format!("unknown algorithm '{}'", other))),
        }
    }
}

/// Returns true if `data` is in non-decreasing order
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

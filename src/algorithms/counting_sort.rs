//! Counting sort for bounded non-negative integers
//!
//! Four entry points with deliberately different contracts:
//!
//! - [`counting_sort`] - scans for the maximum, stable reverse-scan placement
//!   into a new vector. Rejects negative values.
//! - [`counting_sort_in_range`] - same placement over a caller-supplied
//!   [`ValueRange`]; values outside the range are dropped.
//! - [`counting_sort_ratings`] - [`counting_sort_in_range`] pinned to
//!   [`ValueRange::RATINGS`].
//! - [`counting_sort_with_range`] - rewrites the caller's buffer straight
//!   from the count table, bucket by bucket, instead of placing individual
//!   elements. Out-of-range values are dropped and the buffer shrinks.
//!
//! The stable placement itself lives in [`counting_sort_by_key`]. Radix sort
//! runs the same placement per digit but keeps its own pass so the count
//! table and output buffer are reused across digits.

use super::{Algorithm, AlgorithmStats};
use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Default upper bound on count-table slots (64 Mi entries)
pub const DEFAULT_MAX_TABLE_LEN: usize = 1 << 26;

/// Inclusive `[min, max]` bounds for ranged counting sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest accepted value
    pub min: i64,
    /// Largest accepted value
    pub max: i64,
}

impl ValueRange {
    /// Ratings from 0.5 to 5.0 in steps of 0.5, doubled to integers
    pub const RATINGS: ValueRange = ValueRange { min: 1, max: 10 };

    /// Create a range, rejecting `min > max`
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check `min <= max`
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(SortlabError::configuration(format!(
                "value range min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Returns true if `value` lies inside the range
    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of count-table slots the range needs
    pub fn table_len(&self) -> Result<usize> {
        self.validate()?;
        let span = self.max as i128 - self.min as i128 + 1;
        usize::try_from(span).map_err(|_| SortlabError::range_too_large(usize::MAX, usize::MAX))
    }

    #[inline]
    fn offset(&self, value: i64) -> usize {
        (value as i128 - self.min as i128) as usize
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::RATINGS
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Stable counting sort of arbitrary items by a bucket key.
///
/// Counts keys, prefix-sums the table so `count[k]` is the number of items
/// with key `<= k`, then walks the input back to front placing each item at
/// `count[k] - 1`. Items sharing a key keep their input order.
///
/// # Panics
///
/// Panics if `key` returns a value `>= buckets`.
///
/// # Examples
///
/// ```rust
/// use sortlab::algorithms::counting_sort_by_key;
///
/// let tagged = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = counting_sort_by_key(&tagged, 3, |&(k, _)| k as usize);
/// assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn counting_sort_by_key<T, F>(items: &[T], buckets: usize, key: F) -> Vec<T>
where
    T: Copy,
    F: Fn(&T) -> usize,
{
    let Some(&first) = items.first() else {
        return Vec::new();
    };

    let mut count = vec![0usize; buckets];
    for item in items {
        count[key(item)] += 1;
    }

    for i in 1..buckets {
        count[i] += count[i - 1];
    }

    let mut output = vec![first; items.len()];
    for item in items.iter().rev() {
        let k = key(item);
        count[k] -= 1;
        output[count[k]] = *item;
    }

    output
}

/// Sort non-negative integers, scanning the input for its maximum.
///
/// Stable. The count table has `max + 1` slots.
///
/// # Errors
///
/// - [`SortlabError::InvalidInput`] if any value is negative
/// - [`SortlabError::RangeTooLarge`] if `max + 1` exceeds
///   [`DEFAULT_MAX_TABLE_LEN`]
///
/// # Examples
///
/// ```rust
/// use sortlab::algorithms::counting_sort;
///
/// let sorted = counting_sort(&[4, 2, 2, 8, 3, 3, 1])?;
/// assert_eq!(sorted, vec![1, 2, 2, 3, 3, 4, 8]);
/// # Ok::<(), sortlab::SortlabError>(())
/// ```
pub fn counting_sort(data: &[i64]) -> Result<Vec<i64>> {
    sort_by_max(data, DEFAULT_MAX_TABLE_LEN)
}

/// Stable counting sort over `range`, dropping values outside it.
///
/// # Examples
///
/// ```rust
/// use sortlab::algorithms::{counting_sort_in_range, ValueRange};
///
/// let sorted = counting_sort_in_range(&[11, 3, 0, 10, 1], ValueRange::RATINGS)?;
/// assert_eq!(sorted, vec![1, 3, 10]);
/// # Ok::<(), sortlab::SortlabError>(())
/// ```
pub fn counting_sort_in_range(data: &[i64], range: ValueRange) -> Result<Vec<i64>> {
    sort_in_range(data, range, DEFAULT_MAX_TABLE_LEN)
}

/// Stable counting sort over the rating domain `[1, 10]`.
///
/// Values outside the rating domain are dropped.
pub fn counting_sort_ratings(data: &[i64]) -> Result<Vec<i64>> {
    counting_sort_in_range(data, ValueRange::RATINGS)
}

/// Rebuild `data` in ascending order directly from a count table over `range`.
///
/// Each value `range.min + i` is written `count[i]` times. There is no
/// per-element placement, so this only groups equal values; it does not
/// carry any notion of stability. Values outside `range` are dropped and
/// `data` is truncated to the number of values written.
///
/// # Examples
///
/// ```rust
/// use sortlab::algorithms::{counting_sort_with_range, ValueRange};
///
/// let mut data = vec![5, 0, 3, 5, 11, 1];
/// counting_sort_with_range(&mut data, ValueRange::RATINGS)?;
/// assert_eq!(data, vec![1, 3, 5, 5]);
/// # Ok::<(), sortlab::SortlabError>(())
/// ```
pub fn counting_sort_with_range(data: &mut Vec<i64>, range: ValueRange) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    let table_len = checked_table_len(range, DEFAULT_MAX_TABLE_LEN)?;
    let mut count = vec![0usize; table_len];
    for &value in data.iter() {
        if range.contains(value) {
            count[range.offset(value)] += 1;
        }
    }

    let mut index = 0;
    for (i, &n) in count.iter().enumerate() {
        let value = range.min + i as i64;
        data[index..index + n].fill(value);
        index += n;
    }

    if index < data.len() {
        log::debug!(
            "counting_sort_with_range dropped {} values outside {}",
            data.len() - index,
            range
        );
    }
    data.truncate(index);
    Ok(())
}

fn sort_by_max(data: &[i64], max_table_len: usize) -> Result<Vec<i64>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    ensure_non_negative(data)?;
    let max = data.iter().copied().max().unwrap_or(0);
    let table_len = usize::try_from(max)
        .ok()
        .and_then(|m| m.checked_add(1))
        .ok_or_else(|| SortlabError::range_too_large(usize::MAX, max_table_len))?;
    if table_len > max_table_len {
        return Err(SortlabError::range_too_large(table_len, max_table_len));
    }

    Ok(counting_sort_by_key(data, table_len, |&v| v as usize))
}

fn sort_in_range(data: &[i64], range: ValueRange, max_table_len: usize) -> Result<Vec<i64>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let table_len = checked_table_len(range, max_table_len)?;
    let kept: Vec<i64> = data.iter().copied().filter(|&v| range.contains(v)).collect();
    if kept.len() < data.len() {
        log::debug!(
            "ranged counting sort dropped {} values outside {}",
            data.len() - kept.len(),
            range
        );
    }

    Ok(counting_sort_by_key(&kept, table_len, |&v| range.offset(v)))
}

fn checked_table_len(range: ValueRange, max_table_len: usize) -> Result<usize> {
    let table_len = range.table_len()?;
    if table_len > max_table_len {
        return Err(SortlabError::range_too_large(table_len, max_table_len));
    }
    Ok(table_len)
}

/// Reject negative values with the index of the first offender
pub(crate) fn ensure_non_negative(data: &[i64]) -> Result<()> {
    match data.iter().position(|&v| v < 0) {
        Some(index) => Err(SortlabError::invalid_input(format!(
            "negative value {} at index {}; counting and radix sort require non-negative integers",
            data[index], index
        ))),
        None => Ok(()),
    }
}

/// Configuration for [`CountingSort`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountingSortConfig {
    /// Sort over a known range instead of scanning for the maximum
    pub range: Option<ValueRange>,
    /// Largest count table the sort may allocate
    pub max_table_len: usize,
}

impl Default for CountingSortConfig {
    fn default() -> Self {
        Self {
            range: None,
            max_table_len: DEFAULT_MAX_TABLE_LEN,
        }
    }
}

impl CountingSortConfig {
    /// Config pinned to the rating domain
    pub fn ratings() -> Self {
        Self {
            range: Some(ValueRange::RATINGS),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_table_len == 0 {
            return Err(SortlabError::configuration("max_table_len must be greater than 0"));
        }
        if let Some(range) = self.range {
            range.validate()?;
        }
        Ok(())
    }
}

/// Counting sort front-end that records statistics per call
#[derive(Debug)]
pub struct CountingSort {
    config: CountingSortConfig,
    stats: AlgorithmStats,
}

impl CountingSort {
    /// Create a counting sort that scans for the maximum
    pub fn new() -> Self {
        Self::with_config(CountingSortConfig::default())
    }

    /// Create a counting sort with custom configuration
    pub fn with_config(config: CountingSortConfig) -> Self {
        Self {
            config,
            stats: AlgorithmStats::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &CountingSortConfig {
        &self.config
    }

    fn table_len_hint(&self) -> usize {
        self.config
            .range
            .and_then(|r| r.table_len().ok())
            .unwrap_or(0)
    }
}

impl Default for CountingSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for CountingSort {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn sort(&mut self, data: &[i64]) -> Result<Vec<i64>> {
        self.config.validate()?;
        let start_time = Instant::now();

        let sorted = match self.config.range {
            Some(range) => sort_in_range(data, range, self.config.max_table_len)?,
            None => sort_by_max(data, self.config.max_table_len)?,
        };

        let table_len = match self.config.range {
            Some(_) => self.table_len_hint(),
            None => sorted.last().map_or(0, |&max| max as usize + 1),
        };

        self.stats = AlgorithmStats {
            items_processed: data.len(),
            processing_time_us: start_time.elapsed().as_micros() as u64,
            memory_used: sorted.len() * std::mem::size_of::<i64>()
                + table_len * std::mem::size_of::<usize>(),
            passes: 1,
        };

        Ok(sorted)
    }

    fn stats(&self) -> AlgorithmStats {
        self.stats.clone()
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        input_size * std::mem::size_of::<i64>() + self.table_len_hint() * std::mem::size_of::<usize>()
    }
}

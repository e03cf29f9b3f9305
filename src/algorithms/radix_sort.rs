//! LSD radix sort over decimal digits
//!
//! Each pass is a stable counting sort keyed on one digit, least significant
//! first. After the pass for the most significant digit of the maximum, the
//! working copy is fully ordered.

use super::counting_sort::ensure_non_negative;
use super::{Algorithm, AlgorithmStats};
use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Configuration for radix sort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadixSortConfig {
    /// Digit base; one bucket per digit value
    pub radix: i64,
}

impl Default for RadixSortConfig {
    fn default() -> Self {
        Self { radix: 10 }
    }
}

impl RadixSortConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(2..=65_536).contains(&self.radix) {
            return Err(SortlabError::configuration(format!(
                "radix must be between 2 and 65536, got {}",
                self.radix
            )));
        }
        Ok(())
    }
}

/// Sort non-negative integers with base-10 LSD radix sort.
///
/// Works on a copy; the caller's slice is never touched.
///
/// # Errors
///
/// [`SortlabError::InvalidInput`] if any value is negative.
///
/// # Examples
///
/// ```rust
/// use sortlab::algorithms::radix_sort;
///
/// let sorted = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66])?;
/// assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// # Ok::<(), sortlab::SortlabError>(())
/// ```
pub fn radix_sort(data: &[i64]) -> Result<Vec<i64>> {
    let mut work = data.to_vec();
    lsd_sort(&mut work, 10)?;
    Ok(work)
}

/// Sort `data` in place, returning the number of digit passes run
fn lsd_sort(data: &mut [i64], radix: i64) -> Result<usize> {
    if data.is_empty() {
        return Ok(0);
    }
    ensure_non_negative(data)?;

    let max = data.iter().copied().max().unwrap_or(0);
    let mut buffer = vec![0i64; data.len()];
    let mut counts = vec![0usize; radix as usize];
    let mut passes = 0;

    let mut exp = 1i64;
    while max / exp > 0 {
        digit_pass(data, &mut buffer, &mut counts, exp, radix);
        data.copy_from_slice(&buffer);
        passes += 1;

        exp = match exp.checked_mul(radix) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(passes)
}

/// One stable counting pass keyed on `(value / exp) % radix`, written into `out`
fn digit_pass(data: &[i64], out: &mut [i64], counts: &mut [usize], exp: i64, radix: i64) {
    let digit = |value: i64| ((value / exp) % radix) as usize;

    counts.fill(0);
    for &value in data {
        counts[digit(value)] += 1;
    }

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    for &value in data.iter().rev() {
        let d = digit(value);
        counts[d] -= 1;
        out[counts[d]] = value;
    }
}

/// Radix sort front-end that records statistics per call
#[derive(Debug)]
pub struct RadixSort {
    config: RadixSortConfig,
    stats: AlgorithmStats,
}

impl RadixSort {
    /// Create a base-10 radix sort
    pub fn new() -> Self {
        Self::with_config(RadixSortConfig::default())
    }

    /// Create a radix sort instance with custom configuration
    pub fn with_config(config: RadixSortConfig) -> Self {
        Self {
            config,
            stats: AlgorithmStats::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RadixSortConfig {
        &self.config
    }
}

impl Default for RadixSort {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for RadixSort {
    fn name(&self) -> &'static str {
        "radix"
    }

    fn sort(&mut self, data: &[i64]) -> Result<Vec<i64>> {
        self.config.validate()?;
        let start_time = Instant::now();

        let mut work = data.to_vec();
        let passes = lsd_sort(&mut work, self.config.radix)?;

        self.stats = AlgorithmStats {
            items_processed: data.len(),
            processing_time_us: start_time.elapsed().as_micros() as u64,
            memory_used: self.estimate_memory(data.len()),
            passes,
        };

        Ok(work)
    }

    fn stats(&self) -> AlgorithmStats {
        self.stats.clone()
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        // working copy + pass buffer + bucket counts
        2 * input_size * std::mem::size_of::<i64>()
            + self.config.radix.max(0) as usize * std::mem::size_of::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_sort_example() {
        let sorted = radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap();
        assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_radix_sort_empty() {
        assert!(radix_sort(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_radix_sort_all_zero() {
        assert_eq!(radix_sort(&[0, 0, 0]).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_radix_sort_rejects_negative() {
        let err = radix_sort(&[5, -20]).unwrap_err();
        assert_eq!(err.category(), "input");
    }

    #[test]
    fn test_radix_sort_leaves_input() {
        let data = vec![30, 10, 20];
        let sorted = radix_sort(&data).unwrap();
        assert_eq!(sorted, vec![10, 20, 30]);
        assert_eq!(data, vec![30, 10, 20]);
    }

    #[test]
    fn test_radix_sort_near_i64_max() {
        let data = vec![i64::MAX, 0, i64::MAX - 1, 42];
        let sorted = radix_sort(&data).unwrap();
        assert_eq!(sorted, vec![0, 42, i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_pass_count_matches_digits() {
        let mut data = vec![802, 3, 45];
        assert_eq!(lsd_sort(&mut data, 10).unwrap(), 3);

        let mut single = vec![7, 1];
        assert_eq!(lsd_sort(&mut single, 10).unwrap(), 1);

        let mut zeros = vec![0, 0];
        assert_eq!(lsd_sort(&mut zeros, 10).unwrap(), 0);
    }

    #[test]
    fn test_digit_pass_is_stable() {
        // 21 and 11 share the units digit; their relative order must hold
        let data = [21, 30, 11, 2];
        let mut out = [0; 4];
        let mut counts = [0usize; 10];
        digit_pass(&data, &mut out, &mut counts, 1, 10);
        assert_eq!(out, [30, 21, 11, 2]);
    }

    #[test]
    fn test_custom_radix() {
        let mut sorter = RadixSort::with_config(RadixSortConfig { radix: 256 });
        let sorted = sorter.sort(&[70_000, 1, 256, 255]).unwrap();
        assert_eq!(sorted, vec![1, 255, 256, 70_000]);
        assert_eq!(sorter.stats().passes, 3);
    }

    #[test]
    fn test_invalid_radix() {
        let mut sorter = RadixSort::with_config(RadixSortConfig { radix: 1 });
        assert!(sorter.sort(&[1, 2]).is_err());
    }

    #[test]
    fn test_front_end_stats() {
        let mut sorter = RadixSort::new();
        sorter.sort(&[9, 100, 5]).unwrap();
        let stats = sorter.stats();
        assert_eq!(stats.items_processed, 3);
        assert_eq!(stats.passes, 3);
        assert!(stats.memory_used > 3 * std::mem::size_of::<i64>());
    }
}

//! # Sortlab: Non-Comparative Sorting over Elementary Containers
//!
//! This crate benchmarks counting sort and LSD radix sort across six
//! elementary containers, array-backed and linked variants of a list, a queue
//! and a stack, measuring wall-clock time and heap allocation per run.
//!
//! ## Key Features
//!
//! - **Sorting Algorithms**: Counting sort (stable, optional value range) and base-10 LSD radix sort
//! - **Containers**: Fixed-capacity array list, circular queue and array stack; linked list, queue and stack
//! - **Uniform Contract**: Every container converts to and from a plain sequence through [`SequenceContainer`]
//! - **Benchmark Harness**: Ratings CSV ingestion, repeated timed round trips, text and JSON reports
//! - **Heap Accounting**: A counting global allocator for per-run allocation volume
//!
//! ## Quick Start
//!
//! ```rust
//! use sortlab::{counting_sort, radix_sort, ContainerKind, SequenceContainer};
//!
//! # fn main() -> sortlab::Result<()> {
//! assert_eq!(counting_sort(&[4, 2, 2, 8, 3, 3, 1])?, vec![1, 2, 2, 3, 3, 4, 8]);
//! assert_eq!(radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66])?, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//!
//! // convert to a sequence, sort, and convert back
//! let mut queue = ContainerKind::CircularQueue.create(8);
//! queue.from_sequence(&[9, 3, 7]);
//! let sorted = radix_sort(&queue.to_sequence())?;
//! queue.from_sequence(&sorted);
//! assert_eq!(queue.to_sequence(), vec![3, 7, 9]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod benchmark;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use error::{Result, SortlabError};

pub use algorithms::{
    counting_sort, counting_sort_in_range, counting_sort_ratings, counting_sort_with_range,
    is_sorted, radix_sort, Algorithm, AlgorithmStats, CountingSort, CountingSortConfig, RadixSort,
    RadixSortConfig, SortAlgorithm, ValueRange,
};
pub use benchmark::{
    BenchmarkReport, BenchmarkResult, BenchmarkRun, BenchmarkRunner, Dataset, RatingColumn,
    TrackingAllocator,
};
pub use config::{BenchmarkConfig, Config};
pub use containers::{
    ArrayList, ArrayStack, CircularQueue, ContainerKind, LinkedList, LinkedQueue, LinkedStack,
    SequenceContainer,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    log::debug!("Initializing sortlab v{}", VERSION);
}

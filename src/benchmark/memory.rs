//! Heap accounting for benchmark runs
//!
//! [`TrackingAllocator`] forwards to [`System`] and keeps process-wide byte
//! counters. A binary opts in with
//!
//! ```rust,ignore
//! #[global_allocator]
//! static GLOBAL: sortlab::benchmark::TrackingAllocator = sortlab::benchmark::TrackingAllocator::new();
//! ```
//!
//! Without it the counters stay at zero and every delta reads as zero.

use serde::{Deserialize, Serialize};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static TOTAL_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static TOTAL_DEALLOCATED: AtomicUsize = AtomicUsize::new(0);
static LIVE: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Counting wrapper over the system allocator
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Create the allocator; usable in a `static`
    pub const fn new() -> Self {
        Self
    }

    #[inline]
    fn track_alloc(size: usize) {
        INSTALLED.store(true, Ordering::Relaxed);
        TOTAL_ALLOCATED.fetch_add(size, Ordering::Relaxed);
        let live = LIVE.fetch_add(size, Ordering::Relaxed) + size;
        PEAK.fetch_max(live, Ordering::Relaxed);
    }

    #[inline]
    fn track_dealloc(size: usize) {
        TOTAL_DEALLOCATED.fetch_add(size, Ordering::Relaxed);
        LIVE.fetch_sub(size, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            Self::track_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            Self::track_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        Self::track_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            // a move counts as freeing the old block and allocating the new one
            Self::track_dealloc(layout.size());
            Self::track_alloc(new_size);
        }
        new_ptr
    }
}

/// Returns true once any allocation went through [`TrackingAllocator`]
pub fn is_tracking() -> bool {
    INSTALLED.load(Ordering::Relaxed)
}

/// Restart peak tracking from the current live byte count
pub fn reset_peak() {
    PEAK.store(LIVE.load(Ordering::Relaxed), Ordering::Relaxed);
}

/// Point-in-time copy of the allocator counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSnapshot {
    /// Cumulative bytes allocated
    pub total_allocated: usize,
    /// Cumulative bytes freed
    pub total_deallocated: usize,
    /// Bytes currently allocated
    pub live: usize,
    /// Highest live byte count since the last [`reset_peak`]
    pub peak: usize,
}

impl AllocationSnapshot {
    /// Read the counters
    pub fn take() -> Self {
        Self {
            total_allocated: TOTAL_ALLOCATED.load(Ordering::Relaxed),
            total_deallocated: TOTAL_DEALLOCATED.load(Ordering::Relaxed),
            live: LIVE.load(Ordering::Relaxed),
            peak: PEAK.load(Ordering::Relaxed),
        }
    }

    /// Bytes allocated between `earlier` and `self`
    ///
    /// This is allocation volume, not net growth: memory freed inside the
    /// window still counts.
    pub fn allocated_since(&self, earlier: &AllocationSnapshot) -> usize {
        self.total_allocated.saturating_sub(earlier.total_allocated)
    }

    /// How far the heap rose above its level at `earlier`
    ///
    /// Only meaningful when [`reset_peak`] ran right before `earlier` was
    /// taken, so that `self.peak` covers just the window in between.
    pub fn peak_growth_since(&self, earlier: &AllocationSnapshot) -> usize {
        self.peak.saturating_sub(earlier.live)
    }
}

/// Bytes to mebibytes
#[inline]
pub fn bytes_to_mb(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

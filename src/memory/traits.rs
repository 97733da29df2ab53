/*!
 * Memory Traits
 * Memory management abstractions
 */

use super::types::*;
use crate::core::types::Size;

/// Allocator interface driven by the request stream
pub trait Allocator {
    /// Discard all blocks and counters and start over with `total` free units
    fn reset(&mut self, total: Size);

    /// First-fit allocate `size` units for `owner`
    fn allocate(&mut self, owner: &str, size: Size) -> MemoryResult<AllocationOutcome>;

    /// Free the lowest-addressed block owned by `owner`
    fn release(&mut self, owner: &str) -> ReleaseOutcome;

    /// Merge adjacent free blocks, returning the number of merges
    fn coalesce(&mut self) -> usize;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Ordered view of every block
    fn snapshot(&self) -> Vec<BlockSnapshot>;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}

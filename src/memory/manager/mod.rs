/*!
 * Memory Management
 *
 * First-fit allocator over a single fixed-size address space.
 *
 * ## Layout
 *
 * The address space is partitioned into an address-ordered [`BlockList`].
 * Every unit in `[0, total)` belongs to exactly one block, and each block is
 * either free or owned by one label.
 *
 * ## Features
 *
 * - **First-fit**: the lowest-addressed free block that is large enough wins
 * - **Block splitting**: the unused tail of a chosen block becomes a new free block
 * - **Coalescing**: adjacent free blocks are merged only when asked to
 * - **Statistics**: utilization, fragmentation, and outcome counters
 * - **Shared handle**: a mutex-guarded wrapper for concurrent embedders
 */

mod allocator;
mod block_list;
mod coalesce;
mod shared;
mod stats;

pub use block_list::{BlockId, BlockList};
pub use shared::SharedMemoryManager;

use super::traits::{Allocator, MemoryInfo};
use super::types::{
    AllocationOutcome, BlockSnapshot, MemoryBlock, MemoryResult, MemoryStats, ReleaseOutcome,
};
use crate::core::types::Size;
use tracing::info;

/// First-fit memory manager
///
/// Owns the block partition and the allocation outcome counters. One
/// instance is one independent simulation.
#[derive(Debug)]
pub struct FirstFitManager {
    pub(super) total_memory: Size,
    pub(super) blocks: BlockList,
    pub(super) successful_allocations: u64,
    pub(super) failed_allocations: u64,
}

impl FirstFitManager {
    /// Create a manager whose whole capacity is one free block
    pub fn with_capacity(total: Size) -> Self {
        let mut manager = Self {
            total_memory: total,
            blocks: BlockList::new(),
            successful_allocations: 0,
            failed_allocations: 0,
        };
        manager.reset(total);
        manager
    }

    /// Replace all state with a fresh partition of `total` units
    pub fn reset(&mut self, total: Size) {
        self.total_memory = total;
        self.blocks.clear();
        // A zero-sized space has no blocks at all: every block must be non-empty.
        if total > 0 {
            self.blocks.push_back(MemoryBlock::free(0, total));
        }
        self.successful_allocations = 0;
        self.failed_allocations = 0;
        info!(total, "Memory manager initialized with first-fit block list");
    }

    pub fn capacity(&self) -> Size {
        self.total_memory
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks in address order
    pub fn blocks(&self) -> impl Iterator<Item = &MemoryBlock> {
        self.blocks.iter()
    }
}

// Implement trait interfaces
impl Allocator for FirstFitManager {
    fn reset(&mut self, total: Size) {
        FirstFitManager::reset(self, total)
    }

    fn allocate(&mut self, owner: &str, size: Size) -> MemoryResult<AllocationOutcome> {
        FirstFitManager::allocate(self, owner, size)
    }

    fn release(&mut self, owner: &str) -> ReleaseOutcome {
        FirstFitManager::release(self, owner)
    }

    fn coalesce(&mut self) -> usize {
        FirstFitManager::coalesce(self)
    }
}

impl MemoryInfo for FirstFitManager {
    fn stats(&self) -> MemoryStats {
        FirstFitManager::stats(self)
    }

    fn snapshot(&self) -> Vec<BlockSnapshot> {
        FirstFitManager::snapshot(self)
    }
}

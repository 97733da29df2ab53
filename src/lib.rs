/*!
 * First-Fit Memory Allocation Simulator
 * Contiguous allocation over a fixed address space, driven by a request stream
 */

pub mod core;
pub mod driver;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::*;
pub use driver::{Command, RunSummary, Simulator};
pub use memory::{
    AllocationOutcome, Allocator, BlockSnapshot, FirstFitManager, MemoryInfo, MemoryStats,
    ReleaseOutcome, SharedMemoryManager,
};
pub use monitoring::init_tracing;

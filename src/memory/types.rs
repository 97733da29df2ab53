/*!
 * Memory Types
 * Common types for memory management
 */

use crate::core::limits::{
    PRESSURE_CRITICAL_THRESHOLD, PRESSURE_HIGH_THRESHOLD, PRESSURE_MEDIUM_THRESHOLD,
};
use crate::core::types::{Offset, Owner, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Caller errors and integrity failures raised by the allocator core
///
/// Running out of space is not an error: it is reported through
/// [`AllocationOutcome::Failed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Invalid allocation size {0}: size must be greater than zero")]
    InvalidSize(Size),

    #[error("Owner label must not be empty")]
    EmptyOwner,

    #[error("Block partition corrupted at offset {offset}: {reason}")]
    Corrupted { offset: Offset, reason: &'static str },
}

/// Memory block metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub offset: Offset,
    pub length: Size,
    pub owner: Option<Owner>,
}

impl MemoryBlock {
    pub fn free(offset: Offset, length: Size) -> Self {
        Self {
            offset,
            length,
            owner: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// One past the last unit covered by this block
    pub fn end(&self) -> Offset {
        self.offset + self.length
    }

    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner.as_deref() == Some(owner)
    }
}

/// Read-only view of one block, numbered from 1 in address order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub index: usize,
    pub offset: Offset,
    pub length: Size,
    pub owner: Option<Owner>,
}

impl BlockSnapshot {
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Inclusive last unit of the block
    pub fn last(&self) -> Offset {
        self.offset + self.length - 1
    }
}

/// Result of a first-fit allocation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    Allocated { offset: Offset },
    Failed,
}

impl AllocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AllocationOutcome::Allocated { .. })
    }
}

/// Result of releasing an owner's block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released { offset: Offset, length: Size },
    NotFound,
}

impl ReleaseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReleaseOutcome::Released { .. })
    }
}

/// Memory statistics gathered in a single pass over the partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub allocated_memory: Size,
    pub free_memory: Size,
    pub process_count: usize,
    pub free_block_count: usize,
    pub largest_free_block: Size,
    pub successful_allocations: u64,
    pub failed_allocations: u64,
}

impl MemoryStats {
    pub fn allocated_percent(&self) -> f64 {
        self.percent_of_total(self.allocated_memory)
    }

    pub fn free_percent(&self) -> f64 {
        self.percent_of_total(self.free_memory)
    }

    /// Free space outside the largest free block, as a share of total memory
    pub fn external_fragmentation(&self) -> f64 {
        if self.total_memory == 0 || self.free_memory == 0 {
            return 0.0;
        }
        self.percent_of_total(self.free_memory - self.largest_free_block)
    }

    pub fn memory_pressure(&self) -> MemoryPressure {
        let usage = self.allocated_percent();
        if usage >= PRESSURE_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if usage >= PRESSURE_HIGH_THRESHOLD {
            MemoryPressure::High
        } else if usage >= PRESSURE_MEDIUM_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }

    fn percent_of_total(&self, amount: Size) -> f64 {
        if self.total_memory == 0 {
            return 0.0;
        }
        (amount as f64 * 100.0) / self.total_memory as f64
    }
}

/// Memory pressure levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: Size, allocated: Size, free: Size, largest: Size) -> MemoryStats {
        MemoryStats {
            total_memory: total,
            allocated_memory: allocated,
            free_memory: free,
            process_count: 0,
            free_block_count: 0,
            largest_free_block: largest,
            successful_allocations: 0,
            failed_allocations: 0,
        }
    }

    #[test]
    fn test_percentages() {
        let s = stats(100, 75, 25, 20);
        assert_eq!(s.allocated_percent(), 75.0);
        assert_eq!(s.free_percent(), 25.0);
        assert_eq!(s.external_fragmentation(), 5.0);
    }

    #[test]
    fn test_zero_capacity_has_no_percentages() {
        let s = stats(0, 0, 0, 0);
        assert_eq!(s.allocated_percent(), 0.0);
        assert_eq!(s.free_percent(), 0.0);
        assert_eq!(s.external_fragmentation(), 0.0);
    }

    #[test]
    fn test_fully_allocated_has_no_fragmentation() {
        let s = stats(64, 64, 0, 0);
        assert_eq!(s.external_fragmentation(), 0.0);
        assert_eq!(s.memory_pressure(), MemoryPressure::Critical);
    }

    #[test]
    fn test_pressure_levels() {
        assert_eq!(stats(100, 10, 90, 90).memory_pressure(), MemoryPressure::Low);
        assert_eq!(stats(100, 60, 40, 40).memory_pressure(), MemoryPressure::Medium);
        assert_eq!(stats(100, 85, 15, 15).memory_pressure(), MemoryPressure::High);
        assert_eq!(MemoryPressure::High.to_string(), "HIGH");
    }

    #[test]
    fn test_block_bounds() {
        let block = MemoryBlock::free(30, 50);
        assert!(block.is_free());
        assert_eq!(block.end(), 80);
        assert!(!block.is_owned_by("A"));
    }
}

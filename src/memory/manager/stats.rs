/*!
 * Memory Statistics
 * Read-only queries over the block partition
 */

use super::super::types::{BlockSnapshot, MemoryError, MemoryResult, MemoryStats};
use super::FirstFitManager;

impl FirstFitManager {
    /// Utilization and fragmentation figures from one pass over the blocks
    pub fn stats(&self) -> MemoryStats {
        let mut stats = MemoryStats {
            total_memory: self.total_memory,
            allocated_memory: 0,
            free_memory: 0,
            process_count: 0,
            free_block_count: 0,
            largest_free_block: 0,
            successful_allocations: self.successful_allocations,
            failed_allocations: self.failed_allocations,
        };

        for block in self.blocks.iter() {
            if block.is_free() {
                stats.free_memory += block.length;
                stats.free_block_count += 1;
                stats.largest_free_block = stats.largest_free_block.max(block.length);
            } else {
                stats.allocated_memory += block.length;
                stats.process_count += 1;
            }
        }

        stats
    }

    pub fn snapshot(&self) -> Vec<BlockSnapshot> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, block)| BlockSnapshot {
                index: i + 1,
                offset: block.offset,
                length: block.length,
                owner: block.owner.clone(),
            })
            .collect()
    }

    /// Lowest-addressed block owned by `owner`, if any
    pub fn find_owner(&self, owner: &str) -> Option<BlockSnapshot> {
        self.snapshot().into_iter().find(|b| b.owner.as_deref() == Some(owner))
    }

    /// Check that the blocks tile `[0, capacity)` with non-empty, gap-free blocks
    pub fn verify(&self) -> MemoryResult<()> {
        let mut expected = 0;
        for block in self.blocks.iter() {
            if block.length == 0 {
                return Err(MemoryError::Corrupted {
                    offset: block.offset,
                    reason: "empty block",
                });
            }
            if block.offset != expected {
                return Err(MemoryError::Corrupted {
                    offset: block.offset,
                    reason: "gap or overlap with previous block",
                });
            }
            if block.owner.as_ref().is_some_and(|o| o.is_empty()) {
                return Err(MemoryError::Corrupted {
                    offset: block.offset,
                    reason: "allocated block with empty owner",
                });
            }
            expected = block.end();
        }

        if expected != self.total_memory {
            return Err(MemoryError::Corrupted {
                offset: expected,
                reason: "blocks do not reach the end of memory",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_single_pass_totals() {
        let mut mm = FirstFitManager::with_capacity(100);
        mm.allocate("A", 30).unwrap();
        mm.allocate("B", 50).unwrap();
        mm.allocate("C", 40).unwrap();

        let stats = mm.stats();
        assert_eq!(stats.allocated_memory, 80);
        assert_eq!(stats.free_memory, 20);
        assert_eq!(stats.process_count, 2);
        assert_eq!(stats.free_block_count, 1);
        assert_eq!(stats.largest_free_block, 20);
        assert_eq!(stats.successful_allocations, 2);
        assert_eq!(stats.failed_allocations, 1);
    }

    #[test]
    fn test_snapshot_is_one_based() {
        let mut mm = FirstFitManager::with_capacity(10);
        mm.allocate("A", 4).unwrap();
        let snap = mm.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].index, 1);
        assert_eq!(snap[0].last(), 3);
        assert_eq!(snap[1].index, 2);
        assert!(snap[1].is_free());
        assert_eq!(mm.find_owner("A").map(|b| b.offset), Some(0));
        assert_eq!(mm.find_owner("Z"), None);
    }

    #[test]
    fn test_verify_accepts_fresh_and_empty_space() {
        assert!(FirstFitManager::with_capacity(64).verify().is_ok());
        assert!(FirstFitManager::with_capacity(0).verify().is_ok());
    }

    #[test]
    fn test_verify_detects_gap() {
        let mut mm = FirstFitManager::with_capacity(10);
        mm.allocate("A", 4).unwrap();
        let tail = mm.blocks.find(|b| b.is_free()).unwrap();
        mm.blocks.get_mut(tail).offset = 5;

        assert!(matches!(
            mm.verify(),
            Err(MemoryError::Corrupted { offset: 5, .. })
        ));
    }
}

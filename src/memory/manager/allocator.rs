/*!
 * Memory Allocator Implementation
 * First-fit allocation and release logic
 */

use super::super::types::{
    AllocationOutcome, MemoryBlock, MemoryError, MemoryPressure, MemoryResult, ReleaseOutcome,
};
use super::FirstFitManager;
use crate::core::types::Size;
use tracing::{debug, info};

impl FirstFitManager {
    /// Allocate `size` units for `owner` from the first free block that fits
    ///
    /// A larger block is split: the head is handed to `owner` and the tail
    /// stays free directly after it. An exact fit is allocated in place.
    /// Owner labels are not checked for uniqueness.
    pub fn allocate(&mut self, owner: &str, size: Size) -> MemoryResult<AllocationOutcome> {
        if size == 0 {
            return Err(MemoryError::InvalidSize(size));
        }
        if owner.is_empty() {
            return Err(MemoryError::EmptyOwner);
        }

        let Some(id) = self.blocks.find(|b| b.is_free() && b.length >= size) else {
            self.failed_allocations += 1;
            debug!(owner, size, "No free block large enough");
            return Ok(AllocationOutcome::Failed);
        };

        let block = self.blocks.get_mut(id);
        let offset = block.offset;
        let remainder = block.length - size;
        block.owner = Some(owner.into());
        block.length = size;

        if remainder > 0 {
            self.blocks
                .insert_after(id, MemoryBlock::free(offset + size, remainder));
            debug!(
                owner,
                size,
                offset,
                remainder,
                "Split block: returning tail to the free list"
            );
        } else {
            debug!(owner, size, offset, "Exact fit: block allocated in place");
        }

        self.successful_allocations += 1;

        let pressure = self.stats().memory_pressure();
        if pressure >= MemoryPressure::High {
            info!(%pressure, owner, size, offset, "Memory pressure after allocation");
        }

        Ok(AllocationOutcome::Allocated { offset })
    }

    /// Free the lowest-addressed block owned by `owner`
    ///
    /// The freed block keeps its offset and length and is not merged with
    /// free neighbours.
    pub fn release(&mut self, owner: &str) -> ReleaseOutcome {
        let Some(id) = self.blocks.find(|b| b.is_owned_by(owner)) else {
            debug!(owner, "Release of unknown owner");
            return ReleaseOutcome::NotFound;
        };

        let block = self.blocks.get_mut(id);
        block.owner = None;
        debug!(owner, offset = block.offset, length = block.length, "Released block");
        ReleaseOutcome::Released {
            offset: block.offset,
            length: block.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn layout(manager: &FirstFitManager) -> Vec<(usize, usize, Option<String>)> {
        manager
            .blocks()
            .map(|b| (b.offset, b.length, b.owner.clone().map(String::from)))
            .collect()
    }

    #[test]
    fn test_allocate_splits_first_fit_block() {
        let mut mm = FirstFitManager::with_capacity(100);
        let outcome = mm.allocate("A", 30).unwrap();
        assert_eq!(outcome, AllocationOutcome::Allocated { offset: 0 });
        assert_eq!(
            layout(&mm),
            vec![(0, 30, Some("A".into())), (30, 70, None)]
        );
    }

    #[test]
    fn test_exact_fit_does_not_split() {
        let mut mm = FirstFitManager::with_capacity(40);
        mm.allocate("A", 40).unwrap();
        assert_eq!(mm.block_count(), 1);
        assert_eq!(layout(&mm), vec![(0, 40, Some("A".into()))]);
    }

    #[test]
    fn test_zero_size_rejected_without_counting() {
        let mut mm = FirstFitManager::with_capacity(10);
        assert_eq!(mm.allocate("A", 0), Err(MemoryError::InvalidSize(0)));
        assert_eq!(mm.allocate("", 1), Err(MemoryError::EmptyOwner));
        let stats = mm.stats();
        assert_eq!(stats.successful_allocations, 0);
        assert_eq!(stats.failed_allocations, 0);
    }

    #[test]
    fn test_zero_capacity_always_fails() {
        let mut mm = FirstFitManager::with_capacity(0);
        assert_eq!(mm.block_count(), 0);
        assert_eq!(mm.allocate("A", 1).unwrap(), AllocationOutcome::Failed);
        assert_eq!(mm.stats().failed_allocations, 1);
    }

    #[test]
    fn test_release_frees_in_place() {
        let mut mm = FirstFitManager::with_capacity(100);
        mm.allocate("A", 30).unwrap();
        mm.allocate("B", 50).unwrap();
        assert_eq!(
            mm.release("A"),
            ReleaseOutcome::Released {
                offset: 0,
                length: 30
            }
        );
        assert_eq!(
            layout(&mm),
            vec![(0, 30, None), (30, 50, Some("B".into())), (80, 20, None)]
        );
        assert_eq!(mm.release("A"), ReleaseOutcome::NotFound);
    }

    #[derive(Clone)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Log text emitted while allocating 85 of 100 units at `level`
    fn pressure_log(level: tracing::Level) -> String {
        let captured = Captured(Arc::new(Mutex::new(Vec::new())));
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut mm = FirstFitManager::with_capacity(100);
            mm.allocate("A", 85).unwrap();
        });

        let bytes = captured.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_high_pressure_is_not_a_warning() {
        assert!(pressure_log(tracing::Level::WARN).is_empty());
        assert!(pressure_log(tracing::Level::INFO).contains("Memory pressure after allocation"));
    }

    #[test]
    fn test_release_does_not_coalesce() {
        let mut mm = FirstFitManager::with_capacity(30);
        mm.allocate("A", 10).unwrap();
        mm.allocate("B", 10).unwrap();
        mm.release("A");
        mm.release("B");
        assert_eq!(mm.block_count(), 3);
        assert_eq!(mm.stats().largest_free_block, 10);
    }
}

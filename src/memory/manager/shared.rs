/*!
 * Shared Memory Manager
 * Mutex-guarded handle for embedding the allocator in concurrent code
 */

use super::super::traits::{Allocator, MemoryInfo};
use super::super::types::{
    AllocationOutcome, BlockSnapshot, MemoryResult, MemoryStats, ReleaseOutcome,
};
use super::FirstFitManager;
use crate::core::types::Size;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`FirstFitManager`]
///
/// Every mutating operation reads and rewrites the block list, so each one
/// runs entirely under the lock. Clones share the same partition.
#[derive(Debug, Clone)]
pub struct SharedMemoryManager {
    inner: Arc<Mutex<FirstFitManager>>,
}

impl SharedMemoryManager {
    pub fn new(manager: FirstFitManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn with_capacity(total: Size) -> Self {
        Self::new(FirstFitManager::with_capacity(total))
    }

    /// Run `f` with exclusive access to the underlying manager
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut FirstFitManager) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl Allocator for SharedMemoryManager {
    fn reset(&mut self, total: Size) {
        self.inner.lock().reset(total)
    }

    fn allocate(&mut self, owner: &str, size: Size) -> MemoryResult<AllocationOutcome> {
        self.inner.lock().allocate(owner, size)
    }

    fn release(&mut self, owner: &str) -> ReleaseOutcome {
        self.inner.lock().release(owner)
    }

    fn coalesce(&mut self) -> usize {
        self.inner.lock().coalesce()
    }
}

impl MemoryInfo for SharedMemoryManager {
    fn stats(&self) -> MemoryStats {
        self.inner.lock().stats()
    }

    fn snapshot(&self) -> Vec<BlockSnapshot> {
        self.inner.lock().snapshot()
    }
}

/*!
 * Free Block Coalescing
 * Explicit merging of adjacent free blocks
 */

use super::FirstFitManager;
use tracing::debug;

impl FirstFitManager {
    /// Merge every run of adjacent free blocks into a single free block
    ///
    /// Never triggered by `allocate` or `release`. Each merge keeps the
    /// first block and absorbs its successor, then the scan resumes at the
    /// merged block so a run of any length collapses in one pass.
    /// Returns the number of merges performed.
    pub fn coalesce(&mut self) -> usize {
        let before = self.blocks.len();
        let mut merged = 0;
        let mut cursor = self.blocks.head();

        while let Some(id) = cursor {
            if self.blocks.get(id).is_free() {
                while let Some(next) = self.blocks.next(id) {
                    if !self.blocks.get(next).is_free() {
                        break;
                    }
                    let absorbed = self.blocks.remove(next);
                    self.blocks.get_mut(id).length += absorbed.length;
                    merged += 1;
                }
            }
            cursor = self.blocks.next(id);
        }

        if merged > 0 {
            debug!(
                merged,
                before,
                after = self.blocks.len(),
                "Coalesced adjacent free blocks"
            );
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_merges_runs() {
        let mut mm = FirstFitManager::with_capacity(40);
        for owner in ["A", "B", "C", "D"] {
            mm.allocate(owner, 10).unwrap();
        }
        mm.release("A");
        mm.release("B");
        mm.release("C");

        assert_eq!(mm.coalesce(), 2);
        let blocks: Vec<_> = mm.blocks().map(|b| (b.offset, b.length, b.is_free())).collect();
        assert_eq!(blocks, vec![(0, 30, true), (30, 10, false)]);
        assert_eq!(mm.coalesce(), 0);
    }

    #[test]
    fn test_coalesce_keeps_allocated_neighbours_apart() {
        let mut mm = FirstFitManager::with_capacity(30);
        mm.allocate("A", 10).unwrap();
        mm.allocate("B", 10).unwrap();
        mm.release("A");

        assert_eq!(mm.coalesce(), 0);
        assert_eq!(mm.block_count(), 3);
    }

    #[test]
    fn test_coalesce_empty_space() {
        let mut mm = FirstFitManager::with_capacity(0);
        assert_eq!(mm.coalesce(), 0);
    }
}

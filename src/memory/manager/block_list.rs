/*!
 * Block List
 * Arena-backed, address-ordered list of memory blocks
 */

use super::super::types::MemoryBlock;

/// Stable handle to a block slot in the arena
///
/// Handles stay valid until the block they name is removed. A removed
/// slot is recycled by the next insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

#[derive(Debug)]
struct Slot {
    block: MemoryBlock,
    prev: Option<BlockId>,
    next: Option<BlockId>,
}

/// Doubly-linked list of blocks whose links are arena indices
///
/// Ordering is kept explicitly through `prev`/`next`, so splitting a block
/// or merging two neighbours never shifts other entries.
#[derive(Debug, Default)]
pub struct BlockList {
    slots: Vec<Option<Slot>>,
    vacant: Vec<usize>,
    head: Option<BlockId>,
    tail: Option<BlockId>,
    len: usize,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn head(&self) -> Option<BlockId> {
        self.head
    }

    pub fn next(&self, id: BlockId) -> Option<BlockId> {
        self.slot(id).next
    }

    pub fn prev(&self, id: BlockId) -> Option<BlockId> {
        self.slot(id).prev
    }

    pub fn get(&self, id: BlockId) -> &MemoryBlock {
        &self.slot(id).block
    }

    pub fn get_mut(&mut self, id: BlockId) -> &mut MemoryBlock {
        &mut self.slot_mut(id).block
    }

    /// Append a block after the current tail
    pub fn push_back(&mut self, block: MemoryBlock) -> BlockId {
        let id = self.store(Slot {
            block,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.slot_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Link a new block directly after `anchor`
    pub fn insert_after(&mut self, anchor: BlockId, block: MemoryBlock) -> BlockId {
        let next = self.slot(anchor).next;
        let id = self.store(Slot {
            block,
            prev: Some(anchor),
            next,
        });
        self.slot_mut(anchor).next = Some(id);
        match next {
            Some(next) => self.slot_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    /// Unlink a block and return it; its slot is recycled
    pub fn remove(&mut self, id: BlockId) -> MemoryBlock {
        let slot = match self.slots[id.0].take() {
            Some(slot) => slot,
            None => panic!("block handle {:?} refers to a removed block", id),
        };
        match slot.prev {
            Some(prev) => self.slot_mut(prev).next = slot.next,
            None => self.head = slot.next,
        }
        match slot.next {
            Some(next) => self.slot_mut(next).prev = slot.prev,
            None => self.tail = slot.prev,
        }
        self.vacant.push(id.0);
        self.len -= 1;
        slot.block
    }

    /// Blocks in address order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// First block (in order) satisfying `predicate`
    pub fn find(&self, mut predicate: impl FnMut(&MemoryBlock) -> bool) -> Option<BlockId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if predicate(self.get(id)) {
                return Some(id);
            }
            cursor = self.next(id);
        }
        None
    }

    fn store(&mut self, slot: Slot) -> BlockId {
        self.len += 1;
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                BlockId(index)
            }
            None => {
                self.slots.push(Some(slot));
                BlockId(self.slots.len() - 1)
            }
        }
    }

    fn slot(&self, id: BlockId) -> &Slot {
        match self.slots.get(id.0) {
            Some(Some(slot)) => slot,
            _ => panic!("block handle {:?} refers to a removed block", id),
        }
    }

    fn slot_mut(&mut self, id: BlockId) -> &mut Slot {
        match self.slots.get_mut(id.0) {
            Some(Some(slot)) => slot,
            _ => panic!("block handle {:?} refers to a removed block", id),
        }
    }
}

/// Address-ordered iterator over a [`BlockList`]
pub struct Iter<'a> {
    list: &'a BlockList,
    cursor: Option<BlockId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MemoryBlock;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.list.next(id);
        Some(self.list.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(list: &BlockList) -> Vec<usize> {
        list.iter().map(|b| b.offset).collect()
    }

    #[test]
    fn test_push_back_keeps_order() {
        let mut list = BlockList::new();
        list.push_back(MemoryBlock::free(0, 10));
        list.push_back(MemoryBlock::free(10, 10));
        assert_eq!(list.len(), 2);
        assert_eq!(offsets(&list), vec![0, 10]);
    }

    #[test]
    fn test_insert_after_middle_and_tail() {
        let mut list = BlockList::new();
        let first = list.push_back(MemoryBlock::free(0, 5));
        let last = list.push_back(MemoryBlock::free(10, 10));
        list.insert_after(first, MemoryBlock::free(5, 5));
        let tail = list.insert_after(last, MemoryBlock::free(20, 1));

        assert_eq!(offsets(&list), vec![0, 5, 10, 20]);
        assert_eq!(list.next(tail), None);
        assert_eq!(list.prev(tail), Some(last));
    }

    #[test]
    fn test_remove_relinks_and_recycles_slot() {
        let mut list = BlockList::new();
        let a = list.push_back(MemoryBlock::free(0, 1));
        let b = list.push_back(MemoryBlock::free(1, 1));
        let c = list.push_back(MemoryBlock::free(2, 1));

        let removed = list.remove(b);
        assert_eq!(removed.offset, 1);
        assert_eq!(list.next(a), Some(c));
        assert_eq!(list.prev(c), Some(a));

        let reused = list.insert_after(a, MemoryBlock::free(1, 1));
        assert_eq!(reused, b);
        assert_eq!(offsets(&list), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list = BlockList::new();
        let a = list.push_back(MemoryBlock::free(0, 1));
        let b = list.push_back(MemoryBlock::free(1, 1));
        list.remove(a);
        assert_eq!(list.head(), Some(b));
        list.remove(b);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut list = BlockList::new();
        list.push_back(MemoryBlock::free(0, 4));
        let big = list.push_back(MemoryBlock::free(4, 8));
        list.push_back(MemoryBlock::free(12, 8));
        assert_eq!(list.find(|b| b.length >= 8), Some(big));
        assert_eq!(list.find(|b| b.length > 8), None);
    }
}

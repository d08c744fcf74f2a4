//! The segregated free-list table: `BFL_SIZE` doubly-linked lists, one per
//! size class, indexed by `lg_down(size)`.
//!
//! Insertion and removal are O(1) given a block pointer and its current
//! size. Order within a bin is LIFO — no stronger ordering is guaranteed, so
//! the most recently freed block in a class is always the first one
//! `allocate` sees.

use crate::block::BlockPtr;
use crate::constants::{BFL_SIZE, MIN_SPLIT_SIZE};
use crate::size_class::lg_down;

/// How a free candidate block compares to the size a request needs.
#[derive(Debug, PartialEq, Eq)]
pub enum Fit {
  /// Smaller than what's needed; not usable as-is.
  NotAvailable,
  /// Large enough that the tail, once carved off, still meets
  /// `MIN_SPLIT_SIZE` — split it.
  SplitAble,
  /// Large enough to serve the request, but too small to profitably split.
  SplitUnable,
}

/// Classifies a `candidate_size`-byte free block against the `size` bytes a
/// request needs. Shared by every call site that might serve a request from
/// an existing block instead of growing the heap.
pub fn classify(candidate_size: usize, size: usize) -> Fit {
  if candidate_size < size {
    Fit::NotAvailable
  } else if candidate_size >= size + MIN_SPLIT_SIZE {
    Fit::SplitAble
  } else {
    Fit::SplitUnable
  }
}

/// Carves `block` into a `left_size`-byte allocated left half and a free
/// right remainder, which is inserted into `bins`. `block` must not be in
/// `bins` when this is called (the caller removes it first, or it was never
/// binned — e.g. it was already allocated, as when reallocate shrinks one).
///
/// # Safety
///
/// `block` must be a live block at least `left_size + MIN_SPLIT_SIZE` bytes
/// long.
pub unsafe fn carve(bins: &mut BinTable, block: BlockPtr, left_size: usize) -> BlockPtr {
  unsafe {
    debug_assert!(block.size() >= left_size + MIN_SPLIT_SIZE);

    let right_size = block.size() - left_size;
    let right_addr = block.addr() + left_size;

    block.set_size(left_size);
    block.set_free(false);
    block.write_footer();

    let right = BlockPtr::init(right_addr, right_size, true);
    bins.insert(right);

    block
  }
}

pub struct BinTable {
  heads: [Option<BlockPtr>; BFL_SIZE],
}

impl BinTable {
  pub fn new() -> Self {
    Self { heads: [None; BFL_SIZE] }
  }

  fn class_of(size: usize) -> usize {
    let k = lg_down(size) as usize;
    debug_assert!(k < BFL_SIZE, "block size {size} has no bin");
    debug_assert!(k >= crate::constants::MIN_LG as usize, "block size {size} below the smallest occupied bin");
    k
  }

  /// Pushes `block` onto the head of its size class. Precondition: `block`
  /// is free and its size is already set.
  pub unsafe fn insert(&mut self, block: BlockPtr) {
    unsafe {
      debug_assert!(block.is_free());

      let k = Self::class_of(block.size());
      let old_head = self.heads[k];

      block.set_next(old_head);
      block.set_prev(None);

      if let Some(head) = old_head {
        head.set_prev(Some(block));
      }

      self.heads[k] = Some(block);
    }
  }

  /// Unlinks `block` from its bin and clears its free bit. A no-op if
  /// `block` is not currently free, which lets coalescing call this
  /// idempotently on blocks it isn't sure are binned.
  pub unsafe fn remove(&mut self, block: BlockPtr) {
    unsafe {
      if !block.is_free() {
        return;
      }

      let k = Self::class_of(block.size());
      let prev = block.prev();
      let next = block.next();

      match prev {
        Some(p) => p.set_next(next),
        None => self.heads[k] = next,
      }

      if let Some(n) = next {
        n.set_prev(prev);
      }

      block.set_free(false);
      block.set_next(None);
      block.set_prev(None);
    }
  }

  /// First block in bin `k`, or `None` if the bin is empty.
  pub fn head(&self, k: usize) -> Option<BlockPtr> {
    self.heads[k]
  }

  /// Iterates the blocks currently in bin `k`, head to tail. The table must
  /// not be mutated while the iterator is alive.
  pub unsafe fn iter(&self, k: usize) -> BinIter {
    BinIter { current: self.heads[k] }
  }
}

pub struct BinIter {
  current: Option<BlockPtr>,
}

impl Iterator for BinIter {
  type Item = BlockPtr;

  fn next(&mut self) -> Option<BlockPtr> {
    let current = self.current?;
    self.current = unsafe { current.next() };
    Some(current)
  }
}

//! On-heap block layout and boundary tags.
//!
//! Every block, free or allocated, starts with a left header word (size with
//! the free bit packed into its LSB) and ends with a right footer word (a
//! back-link to that same header). When a block is free, its free-list
//! `prev`/`next` links are stored inside its own payload — the first two
//! words past the header — rather than in extra header bytes, which keeps
//! `TOTAL_HEADER_SIZE` a fixed compile-time constant regardless of whether
//! the block is currently free or allocated.
//!
//! `BlockPtr` is the narrow `unsafe` boundary the rest of the crate goes
//! through: it is `Copy`, carries no lifetime, and every accessor requires
//! the caller to uphold "this address names a live block on the heap this
//! arena owns".

use crate::constants::{FOOTER_SIZE, HEADER_SIZE};

const FREE_BIT: usize = 1;

/// A pointer to the left header of a block on the heap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockPtr(usize);

impl BlockPtr {
  /// Wraps a raw heap address as a block pointer. The caller must ensure
  /// `addr` is the address of a live block's left header.
  pub unsafe fn at(addr: usize) -> Self {
    debug_assert_ne!(addr, 0);
    BlockPtr(addr)
  }

  /// Initializes a fresh block of `size` bytes at `addr` and writes its
  /// footer. `size` must already be word-aligned and even.
  pub unsafe fn init(addr: usize, size: usize, free: bool) -> Self {
    unsafe {
      let block = Self::at(addr);
      block.header_word().write(size | (free as usize));
      block.write_footer();
      block
    }
  }

  /// Recovers the block owning a payload pointer previously handed to a
  /// caller by `allocate`/`reallocate`.
  pub unsafe fn from_payload(payload: usize) -> Self {
    unsafe { Self::at(payload - HEADER_SIZE) }
  }

  pub fn addr(self) -> usize {
    self.0
  }

  /// Address of the first byte past the header — what callers receive.
  pub fn payload_addr(self) -> usize {
    self.0 + HEADER_SIZE
  }

  unsafe fn header_word(self) -> *mut usize {
    self.0 as *mut usize
  }

  pub unsafe fn size(self) -> usize {
    unsafe { self.header_word().read() & !FREE_BIT }
  }

  pub unsafe fn is_free(self) -> bool {
    unsafe { self.header_word().read() & FREE_BIT != 0 }
  }

  /// Overwrites the size, preserving the current free bit.
  pub unsafe fn set_size(self, size: usize) {
    debug_assert_eq!(size & FREE_BIT, 0, "block size must be even");
    unsafe {
      let free_bit = self.header_word().read() & FREE_BIT;
      self.header_word().write(size | free_bit);
    }
  }

  /// Overwrites the free bit, preserving the current size.
  pub unsafe fn set_free(self, free: bool) {
    unsafe {
      let size = self.header_word().read() & !FREE_BIT;
      self.header_word().write(size | (free as usize));
    }
  }

  unsafe fn footer_addr(self) -> usize {
    unsafe { self.0 + self.size() - FOOTER_SIZE }
  }

  unsafe fn footer_word(self) -> *mut usize {
    unsafe { self.footer_addr() as *mut usize }
  }

  /// Rewrites this block's footer to point back at its own header. Must be
  /// called whenever `size` changes or the block's address shifts.
  pub unsafe fn write_footer(self) {
    unsafe { self.footer_word().write(self.0) };
  }

  /// Reads the back-link stored in this block's footer (I3: should equal
  /// `self.addr()` for a well-formed block).
  pub unsafe fn footer_left(self) -> usize {
    unsafe { self.footer_word().read() }
  }

  fn link_slot(self, index: usize) -> *mut usize {
    (self.payload_addr() + index * HEADER_SIZE) as *mut usize
  }

  /// Free-list successor. Only meaningful while the block is free.
  pub unsafe fn next(self) -> Option<BlockPtr> {
    match unsafe { self.link_slot(0).read() } {
      0 => None,
      addr => Some(BlockPtr(addr)),
    }
  }

  pub unsafe fn set_next(self, next: Option<BlockPtr>) {
    unsafe { self.link_slot(0).write(next.map_or(0, BlockPtr::addr)) };
  }

  /// Free-list predecessor. Only meaningful while the block is free.
  pub unsafe fn prev(self) -> Option<BlockPtr> {
    match unsafe { self.link_slot(1).read() } {
      0 => None,
      addr => Some(BlockPtr(addr)),
    }
  }

  pub unsafe fn set_prev(self, prev: Option<BlockPtr>) {
    unsafe { self.link_slot(1).write(prev.map_or(0, BlockPtr::addr)) };
  }

  /// The physically-next block, if `self` is not the last block on the heap.
  pub unsafe fn physical_next(self, heap_hi: usize) -> Option<BlockPtr> {
    let next_addr = self.0 + unsafe { self.size() };
    if next_addr < heap_hi {
      Some(BlockPtr(next_addr))
    } else {
      None
    }
  }

  /// The physically-previous block, if `self` is not the first block on the
  /// heap. Follows the footer immediately preceding `self`.
  pub unsafe fn physical_prev(self, heap_lo: usize) -> Option<BlockPtr> {
    if self.0 <= heap_lo {
      return None;
    }

    let prev_footer = (self.0 - FOOTER_SIZE) as *mut usize;
    Some(BlockPtr(unsafe { prev_footer.read() }))
  }

  /// `true` if this block's footer sits exactly at `hi - FOOTER_SIZE`, i.e.
  /// it is the last block on a heap whose high bound is `hi`.
  pub unsafe fn is_heap_tail(self, heap_hi: usize) -> bool {
    unsafe { self.footer_addr() == heap_hi - FOOTER_SIZE }
  }
}

//! Grows the heap to satisfy a request that no bin could serve.
//!
//! Before paying for a fresh `heap_extend` call, checks whether the
//! physically-last block on the heap is free; if so it is absorbed into the
//! new allocation instead of left behind as an orphaned free block. This is
//! what keeps `reallocate`'s heap-tail fast path from leaking a pre-existing
//! free neighbor on every grow-in-place.

use log::trace;

use crate::align_to;
use crate::bins::{self, BinTable, Fit};
use crate::block::BlockPtr;
use crate::constants::{FOOTER_SIZE, WORD_ALIGN};
use crate::error::OomError;
use crate::heap::Heap;

/// Extends the heap to host a new block of exactly `size` bytes, returning
/// it allocated (not free, not in any bin).
///
/// # Safety
///
/// `heap` and `bins` must describe a well-formed heap: every live block has
/// a correct size/footer pair, free blocks are exactly those linked into
/// `bins`, and no two physically-adjacent blocks are both free.
pub unsafe fn extend_for<H: Heap>(
  heap: &mut H,
  bins: &mut BinTable,
  size: usize,
) -> Result<BlockPtr, OomError> {
  let hi = heap.heap_hi();
  let lo = heap.heap_lo();

  if hi > lo + FOOTER_SIZE {
    let tail_left = unsafe { ((hi - FOOTER_SIZE) as *const usize).read() };
    let candidate = unsafe { BlockPtr::at(tail_left) };

    if unsafe { candidate.is_free() && candidate.is_heap_tail(hi) } {
      unsafe { bins.remove(candidate) };
      let candidate_size = unsafe { candidate.size() };

      return match bins::classify(candidate_size, size) {
        Fit::SplitAble => {
          trace!("heap extend: serving {size} bytes by splitting free tail block at {:#x}", candidate.addr());
          Ok(unsafe { bins::carve(bins, candidate, size) })
        }

        Fit::SplitUnable => {
          trace!("heap extend: serving {size} bytes directly from free tail block at {:#x}", candidate.addr());
          unsafe {
            candidate.set_free(false);
            candidate.write_footer();
          }
          Ok(candidate)
        }

        Fit::NotAvailable => {
          trace!("heap extend: absorbing free tail block at {:#x}", candidate.addr());

          let delta = size - candidate_size;
          heap.heap_extend(delta)?;

          Ok(unsafe { BlockPtr::init(candidate.addr(), size, false) })
        }
      };
    }
  }

  let padding = align_to!(hi, WORD_ALIGN) - hi;
  let delta = padding + size;

  trace!("heap extend: growing by {delta} bytes ({padding} padding + {size} requested)");
  heap.heap_extend(delta)?;

  let addr = heap.heap_hi() - size;
  Ok(unsafe { BlockPtr::init(addr, size, false) })
}

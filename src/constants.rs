//! Fixed size-class and block-layout constants shared across the crate.

use std::mem;

use crate::size_class::lg_down;

/// Required alignment for every user-visible pointer.
pub const WORD_ALIGN: usize = 8;

/// Minimum total size of any block, including its headers. Also the
/// alignment-rounding floor for `allocate` requests.
pub const MIN_BLOCK_SIZE: usize = 64;

/// A free block is only split if the tail half would be at least this large.
pub const MIN_SPLIT_SIZE: usize = 2 * MIN_BLOCK_SIZE;

/// `lg_down(MIN_BLOCK_SIZE)` — the smallest bin index any block ever occupies.
pub const MIN_LG: u32 = 6;

/// Number of bins in the table (indices `0..BFL_SIZE`).
pub const BFL_SIZE: usize = 26;

/// Sanity ceiling on block size. Requests that would round up to at or past
/// this are rejected as `OomError` rather than handed to the heap backend.
pub const INSANITY_SIZE: usize = 1 << 25;

/// Size of the left header word (size-and-free bits).
pub const HEADER_SIZE: usize = mem::size_of::<usize>();

/// Size of the right footer word (back-link to the left header).
pub const FOOTER_SIZE: usize = mem::size_of::<usize>();

/// Combined header and footer overhead per block. Compile-time constant:
/// free-list `prev`/`next` links live inside a free block's payload rather
/// than in extra header bytes, so this never varies with free/allocated
/// state.
pub const TOTAL_HEADER_SIZE: usize = HEADER_SIZE + FOOTER_SIZE;

const _: () = assert!(MIN_BLOCK_SIZE % 2 == 0, "MIN_BLOCK_SIZE must be even to host the free bit");
const _: () = assert!(MIN_BLOCK_SIZE >= TOTAL_HEADER_SIZE + 2 * HEADER_SIZE, "MIN_BLOCK_SIZE must fit headers plus both free-list links");
const _: () = assert!(MIN_LG == lg_down(MIN_BLOCK_SIZE), "MIN_LG must track MIN_BLOCK_SIZE's bin index");

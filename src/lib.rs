//! # bfl-alloc - a segregated free-list heap allocator
//!
//! This crate provides a **binned free-list allocator**: a segregated,
//! boundary-tagged free-list strategy with physical-neighbor coalescing and
//! a heap-tail fast path for growing allocations in place. It manages memory
//! on top of an abstract `Heap` backend rather than calling `sbrk` directly,
//! so the same allocator core runs against the real process break or a
//! deterministic in-memory heap for testing.
//!
//! ## Overview
//!
//! ```text
//!   Segregated free list:
//!
//!   bin[0]  (<64B)   -> (empty)
//!   bin[1]  (<128B)  -> [free block] -> [free block] -> null
//!   bin[2]  (<256B)  -> [free block] -> null
//!     ...
//!   bin[25] (<32MiB) -> (empty)
//!
//!   Each block carries a boundary tag: a left header (size + free bit) and
//!   a right footer (back-link to the header), so any two physically
//!   adjacent blocks can be merged in O(1) without walking a list.
//!
//!   ┌────────┬──────────────────────────────┬────────┐
//!   │ header │           payload            │ footer │
//!   └────────┴──────────────────────────────┴────────┘
//! ```
//!
//! ## Crate structure
//!
//! ```text
//!   bfl_alloc
//!   ├── align       - alignment macros (align!, align_to!)
//!   ├── size_class  - lg_up/lg_down bin-index helpers
//!   ├── constants   - fixed block-layout and size-class constants
//!   ├── error       - OomError, the allocator's single failure mode
//!   ├── heap        - Heap trait, SbrkHeap, VecHeap
//!   ├── block       - BlockPtr: the boundary-tag accessor layer
//!   ├── bins        - BinTable: the segregated free-list table
//!   ├── extend      - heap-growth logic shared by allocate and reallocate
//!   └── arena       - Arena<H>: allocate / free / reallocate
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bfl_alloc::Arena;
//!
//! let mut arena = Arena::new();
//!
//! let ptr = arena.allocate(128);
//! assert!(!ptr.is_null());
//!
//! let ptr = arena.reallocate(ptr, 512);
//! assert!(!ptr.is_null());
//!
//! arena.free(ptr);
//! ```
//!
//! ## Safety
//!
//! `Arena`'s public methods (`allocate`, `free`, `reallocate`) are safe to
//! call, but every byte they hand back or accept is governed by the same
//! contract as the system allocator: a returned pointer is valid until
//! freed, must not be freed twice, and must not be read or written past the
//! size it was allocated (or reallocated) for. The `block` and `bins`
//! modules hold the actual `unsafe` boundary-tag manipulation and are not
//! part of the public API.

pub mod align;
mod arena;
mod bins;
mod block;
mod constants;
mod error;
mod extend;
mod heap;
mod size_class;

pub use arena::Arena;
pub use error::OomError;
pub use heap::{Heap, SbrkHeap, VecHeap};

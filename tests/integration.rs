//! Whole-arena black-box scenarios, exercising only the public `Arena` API
//! (no access to the bin table or block internals — see the `#[cfg(test)]`
//! module inside `src/arena.rs` for white-box checks of those).

use std::collections::BTreeMap;

use bfl_alloc::{Arena, VecHeap};

fn fresh(cap: usize) -> Arena<VecHeap> {
  Arena::new_with(VecHeap::with_capacity(cap))
}

#[test]
fn allocations_are_word_aligned() {
  let mut arena = fresh(1 << 16);

  for n in [1, 7, 8, 9, 63, 64, 65, 1000, 4095] {
    let p = arena.allocate(n);
    assert!(!p.is_null());
    assert_eq!(p as usize % 8, 0, "allocate({n}) returned misaligned pointer");
  }
}

#[test]
fn payload_is_fully_writable_up_to_requested_size() {
  let mut arena = fresh(1 << 16);

  for n in [1usize, 40, 1000, 8192] {
    let p = arena.allocate(n);
    assert!(!p.is_null());

    unsafe {
      std::ptr::write_bytes(p, 0xAB, n);
      for i in 0..n {
        assert_eq!(*p.add(i), 0xAB);
      }
    }

    arena.free(p);
  }
}

#[test]
fn live_allocations_never_overlap() {
  let mut arena = fresh(1 << 20);
  let mut live: BTreeMap<usize, usize> = BTreeMap::new();

  let sizes = [16, 40, 100, 250, 9, 4096, 33, 777];
  for (i, &size) in sizes.iter().enumerate() {
    let p = arena.allocate(size);
    assert!(!p.is_null());
    let addr = p as usize;

    unsafe { std::ptr::write_bytes(p, (i + 1) as u8, size) };
    live.insert(addr, size);
  }

  let ranges: Vec<(usize, usize)> = live.iter().map(|(&a, &s)| (a, a + s)).collect();
  for w in ranges.windows(2) {
    let (_, end_a) = w[0];
    let (start_b, _) = w[1];
    assert!(end_a <= start_b, "live allocations overlap: {:?}", w);
  }
}

#[test]
fn reallocate_preserves_prefix_on_grow() {
  let mut arena = fresh(1 << 16);

  let p = arena.allocate(32);
  unsafe { std::ptr::write_bytes(p, 0x42, 32) };

  let q = arena.reallocate(p, 2000);
  assert!(!q.is_null());

  unsafe {
    for i in 0..32 {
      assert_eq!(*q.add(i), 0x42);
    }
  }
}

#[test]
fn reallocate_preserves_prefix_on_shrink() {
  let mut arena = fresh(1 << 16);

  let p = arena.allocate(2000);
  unsafe { std::ptr::write_bytes(p, 0x99, 2000) };

  let q = arena.reallocate(p, 16);
  assert!(!q.is_null());

  unsafe {
    for i in 0..16 {
      assert_eq!(*q.add(i), 0x99);
    }
  }
}

#[test]
fn null_and_zero_edge_cases_never_crash() {
  let mut arena = fresh(4096);

  assert!(arena.allocate(0).is_null());

  arena.free(std::ptr::null_mut());

  let p = arena.reallocate(std::ptr::null_mut(), 0);
  assert!(p.is_null());

  let q = arena.allocate(40);
  assert!(arena.reallocate(q, 0).is_null());
}

#[test]
fn heap_grows_past_capacity_returns_null_instead_of_panicking() {
  let mut arena = fresh(256);

  let mut last = std::ptr::null_mut();
  for _ in 0..100 {
    let p = arena.allocate(64);
    if p.is_null() {
      return;
    }
    last = p;
  }

  panic!("expected an allocation to eventually fail in a 256-byte heap, last = {last:?}");
}

#[test]
fn free_then_reallocate_same_size_is_likely_to_be_reused() {
  let mut arena = fresh(4096);

  let p = arena.allocate(40);
  arena.free(p);
  let q = arena.allocate(40);

  assert_eq!(p, q);
}

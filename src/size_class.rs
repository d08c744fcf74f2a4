//! Integer base-2 logarithm helpers used to map byte sizes to bin indices.
//!
//! The original allocator this crate is modeled on (`mymalloc/bfl.c`) computes
//! `lg2` with a De Bruijn bit-hack table; on a target with a hardware
//! count-leading-zeros instruction `usize::leading_zeros` is the same
//! constant-time primitive, so we use it directly instead of the table.

/// Smallest non-negative `k` such that `2^k >= n`. Returns `0` for `n == 0`.
pub const fn lg_up(n: usize) -> u32 {
  if n <= 1 {
    return 0;
  }

  usize::BITS - (n - 1).leading_zeros()
}

/// Largest `k` such that `2^k <= n`. Returns `0` for `n == 0`.
pub const fn lg_down(n: usize) -> u32 {
  if n <= 1 {
    return 0;
  }

  usize::BITS - 1 - n.leading_zeros()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lg_up_zero_and_one() {
    assert_eq!(lg_up(0), 0);
    assert_eq!(lg_up(1), 0);
  }

  #[test]
  fn lg_up_exact_powers() {
    for k in 1..32u32 {
      assert_eq!(lg_up(1 << k), k);
    }
  }

  #[test]
  fn lg_up_rounds_up() {
    assert_eq!(lg_up(2), 1);
    assert_eq!(lg_up(3), 2);
    assert_eq!(lg_up(5), 3);
    assert_eq!(lg_up(63), 6);
    assert_eq!(lg_up(65), 7);
  }

  #[test]
  fn lg_down_zero_and_one() {
    assert_eq!(lg_down(0), 0);
    assert_eq!(lg_down(1), 0);
  }

  #[test]
  fn lg_down_exact_powers() {
    for k in 1..32u32 {
      assert_eq!(lg_down(1 << k), k);
    }
  }

  #[test]
  fn lg_down_rounds_down() {
    assert_eq!(lg_down(3), 1);
    assert_eq!(lg_down(5), 2);
    assert_eq!(lg_down(63), 5);
    assert_eq!(lg_down(65), 6);
  }

  #[test]
  fn lg_down_never_exceeds_lg_up() {
    for n in 1..2000usize {
      assert!(lg_down(n) <= lg_up(n));
    }
  }
}

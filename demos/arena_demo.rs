use std::ptr;

use bfl_alloc::Arena;

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap`, `htop`,
/// `gdb`, or just visually track how allocations change the program break.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::Read::bytes(std::io::stdin()).next();
}

/// Prints the current program break using `sbrk(0)`.
unsafe fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { libc::sbrk(0) },
  );
}

fn main() {
  env_logger::init();

  let mut arena = Arena::new();

  unsafe {
    print_program_break("start");
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 1) Allocate 32 bytes and write into them.
    // --------------------------------------------------------------------
    let first = arena.allocate(32);
    println!("\n[1] Allocated 32 bytes at {:?}", first);
    (first as *mut u64).write(0xDEADBEEF);
    println!("[1] Value written = 0x{:X}", (first as *mut u64).read());

    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 2) Allocate 12 bytes, to exercise the bin rounding.
    // --------------------------------------------------------------------
    let second = arena.allocate(12);
    println!("\n[2] Allocated 12 bytes at {:?}", second);
    ptr::write_bytes(second, 0xAB, 12);

    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 3) Free the first block and immediately re-request a similar size —
    //    watch it come back from the same bin instead of growing the heap.
    // --------------------------------------------------------------------
    arena.free(first);
    println!("\n[3] Freed first block at {:?}", first);

    let third = arena.allocate(24);
    println!(
      "[3] Re-requested 24 bytes -> {:?} ({})",
      third,
      if third == first {
        "reused the freed block"
      } else {
        "allocated elsewhere"
      }
    );

    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 4) Grow `second` well past its current capacity and watch the heap
    //    extend (or the heap-tail fast path kick in, if second is last).
    // --------------------------------------------------------------------
    print_program_break("before reallocate");
    let second = arena.reallocate(second, 64 * 1024);
    println!("\n[4] Reallocated second block to 64 KiB -> {:?}", second);
    print_program_break("after reallocate");

    block_until_enter_pressed();

    arena.free(second);
    arena.free(third);
    println!("\n[5] End of demo. Process will exit and the OS will reclaim all memory.");
  }
}

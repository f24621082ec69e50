//! 32-bit arithmetic exports used by the wasm smoke module.
//!
//! All operations wrap on overflow, matching two's-complement `i32` targets.

/// Wrapping 32-bit addition.
#[must_use]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit multiplication.
#[must_use]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Iterative Fibonacci with wrapping 32-bit state.
///
/// `n <= 1` returns `n`.
#[must_use]
pub const fn fibonacci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    let (mut a, mut b) = (0i32, 1i32);
    let mut i = 2;
    while i <= n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
        i += 1;
    }
    b
}

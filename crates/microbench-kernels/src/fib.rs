//! Naive recursive Fibonacci.

/// Argument used by the baseline program.
pub const BASELINE_N: i64 = 30;

/// Argument used by the heavy program.
pub const HEAVY_N: i64 = 38;

/// Computes the `n`th Fibonacci number by double recursion.
///
/// `n <= 1` returns `n` unchanged, so negative arguments return themselves.
/// The call tree grows as `O(phi^n)`; that cost is the point of the kernel.
#[must_use]
pub fn fib(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

//! Prints the recursive Fibonacci number for n = 30.

use microbench_kernels::fib::{BASELINE_N, fib};

fn main() {
    println!("{}", fib(BASELINE_N));
}

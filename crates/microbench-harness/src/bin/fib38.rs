//! Prints the recursive Fibonacci number for n = 38.

use microbench_kernels::fib::{HEAVY_N, fib};

fn main() {
    println!("{}", fib(HEAVY_N));
}

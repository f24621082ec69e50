//! Prints the sum of every integer in 0..1_000_000.

use microbench_kernels::sum_range::{RANGE_END, sum_range};

fn main() {
    println!("{}", sum_range(RANGE_END));
}

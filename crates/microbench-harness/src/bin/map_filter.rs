//! Prints the sum of squares of the first 10 000 odd integers in 0..100_000.

use microbench_kernels::map_filter::{SCAN_LIMIT, TAKE, odd_square_sum};

fn main() {
    println!("{}", odd_square_sum(SCAN_LIMIT, TAKE));
}

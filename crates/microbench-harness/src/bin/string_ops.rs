//! Prints the byte length of 10 000 upper-cased `item-<i>` tokens joined together.

use microbench_kernels::string_ops::{TOKEN_COUNT, concat_upper_len};

fn main() {
    println!("{}", concat_upper_len(TOKEN_COUNT));
}

//! Builds 10 000 `{id, value, doubled}` records and prints how many were built.

use microbench_kernels::data_transform::{ITEM_COUNT, transform_count};

fn main() {
    println!("{}", transform_count(ITEM_COUNT));
}

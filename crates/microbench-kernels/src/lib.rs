//! # microbench-kernels
//!
//! Fixed-size micro-benchmark kernels.
//!
//! Each module holds one computation together with the constants its
//! benchmark program runs with. Kernels take no input beyond their bound,
//! allocate at most once, and have no error paths. The [`catalog`] module
//! names every kernel and records the literal output its program prints.

#![deny(unsafe_code)]

pub mod catalog;
pub mod data_transform;
pub mod fib;
pub mod map_filter;
pub mod string_ops;
pub mod sum_range;
pub mod wasm_math;

pub use catalog::{KernelFamily, KernelId, KernelSpec};

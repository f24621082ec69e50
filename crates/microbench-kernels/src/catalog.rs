//! Kernel registry.
//!
//! Maps each benchmark program to its kernel, its fixed constants and the
//! literal line it prints.

use serde::{Deserialize, Serialize};

use crate::{data_transform, fib, map_filter, string_ops, sum_range, wasm_math};

/// Operands passed to [`wasm_math::add`].
pub const WASM_ADD_ARGS: (i32, i32) = (2, 3);
/// Operands passed to [`wasm_math::multiply`].
pub const WASM_MULTIPLY_ARGS: (i32, i32) = (6, 7);
/// Argument passed to [`wasm_math::fibonacci`].
pub const WASM_FIBONACCI_N: i32 = 30;

/// Identifies one benchmark program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelId {
    Fib30,
    Fib38,
    SumRange,
    StringOps,
    DataTransform,
    MapFilter,
    WasmAdd,
    WasmMultiply,
    WasmFibonacci,
}

/// Coarse grouping of what a kernel stresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelFamily {
    Recursion,
    Loop,
    String,
    Allocation,
    Stream,
    Wasm,
}

/// Static metadata for a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KernelSpec {
    pub id: KernelId,
    pub family: KernelFamily,
    pub summary: &'static str,
    /// Exact text the program prints, without the trailing newline.
    pub expected_output: &'static str,
}

impl KernelId {
    /// Every kernel, in listing order.
    pub const ALL: [Self; 9] = [
        Self::Fib30,
        Self::Fib38,
        Self::SumRange,
        Self::StringOps,
        Self::DataTransform,
        Self::MapFilter,
        Self::WasmAdd,
        Self::WasmMultiply,
        Self::WasmFibonacci,
    ];

    /// Stable snake_case name, also used as the binary name for the
    /// standalone programs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fib30 => "fib30",
            Self::Fib38 => "fib38",
            Self::SumRange => "sum_range",
            Self::StringOps => "string_ops",
            Self::DataTransform => "data_transform",
            Self::MapFilter => "map_filter",
            Self::WasmAdd => "wasm_add",
            Self::WasmMultiply => "wasm_multiply",
            Self::WasmFibonacci => "wasm_fibonacci",
        }
    }

    /// Parse a kernel name (case-insensitive, `-` accepted for `_`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
    }

    /// Metadata for this kernel.
    #[must_use]
    pub const fn spec(self) -> KernelSpec {
        let (family, summary, expected_output) = match self {
            Self::Fib30 => (
                KernelFamily::Recursion,
                "recursive fib(30)",
                "832040",
            ),
            Self::Fib38 => (
                KernelFamily::Recursion,
                "recursive fib(38)",
                "39088169",
            ),
            Self::SumRange => (
                KernelFamily::Loop,
                "sum of 0..1000000",
                "499999500000",
            ),
            Self::StringOps => (
                KernelFamily::String,
                "length of 10000 upper-cased item-<i> tokens",
                "88890",
            ),
            Self::DataTransform => (
                KernelFamily::Allocation,
                "build 10000 {id, value, doubled} records",
                "10000",
            ),
            Self::MapFilter => (
                KernelFamily::Stream,
                "sum of squares of the first 10000 odd values in 0..100000",
                "1333333330000",
            ),
            Self::WasmAdd => (KernelFamily::Wasm, "wrapping i32 add(2, 3)", "5"),
            Self::WasmMultiply => (KernelFamily::Wasm, "wrapping i32 multiply(6, 7)", "42"),
            Self::WasmFibonacci => (
                KernelFamily::Wasm,
                "iterative i32 fibonacci(30)",
                "832040",
            ),
        };
        KernelSpec {
            id: self,
            family,
            summary,
            expected_output,
        }
    }

    /// Run the kernel with its fixed constants and return the printed value.
    #[must_use]
    pub fn run(self) -> i64 {
        match self {
            Self::Fib30 => fib::fib(fib::BASELINE_N),
            Self::Fib38 => fib::fib(fib::HEAVY_N),
            Self::SumRange => sum_range::sum_range(sum_range::RANGE_END),
            Self::StringOps => string_ops::concat_upper_len(string_ops::TOKEN_COUNT) as i64,
            Self::DataTransform => {
                data_transform::transform_count(data_transform::ITEM_COUNT) as i64
            }
            Self::MapFilter => map_filter::odd_square_sum(map_filter::SCAN_LIMIT, map_filter::TAKE),
            Self::WasmAdd => i64::from(wasm_math::add(WASM_ADD_ARGS.0, WASM_ADD_ARGS.1)),
            Self::WasmMultiply => {
                i64::from(wasm_math::multiply(WASM_MULTIPLY_ARGS.0, WASM_MULTIPLY_ARGS.1))
            }
            Self::WasmFibonacci => i64::from(wasm_math::fibonacci(WASM_FIBONACCI_N)),
        }
    }

    /// Run the kernel and render the line its program prints (no newline).
    #[must_use]
    pub fn run_output(self) -> String {
        self.run().to_string()
    }
}

impl std::fmt::Display for KernelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Bounded range summation.

/// Exclusive upper bound summed by the program.
pub const RANGE_END: i64 = 1_000_000;

/// Sums every integer in `0..end` with a single accumulator loop.
///
/// An empty or negative range sums to zero.
#[must_use]
pub fn sum_range(end: i64) -> i64 {
    let mut sum = 0i64;
    for i in 0..end {
        sum += i;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_range_empty() {
        assert_eq!(sum_range(0), 0);
        assert_eq!(sum_range(-5), 0);
    }

    #[test]
    fn test_sum_range_small() {
        assert_eq!(sum_range(1), 0);
        assert_eq!(sum_range(5), 10);
        assert_eq!(sum_range(1001), 500_500);
    }

    #[test]
    fn test_sum_range_matches_closed_form() {
        for n in [2i64, 17, 256, 9_999] {
            assert_eq!(sum_range(n), n * (n - 1) / 2, "n={n}");
        }
    }

    #[test]
    fn test_sum_range_program_bound() {
        assert_eq!(sum_range(RANGE_END), 499_999_500_000);
    }
}

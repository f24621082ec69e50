//! Filter-map-reduce over an integer range: keep odd values, square them,
//! take the first `take`, sum.

/// Exclusive upper bound of the scanned range.
pub const SCAN_LIMIT: i64 = 100_000;

/// Number of odd values consumed before the loop stops.
pub const TAKE: usize = 10_000;

/// Sums the squares of the first `take` odd integers in `0..limit`.
///
/// The loop stops as soon as `take` values were consumed. If the range holds
/// fewer odd values the sum covers all of them.
#[must_use]
pub fn odd_square_sum(limit: i64, take: usize) -> i64 {
    let mut sum = 0i64;
    let mut count = 0usize;
    let mut i = 0i64;
    while i < limit && count < take {
        if i % 2 == 1 {
            sum += i * i;
            count += 1;
        }
        i += 1;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of squares of the first `k` odd numbers: k(2k-1)(2k+1)/3.
    fn closed_form(k: i64) -> i64 {
        k * (2 * k - 1) * (2 * k + 1) / 3
    }

    #[test]
    fn test_odd_square_sum_empty() {
        assert_eq!(odd_square_sum(0, 10), 0);
        assert_eq!(odd_square_sum(100, 0), 0);
        assert_eq!(odd_square_sum(-3, 10), 0);
    }

    #[test]
    fn test_odd_square_sum_small() {
        // 1 + 9 + 25
        assert_eq!(odd_square_sum(100, 3), 35);
        assert_eq!(odd_square_sum(6, 100), 35);
    }

    #[test]
    fn test_odd_square_sum_take_limits_before_range() {
        assert_eq!(odd_square_sum(1_000, 50), closed_form(50));
    }

    #[test]
    fn test_odd_square_sum_range_limits_before_take() {
        // 0..20 holds 10 odd values.
        assert_eq!(odd_square_sum(20, 1_000), closed_form(10));
    }

    #[test]
    fn test_odd_square_sum_program() {
        assert_eq!(odd_square_sum(SCAN_LIMIT, TAKE), 1_333_333_330_000);
        assert_eq!(odd_square_sum(SCAN_LIMIT, TAKE), closed_form(TAKE as i64));
    }
}

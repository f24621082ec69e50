//! String concatenation with ASCII upper-casing.
//!
//! Builds `"ITEM-0ITEM-1...ITEM-{n-1}"` by formatting each lowercase token,
//! upper-casing it and appending it to one growing buffer.

use std::fmt::Write;

/// Number of tokens the program appends.
pub const TOKEN_COUNT: usize = 10_000;

/// Prefix of every token before upper-casing.
pub const TOKEN_PREFIX: &str = "item-";

/// Builds the concatenated uppercase buffer for `count` tokens.
#[must_use]
pub fn concat_upper(count: usize) -> String {
    let mut result = String::new();
    let mut token = String::with_capacity(TOKEN_PREFIX.len() + 20);
    for i in 0..count {
        token.clear();
        // Writing into a String cannot fail.
        let _ = write!(token, "{TOKEN_PREFIX}{i}");
        token.make_ascii_uppercase();
        result.push_str(&token);
    }
    result
}

/// Byte length of [`concat_upper`]`(count)`; this is what the program prints.
#[must_use]
pub fn concat_upper_len(count: usize) -> usize {
    concat_upper(count).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_upper_empty() {
        assert_eq!(concat_upper(0), "");
        assert_eq!(concat_upper_len(0), 0);
    }

    #[test]
    fn test_concat_upper_tokens() {
        assert_eq!(concat_upper(3), "ITEM-0ITEM-1ITEM-2");
    }

    #[test]
    fn test_concat_upper_crosses_digit_widths() {
        let s = concat_upper(11);
        assert!(s.ends_with("ITEM-9ITEM-10"));
        assert_eq!(s.len(), 11 * 5 + 10 + 2);
    }

    #[test]
    fn test_concat_upper_is_uppercase() {
        let s = concat_upper(200);
        assert!(!s.bytes().any(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_concat_upper_program_length() {
        // 5 prefix bytes per token plus 10*1 + 90*2 + 900*3 + 9000*4 digits.
        assert_eq!(concat_upper_len(TOKEN_COUNT), 88_890);
    }
}

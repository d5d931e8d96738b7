//! Word counting.

/// Count the whitespace-separated non-empty tokens in `text`.
///
/// Leading, trailing, and repeated whitespace contribute nothing, so the
/// count of `"  hello world  "` is 2.
pub fn count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_simple_tokens() {
        assert_eq!(count("a b c"), 3);
    }

    #[test]
    fn ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(count("  hello world  "), 2);
        assert_eq!(count("one\t\ttwo\nthree"), 3);
    }

    #[test]
    fn empty_and_blank_count_zero() {
        assert_eq!(count(""), 0);
        assert_eq!(count("   \n\t "), 0);
    }
}

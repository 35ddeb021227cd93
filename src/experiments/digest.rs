/// Reduces a caller identifier (usually a phone number) to a bucket.
///
/// Only ASCII digits count. The trailing four digits are summed and the sum
/// is taken modulo 100, so the reachable range is `0..=36`.
pub fn digest(identifier: &str) -> u32 {
    let digits: Vec<u32> = identifier.chars().filter_map(|c| c.to_digit(10)).collect();
    let tail = &digits[digits.len().saturating_sub(4)..];
    tail.iter().sum::<u32>() % 100
}

#[cfg(test)]
mod tests {
    use super::digest;

    #[test]
    fn sums_trailing_four_digits() {
        assert_eq!(digest("555-1234"), 10);
        assert_eq!(digest("+1 (415) 555-9999"), 36);
    }

    #[test]
    fn short_or_digitless_input() {
        assert_eq!(digest(""), 0);
        assert_eq!(digest("anonymous"), 0);
        assert_eq!(digest("0000"), 0);
        assert_eq!(digest("x7y"), 7);
        assert_eq!(digest("12"), 3);
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not 0-9.
        assert_eq!(digest("\u{0663}\u{0664}12"), 3);
    }
}

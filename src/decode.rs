//! Roman numeral text to integer.

/// Base value of a single symbol; anything outside `IVXLCDM` is worth nothing.
const fn symbol_value(symbol: char) -> i64 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Whether `symbol` is written before `next` to subtract itself.
const fn is_subtractive_pair(symbol: char, next: char) -> bool {
    matches!(
        (symbol, next),
        ('I', 'V' | 'X') | ('X', 'L' | 'C') | ('C', 'D' | 'M')
    )
}

/// Computes the integer value of `text`.
///
/// Symbols are summed left to right, except that `I`, `X` or `C` directly
/// before one of its two larger partners (`IV IX`, `XL XC`, `CD CM`) is
/// subtracted.
///
/// The result is only meaningful for text accepted by
/// [`validate_text`](crate::validate::validate_text); unknown characters are
/// skipped. The empty string decodes to `0`.
///
/// # Examples
///
/// ```rust
/// use numerus::decode::decode;
///
/// assert_eq!(decode("MCMXCIV"), 1994);
/// assert_eq!(decode("XLII"), 42);
/// assert_eq!(decode(""), 0);
/// ```
#[must_use]
pub fn decode(text: &str) -> i64 {
    let mut symbols = text.chars().peekable();
    let mut total: i64 = 0;

    while let Some(symbol) = symbols.next() {
        let value = symbol_value(symbol);
        match symbols.peek() {
            Some(&next) if is_subtractive_pair(symbol, next) => total -= value,
            _ => total += value,
        }
    }

    tracing::trace!(numeral = text, value = total, "decoded numeral");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("I", 1)]
    #[case("III", 3)]
    #[case("IV", 4)]
    #[case("V", 5)]
    #[case("IX", 9)]
    #[case("XIV", 14)]
    #[case("XL", 40)]
    #[case("XC", 90)]
    #[case("CD", 400)]
    #[case("CM", 900)]
    #[case("MCMXCIV", 1994)]
    #[case("MMMCMXCIX", 3999)]
    #[case("MMMMM", 5000)]
    fn test_decode_canonical_numerals(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(decode(text), expected);
    }

    #[rstest]
    #[case("IXI", 10)]
    #[case("VIV", 9)]
    #[case("XCX", 100)]
    #[case("LXL", 90)]
    #[case("CDC", 500)]
    #[case("MCMM", 2900)]
    fn test_decode_accepted_non_canonical_numerals(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(decode(text), expected);
    }

    #[rstest]
    fn test_decode_only_subtracts_designated_partners() {
        // "VX" is never valid, but V has no subtractive partners.
        assert_eq!(decode("VX"), 15);
        // I is only subtracted before V or X.
        assert_eq!(decode("IL"), 51);
    }

    #[rstest]
    fn test_decode_skips_unknown_characters() {
        assert_eq!(decode("X?V"), 15);
    }

    #[rstest]
    fn test_is_subtractive_pair() {
        assert!(is_subtractive_pair('I', 'V'));
        assert!(is_subtractive_pair('C', 'M'));
        assert!(!is_subtractive_pair('I', 'L'));
        assert!(!is_subtractive_pair('V', 'X'));
        assert!(!is_subtractive_pair('X', 'X'));
    }
}

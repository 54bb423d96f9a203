//! Integer to canonical Roman numeral text.

/// Unit, five and ten symbols for the hundreds, tens and ones places.
const PLACES: [(u32, char, char, char); 3] = [
    (100, 'C', 'D', 'M'),
    (10, 'X', 'L', 'C'),
    (1, 'I', 'V', 'X'),
];

/// Produces the canonical Roman numeral for `value`.
///
/// Thousands are written as repeated `M` with no upper bound. Each lower
/// decimal place uses the subtractive shorthand for 4 and 9 (`CD`, `XC`,
/// `IX`, ...). Zero encodes to the empty string.
///
/// # Examples
///
/// ```rust
/// use numerus::encode::encode;
///
/// assert_eq!(encode(1994), "MCMXCIV");
/// assert_eq!(encode(4000), "MMMM");
/// assert_eq!(encode(0), "");
/// ```
#[must_use]
pub fn encode(value: u32) -> String {
    let thousands = (value / 1000) as usize;
    let mut numeral = String::with_capacity(thousands + 12);
    numeral.extend(std::iter::repeat_n('M', thousands));

    for (place, unit, five, ten) in PLACES {
        push_digit(&mut numeral, (value / place) % 10, unit, five, ten);
    }

    tracing::trace!(value, numeral = numeral.as_str(), "encoded integer");
    numeral
}

fn push_digit(numeral: &mut String, digit: u32, unit: char, five: char, ten: char) {
    match digit {
        0..=3 => numeral.extend(std::iter::repeat_n(unit, digit as usize)),
        4 => {
            numeral.push(unit);
            numeral.push(five);
        }
        5..=8 => {
            numeral.push(five);
            numeral.extend(std::iter::repeat_n(unit, (digit - 5) as usize));
        }
        _ => {
            numeral.push(unit);
            numeral.push(ten);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "")]
    #[case(1, "I")]
    #[case(4, "IV")]
    #[case(5, "V")]
    #[case(8, "VIII")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(40, "XL")]
    #[case(49, "XLIX")]
    #[case(90, "XC")]
    #[case(400, "CD")]
    #[case(444, "CDXLIV")]
    #[case(900, "CM")]
    #[case(1994, "MCMXCIV")]
    #[case(2024, "MMXXIV")]
    #[case(3999, "MMMCMXCIX")]
    #[case(4000, "MMMM")]
    #[case(12_345, "MMMMMMMMMMMMCCCXLV")]
    fn test_encode(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(encode(value), expected);
    }

    #[rstest]
    fn test_encode_maximum_is_mostly_thousands() {
        let numeral = encode(u32::MAX);
        // 4_294_967_295 = 4_294_967 thousands + 295
        assert_eq!(numeral.len(), 4_294_967 + "CCXCV".len());
        assert!(numeral.ends_with("MCCXCV"));
    }

    #[rstest]
    #[case(6, "VI")]
    #[case(7, "VII")]
    #[case(60, "LX")]
    #[case(700, "DCC")]
    fn test_encode_five_plus_digits(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(encode(value), expected);
    }
}

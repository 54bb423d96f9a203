//! Well-formedness checks for Roman numeral text and integer input.
//!
//! Text is checked against four rules, in order, and the first failure is
//! reported:
//!
//! 1. Only the symbols `I V X L C D M` (uppercase) may appear.
//! 2. None of the forbidden adjacent orderings (`IM`, `VX`, `IIV`, ...) may
//!    appear anywhere.
//! 3. `I` or `V` may not be followed, anywhere later, by `C L D M`; `X` or `L`
//!    may not be followed, anywhere later, by `D M`.
//! 4. No run of four or more `I`, `X` or `C`, and no run of two or more `V`,
//!    `L` or `D`.
//!
//! The rules reject the common malformed numerals but are not a full
//! canonicity proof: a few non-canonical forms such as `IXI` or `MCMM` pass.
//! [`NumeralValue::from_text`](crate::NumeralValue::from_text) stores the
//! canonical re-encoding for those.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static FORBIDDEN_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^IVXLCDM]").expect("Invalid forbidden character regex pattern")
});

static FORBIDDEN_ORDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"CCM|DM|LM|XM|VM|IM|CCD|LD|XD|VD|ID|XXC|LC|VC|IC|XXL|VL|IL|VX|IIX|IIV",
    )
    .expect("Invalid forbidden order regex pattern")
});

static DISTANT_ORDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[IV].*[CLDM]|[XL].*[DM]").expect("Invalid distant order regex pattern")
});

static TOO_MANY_REPEATS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"I{4,}|V{2,}|X{4,}|L{2,}|C{4,}|D{2,}").expect("Invalid repeat regex pattern")
});

/// Checks that `text` is an acceptable Roman numeral.
///
/// The empty string is accepted; it is the textual form of zero.
///
/// # Errors
///
/// - [`ValidationError::InvalidCharacter`] for any symbol outside `IVXLCDM`
/// - [`ValidationError::InvalidOrder`] for forbidden orderings
/// - [`ValidationError::TooManyRepeats`] for over-long runs
///
/// # Examples
///
/// ```rust
/// use numerus::validate::validate_text;
///
/// assert!(validate_text("MCMXCIV").is_ok());
/// assert!(validate_text("").is_ok());
/// assert!(validate_text("IM").is_err());
/// ```
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let result = check_characters(text)
        .and_then(|()| check_order(text))
        .and_then(|()| check_repeats(text));

    if let Err(error) = &result {
        tracing::debug!(numeral = text, kind = error.kind(), "rejected numeral text");
    }
    result
}

/// Checks that `value` can be represented, returning it narrowed to `u32`.
///
/// # Errors
///
/// - [`ValidationError::NegativeValue`] when `value < 0`
/// - [`ValidationError::ValueTooLarge`] when `value > u32::MAX`
///
/// # Examples
///
/// ```rust
/// use numerus::validate::validate_integer;
///
/// assert_eq!(validate_integer(1994), Ok(1994));
/// assert!(validate_integer(-1).is_err());
/// ```
pub fn validate_integer(value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        tracing::debug!(value, "rejected negative integer");
        return Err(ValidationError::NegativeValue { value });
    }
    u32::try_from(value).map_err(|_| {
        tracing::debug!(value, "rejected out-of-range integer");
        ValidationError::ValueTooLarge { value }
    })
}

fn check_characters(text: &str) -> Result<(), ValidationError> {
    match FORBIDDEN_CHARACTER.find(text) {
        None => Ok(()),
        Some(found) => Err(ValidationError::InvalidCharacter {
            numeral: text.to_string(),
            character: found.as_str().chars().next().unwrap_or_default(),
            position: text[..found.start()].chars().count(),
        }),
    }
}

fn check_order(text: &str) -> Result<(), ValidationError> {
    match FORBIDDEN_ORDER
        .find(text)
        .or_else(|| DISTANT_ORDER.find(text))
    {
        None => Ok(()),
        Some(found) => Err(ValidationError::InvalidOrder {
            numeral: text.to_string(),
            pattern: found.as_str().to_string(),
        }),
    }
}

fn check_repeats(text: &str) -> Result<(), ValidationError> {
    match TOO_MANY_REPEATS.find(text) {
        None => Ok(()),
        Some(found) => Err(ValidationError::TooManyRepeats {
            numeral: text.to_string(),
            run: found.as_str().to_string(),
        }),
    }
}

//! Error types for numeral validation and arithmetic.
//!
//! Two error families are kept apart:
//!
//! - [`ValidationError`]: the input could not become a [`NumeralValue`]
//!   (bad text or an out-of-range integer).
//! - [`ArithmeticError`]: two valid numerals could not be combined.
//!
//! Both carry enough context to report the offending input without the
//! caller having to keep it around.
//!
//! [`NumeralValue`]: crate::NumeralValue

use thiserror::Error;

use crate::operation::ArithmeticOperation;

/// Reasons a candidate numeral, textual or integer, was rejected.
///
/// # Examples
///
/// ```rust
/// use numerus::{NumeralValue, ValidationError};
///
/// let error = NumeralValue::from_text("IIII").unwrap_err();
/// assert!(matches!(error, ValidationError::TooManyRepeats { .. }));
/// assert_eq!(
///     error.to_string(),
///     "IIII: too many repetitions of the same symbol ('IIII')"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text contains a character outside `{I, V, X, L, C, D, M}`.
    #[error("{numeral}: forbidden character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected input.
        numeral: String,
        /// The first offending character.
        character: char,
        /// Character index (not byte offset) of `character`.
        position: usize,
    },

    /// Symbols appear in an order Roman notation does not allow.
    #[error("{numeral}: characters in the wrong order ('{pattern}')")]
    InvalidOrder {
        /// The rejected input.
        numeral: String,
        /// The offending substring.
        pattern: String,
    },

    /// A symbol is repeated more often in a row than notation allows.
    #[error("{numeral}: too many repetitions of the same symbol ('{run}')")]
    TooManyRepeats {
        /// The rejected input.
        numeral: String,
        /// The offending run of symbols.
        run: String,
    },

    /// Negative integers have no Roman representation.
    #[error("{value}: negative values cannot be written as Roman numerals")]
    NegativeValue {
        /// The rejected integer.
        value: i64,
    },

    /// The integer is above [`NumeralValue::MAX`](crate::NumeralValue::MAX).
    #[error("{value}: value exceeds the largest supported numeral ({max})", max = u32::MAX)]
    ValueTooLarge {
        /// The rejected integer.
        value: i64,
    },
}

impl ValidationError {
    /// Returns a short, stable name for the kind of failure.
    ///
    /// Used by the CLI's JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::InvalidOrder { .. } => "invalid_order",
            Self::TooManyRepeats { .. } => "too_many_repeats",
            Self::NegativeValue { .. } => "negative_value",
            Self::ValueTooLarge { .. } => "value_too_large",
        }
    }
}

/// Reasons two valid numerals could not be combined.
///
/// # Examples
///
/// ```rust
/// use numerus::{ArithmeticError, NumeralValue};
///
/// let ten = NumeralValue::from(10_u32);
/// let error = ten.divide(&NumeralValue::zero()).unwrap_err();
/// assert_eq!(error, ArithmeticError::DivisionByZero { dividend: 10 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor was the zero numeral.
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero {
        /// The integer that was to be divided.
        dividend: u32,
    },

    /// The result does not fit in the supported numeral range.
    #[error("{left} {operation} {right} exceeds the largest supported numeral")]
    Overflow {
        /// The operation that overflowed.
        operation: ArithmeticOperation,
        /// Left operand.
        left: u32,
        /// Right operand.
        right: u32,
    },
}

impl ArithmeticError {
    /// Returns a short, stable name for the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero { .. } => "division_by_zero",
            Self::Overflow { .. } => "overflow",
        }
    }
}

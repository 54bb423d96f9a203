//! The four arithmetic operations as a value.
//!
//! [`ArithmeticOperation`] lets callers pick an operation at runtime (for
//! example from a command-line token) and apply it to two numerals.

use std::fmt;
use std::str::FromStr;

use crate::error::ArithmeticError;
use crate::numeral::NumeralValue;

/// One of the arithmetic operations supported on [`NumeralValue`].
///
/// # Examples
///
/// ```rust
/// use numerus::{ArithmeticOperation, NumeralValue};
///
/// let operation: ArithmeticOperation = "*".parse().unwrap();
/// let four = NumeralValue::from_text("IV").unwrap();
/// let three = NumeralValue::from_text("III").unwrap();
/// assert_eq!(operation.apply(&four, &three).unwrap().text(), "XII");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOperation {
    /// Sum.
    Add,
    /// Absolute difference.
    Subtract,
    /// Product.
    Multiply,
    /// Truncating quotient.
    Divide,
}

impl ArithmeticOperation {
    /// All operations, in the order the demo prints them.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Applies this operation to `left` and `right`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ArithmeticError`] of the underlying operation.
    pub fn apply(
        self,
        left: &NumeralValue,
        right: &NumeralValue,
    ) -> Result<NumeralValue, ArithmeticError> {
        match self {
            Self::Add => left.add(right),
            Self::Subtract => left.subtract(right),
            Self::Multiply => left.multiply(right),
            Self::Divide => left.divide(right),
        }
    }

    /// The infix symbol for this operation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// The lowercase name for this operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for ArithmeticOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// Error returned when a token names no known operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown arithmetic operation: {0:?}")]
pub struct UnknownOperation(
    /// The unrecognized token.
    pub String,
);

impl FromStr for ArithmeticOperation {
    type Err = UnknownOperation;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Self::Add),
            "-" | "subtract" | "minus" => Ok(Self::Subtract),
            "*" | "x" | "multiply" | "times" => Ok(Self::Multiply),
            "/" | "divide" => Ok(Self::Divide),
            _ => Err(UnknownOperation(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+", ArithmeticOperation::Add)]
    #[case("add", ArithmeticOperation::Add)]
    #[case("-", ArithmeticOperation::Subtract)]
    #[case("Minus", ArithmeticOperation::Subtract)]
    #[case("*", ArithmeticOperation::Multiply)]
    #[case("x", ArithmeticOperation::Multiply)]
    #[case("/", ArithmeticOperation::Divide)]
    #[case("DIVIDE", ArithmeticOperation::Divide)]
    fn test_parse_operation(#[case] token: &str, #[case] expected: ArithmeticOperation) {
        assert_eq!(token.parse::<ArithmeticOperation>(), Ok(expected));
    }

    #[rstest]
    fn test_parse_unknown_operation() {
        assert_eq!(
            "%".parse::<ArithmeticOperation>(),
            Err(UnknownOperation("%".to_string()))
        );
    }

    #[rstest]
    fn test_symbol_round_trips_through_parse() {
        for operation in ArithmeticOperation::ALL {
            assert_eq!(operation.symbol().parse::<ArithmeticOperation>(), Ok(operation));
            assert_eq!(operation.name().parse::<ArithmeticOperation>(), Ok(operation));
        }
    }

    #[rstest]
    #[case(ArithmeticOperation::Add, 15)]
    #[case(ArithmeticOperation::Subtract, 5)]
    #[case(ArithmeticOperation::Multiply, 50)]
    #[case(ArithmeticOperation::Divide, 2)]
    fn test_apply(#[case] operation: ArithmeticOperation, #[case] expected: u32) {
        let ten = NumeralValue::from(10_u32);
        let five = NumeralValue::from(5_u32);
        assert_eq!(operation.apply(&ten, &five).map(|value| value.integer()), Ok(expected));
    }
}

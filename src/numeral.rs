//! The `NumeralValue` value object.
//!
//! A `NumeralValue` pairs a non-negative integer with its canonical Roman
//! numeral text. It can only be built through validation, never changes after
//! construction, and every arithmetic operation returns a fresh value.

use std::fmt;
use std::str::FromStr;

use crate::decode::decode;
use crate::encode::encode;
use crate::error::{ArithmeticError, ValidationError};
use crate::operation::ArithmeticOperation;
use crate::validate::{validate_integer, validate_text};

/// A validated Roman numeral together with its integer value.
///
/// The two forms always agree: decoding [`text`](Self::text) yields
/// [`integer`](Self::integer) and encoding the integer yields the text.
///
/// There is no `Default` implementation, since Roman notation has no zero
/// glyph. The zero sentinel must be asked for explicitly with
/// [`NumeralValue::zero`]:
///
/// ```compile_fail
/// use numerus::NumeralValue;
///
/// let value = NumeralValue::default();
/// ```
///
/// # Examples
///
/// ```rust
/// use numerus::NumeralValue;
///
/// let year = NumeralValue::from_text("MCMXCIV").unwrap();
/// assert_eq!(year.integer(), 1994);
///
/// let answer = NumeralValue::from_integer(42).unwrap();
/// assert_eq!(answer.text(), "XLII");
///
/// let total = year.add(&answer).unwrap();
/// assert_eq!(total.text(), "MMXXXVI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumeralValue {
    // Field order gives `Ord` by integer value.
    integer: u32,
    text: String,
}

static_assertions::assert_impl_all!(NumeralValue: Send, Sync);

impl NumeralValue {
    /// The largest representable integer.
    pub const MAX: u32 = u32::MAX;

    /// Builds a numeral from Roman numeral text.
    ///
    /// The text is validated, decoded, and stored in canonical form. The
    /// validator accepts a few non-canonical spellings (for example `IXI`);
    /// those are stored as their canonical equivalent (`X`).
    ///
    /// The empty string yields the zero sentinel.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] reported by
    /// [`validate_text`](crate::validate::validate_text), or
    /// [`ValidationError::ValueTooLarge`] if the text decodes above
    /// [`NumeralValue::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::{NumeralValue, ValidationError};
    ///
    /// assert_eq!(NumeralValue::from_text("XIV").unwrap().integer(), 14);
    /// assert!(matches!(
    ///     NumeralValue::from_text("VX"),
    ///     Err(ValidationError::InvalidOrder { .. })
    /// ));
    /// ```
    pub fn from_text(text: &str) -> Result<Self, ValidationError> {
        validate_text(text)?;
        let integer = validate_integer(decode(text))?;
        let canonical = encode(integer);

        if canonical != text {
            tracing::debug!(
                numeral = text,
                canonical = canonical.as_str(),
                "accepted non-canonical numeral"
            );
        }

        Ok(Self {
            integer,
            text: canonical,
        })
    }

    /// Builds a numeral from a signed integer.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NegativeValue`] if `value` is negative
    /// - [`ValidationError::ValueTooLarge`] if `value` exceeds [`NumeralValue::MAX`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::{NumeralValue, ValidationError};
    ///
    /// assert_eq!(NumeralValue::from_integer(9).unwrap().text(), "IX");
    /// assert_eq!(
    ///     NumeralValue::from_integer(-1),
    ///     Err(ValidationError::NegativeValue { value: -1 })
    /// );
    /// ```
    pub fn from_integer(value: i64) -> Result<Self, ValidationError> {
        validate_integer(value).map(Self::from_validated)
    }

    /// The zero sentinel: integer `0`, empty text.
    ///
    /// This is the result of subtracting equal numerals, and the only value
    /// for which [`is_zero`](Self::is_zero) holds.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            integer: 0,
            text: String::new(),
        }
    }

    fn from_validated(integer: u32) -> Self {
        Self {
            integer,
            text: encode(integer),
        }
    }

    /// Returns the integer form.
    #[must_use]
    pub const fn integer(&self) -> u32 {
        self.integer
    }

    /// Returns the canonical text form. Empty for the zero sentinel.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the value and returns its text form.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Returns `true` for the zero sentinel.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.integer == 0
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Adds two numerals.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] if the sum exceeds [`NumeralValue::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::NumeralValue;
    ///
    /// let ten = NumeralValue::from_text("X").unwrap();
    /// let five = NumeralValue::from_text("V").unwrap();
    /// assert_eq!(ten.add(&five).unwrap().text(), "XV");
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.integer
            .checked_add(other.integer)
            .map(Self::from_validated)
            .ok_or_else(|| self.overflow(ArithmeticOperation::Add, other))
    }

    /// Returns the absolute difference of two numerals.
    ///
    /// Never negative; equal operands give [`NumeralValue::zero`].
    ///
    /// # Errors
    ///
    /// This operation cannot fail; it returns `Result` for symmetry with the
    /// other operations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::NumeralValue;
    ///
    /// let ten = NumeralValue::from_text("X").unwrap();
    /// let twenty = NumeralValue::from_text("XX").unwrap();
    /// assert_eq!(ten.subtract(&twenty).unwrap().text(), "X");
    /// assert!(ten.subtract(&ten).unwrap().is_zero());
    /// ```
    pub fn subtract(&self, other: &Self) -> Result<Self, ArithmeticError> {
        Ok(Self::from_validated(self.integer.abs_diff(other.integer)))
    }

    /// Multiplies two numerals.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] if the product exceeds [`NumeralValue::MAX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::NumeralValue;
    ///
    /// let four = NumeralValue::from_text("IV").unwrap();
    /// let three = NumeralValue::from_text("III").unwrap();
    /// assert_eq!(four.multiply(&three).unwrap().text(), "XII");
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.integer
            .checked_mul(other.integer)
            .map(Self::from_validated)
            .ok_or_else(|| self.overflow(ArithmeticOperation::Multiply, other))
    }

    /// Divides `self` by `other`, discarding any remainder.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `other` is the zero sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::NumeralValue;
    ///
    /// let ten = NumeralValue::from_text("X").unwrap();
    /// let three = NumeralValue::from_text("III").unwrap();
    /// assert_eq!(ten.divide(&three).unwrap().text(), "III");
    /// ```
    pub fn divide(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.integer
            .checked_div(other.integer)
            .map(Self::from_validated)
            .ok_or(ArithmeticError::DivisionByZero {
                dividend: self.integer,
            })
    }

    const fn overflow(&self, operation: ArithmeticOperation, other: &Self) -> ArithmeticError {
        ArithmeticError::Overflow {
            operation,
            left: self.integer,
            right: other.integer,
        }
    }

    /// Sums every numeral in `values`, starting from zero.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] as soon as the running total overflows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerus::NumeralValue;
    ///
    /// let values = ["X", "X", "V"].map(|text| NumeralValue::from_text(text).unwrap());
    /// assert_eq!(NumeralValue::try_sum(&values).unwrap().text(), "XXV");
    /// assert!(NumeralValue::try_sum(&Vec::<NumeralValue>::new()).unwrap().is_zero());
    /// ```
    pub fn try_sum<'a, I>(values: I) -> Result<Self, ArithmeticError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(), |accumulator, value| accumulator.add(value))
    }

    /// Multiplies every numeral in `values`, starting from one.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::Overflow`] as soon as the running product overflows.
    pub fn try_product<'a, I>(values: I) -> Result<Self, ArithmeticError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        values
            .into_iter()
            .try_fold(Self::from_validated(1), |accumulator, value| {
                accumulator.multiply(value)
            })
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl fmt::Display for NumeralValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl FromStr for NumeralValue {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

impl TryFrom<i64> for NumeralValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_integer(value)
    }
}

impl From<u32> for NumeralValue {
    fn from(value: u32) -> Self {
        Self::from_validated(value)
    }
}

impl From<NumeralValue> for u32 {
    fn from(value: NumeralValue) -> Self {
        value.integer
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for NumeralValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
struct NumeralValueVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for NumeralValueVisitor {
    type Value = NumeralValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a Roman numeral string or a non-negative integer")
    }

    fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        NumeralValue::from_text(text).map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        NumeralValue::from_integer(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u32::try_from(value)
            .map(NumeralValue::from)
            .map_err(|_| E::custom(format!("{value}: value exceeds the largest supported numeral")))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NumeralValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(NumeralValueVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================

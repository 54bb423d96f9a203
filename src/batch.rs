//! Converting many inputs at once.
//!
//! Every input is converted independently; one bad input does not stop the
//! rest. Results keep the input order.
//!
//! With the `rayon` feature, the `par_` variants spread the work across the
//! rayon thread pool and return exactly what their sequential counterparts
//! return.

use crate::error::ValidationError;
use crate::numeral::NumeralValue;

/// Builds a numeral from each text in `texts`.
///
/// # Examples
///
/// ```rust
/// use numerus::batch::parse_all;
///
/// let results = parse_all(["X", "IIII", "MM"]);
/// assert_eq!(results.len(), 3);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn parse_all<I, S>(texts: I) -> Vec<Result<NumeralValue, ValidationError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| NumeralValue::from_text(text.as_ref()))
        .collect()
}

/// Builds a numeral from each integer in `values`.
///
/// # Examples
///
/// ```rust
/// use numerus::batch::from_integers;
///
/// let results = from_integers([1, -1, 1994]);
/// assert_eq!(results[2].as_ref().map(|value| value.text()), Ok("MCMXCIV"));
/// assert!(results[1].is_err());
/// ```
pub fn from_integers<I>(values: I) -> Vec<Result<NumeralValue, ValidationError>>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().map(NumeralValue::from_integer).collect()
}

/// Parallel [`parse_all`].
#[cfg(feature = "rayon")]
pub fn par_parse_all<S>(texts: &[S]) -> Vec<Result<NumeralValue, ValidationError>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    texts
        .par_iter()
        .map(|text| NumeralValue::from_text(text.as_ref()))
        .collect()
}

/// Parallel [`from_integers`].
#[cfg(feature = "rayon")]
pub fn par_from_integers(values: &[i64]) -> Vec<Result<NumeralValue, ValidationError>> {
    use rayon::prelude::*;

    values
        .par_iter()
        .map(|&value| NumeralValue::from_integer(value))
        .collect()
}

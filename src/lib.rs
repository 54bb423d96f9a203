//! # numerus
//!
//! Validated conversion between Roman numerals and non-negative integers,
//! with arithmetic on immutable numeral values.
//!
//! ## Overview
//!
//! - **Validation**: [`validate::validate_text`] rejects forbidden
//!   characters, forbidden orderings and over-long runs of a symbol;
//!   [`validate::validate_integer`] rejects negative and out-of-range integers.
//! - **Decoding**: [`decode::decode`] turns numeral text into an integer.
//! - **Encoding**: [`encode::encode`] turns an integer into canonical text.
//! - **Values**: [`NumeralValue`] holds both forms, is only built through
//!   validation, and supports add, absolute subtract, multiply and truncating
//!   divide.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`NumeralValue`] (as numeral text)
//! - `rayon`: parallel batch conversion in [`batch`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let ten = NumeralValue::from_text("X")?;
//! let three = NumeralValue::from_integer(3)?;
//!
//! assert_eq!(ten.divide(&three)?.text(), "III");
//! assert_eq!(ten.subtract(&NumeralValue::from_text("XX")?)?.text(), "X");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use numerus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ArithmeticError, ValidationError};
    pub use crate::numeral::NumeralValue;
    pub use crate::operation::ArithmeticOperation;
}

pub mod batch;
pub mod decode;
pub mod encode;
pub mod validate;

mod error;
mod numeral;
mod operation;

pub use error::{ArithmeticError, ValidationError};
pub use numeral::NumeralValue;
pub use operation::{ArithmeticOperation, UnknownOperation};

//! Subcommand implementations.
//!
//! Each command returns an [`Outcome`]: the rendered output plus whether the
//! process should exit successfully. Errors that stop a command early are
//! reported through `anyhow`.

use anyhow::Context;
use clap::Args;
use numerus::{ArithmeticError, ArithmeticOperation, NumeralValue};

use crate::output::{self, OutputFormat};

/// Rendered result of a command.
pub struct Outcome {
    pub rendered: String,
    pub success: bool,
}

impl Outcome {
    fn success(rendered: String) -> Self {
        Self {
            rendered,
            success: true,
        }
    }
}

#[derive(Args)]
pub struct ToRomanArgs {
    /// Integer to convert
    #[arg(allow_negative_numbers = true)]
    pub value: i64,
}

#[derive(Args)]
pub struct ToIntegerArgs {
    /// Roman numeral, in capitals
    pub numeral: String,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Roman numerals to check
    #[arg(required = true)]
    pub numerals: Vec<String>,
}

#[derive(Args)]
pub struct CalcArgs {
    /// Left operand (integer or numeral)
    #[arg(allow_negative_numbers = true)]
    pub left: String,
    /// Operation: + - * / (or add, subtract, multiply, divide)
    pub operation: ArithmeticOperation,
    /// Right operand (integer or numeral)
    #[arg(allow_negative_numbers = true)]
    pub right: String,
}

#[derive(Args)]
pub struct DemoArgs {
    /// A non-negative integer
    #[arg(allow_negative_numbers = true)]
    pub integer: i64,
    /// A Roman numeral, in capitals
    pub numeral: String,
}

/// Reads an operand as an integer when it looks like one, otherwise as a
/// Roman numeral.
pub fn parse_operand(token: &str) -> anyhow::Result<NumeralValue> {
    let value = match token.parse::<i64>() {
        Ok(integer) => NumeralValue::from_integer(integer)?,
        Err(_) => NumeralValue::from_text(token)?,
    };
    Ok(value)
}

pub fn to_roman(args: &ToRomanArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let value = NumeralValue::from_integer(args.value)
        .with_context(|| format!("cannot convert {} to a Roman numeral", args.value))?;
    Ok(Outcome::success(output::render_conversion(&value, format)))
}

pub fn to_integer(args: &ToIntegerArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let value = NumeralValue::from_text(&args.numeral)
        .with_context(|| format!("cannot convert {:?} to an integer", args.numeral))?;
    Ok(Outcome::success(output::render_conversion(&value, format)))
}

pub fn validate(args: &ValidateArgs, format: OutputFormat) -> Outcome {
    let results: Vec<_> = args
        .numerals
        .iter()
        .map(|numeral| (numeral.as_str(), NumeralValue::from_text(numeral)))
        .collect();

    Outcome {
        success: results.iter().all(|(_, result)| result.is_ok()),
        rendered: output::render_validation(&results, format),
    }
}

pub fn calc(args: &CalcArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let left = parse_operand(&args.left)
        .with_context(|| format!("invalid left operand {:?}", args.left))?;
    let right = parse_operand(&args.right)
        .with_context(|| format!("invalid right operand {:?}", args.right))?;

    let result = args.operation.apply(&left, &right)?;
    Ok(Outcome::success(output::render_calculation(
        &left,
        args.operation,
        &right,
        &result,
        format,
    )))
}

/// Results of the demo: every operation in [`ArithmeticOperation::ALL`]
/// order, plus the error that forced the zero fallback, if any.
pub struct DemoResults {
    pub results: Vec<(ArithmeticOperation, NumeralValue)>,
    pub fallback: Option<ArithmeticError>,
}

/// Applies every operation to `first` and `second`.
///
/// If any operation fails, every result is replaced by zero and the error is
/// kept alongside.
pub fn run_demo(first: &NumeralValue, second: &NumeralValue) -> DemoResults {
    let computed: Result<Vec<_>, _> = ArithmeticOperation::ALL
        .into_iter()
        .map(|operation| {
            operation
                .apply(first, second)
                .map(|result| (operation, result))
        })
        .collect();

    match computed {
        Ok(results) => DemoResults {
            results,
            fallback: None,
        },
        Err(error) => {
            tracing::warn!(%error, "arithmetic failed, all results set to zero");
            DemoResults {
                results: ArithmeticOperation::ALL
                    .into_iter()
                    .map(|operation| (operation, NumeralValue::zero()))
                    .collect(),
                fallback: Some(error),
            }
        }
    }
}

pub fn demo(args: &DemoArgs, format: OutputFormat) -> anyhow::Result<Outcome> {
    let first = NumeralValue::from_integer(args.integer)
        .with_context(|| format!("cannot convert {} to a Roman numeral", args.integer))?;
    let second = NumeralValue::from_text(&args.numeral)
        .with_context(|| format!("cannot convert {:?} to an integer", args.numeral))?;

    let demo = run_demo(&first, &second);
    Ok(Outcome::success(output::render_demo(
        &first, &second, &demo, format,
    )))
}

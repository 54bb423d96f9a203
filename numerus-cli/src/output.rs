//! Text and JSON rendering.

use clap::ValueEnum;
use numerus::{ArithmeticOperation, NumeralValue, ValidationError};
use serde_json::{Value, json};

use crate::commands::DemoResults;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Numeral text for human-readable output; zero has no glyph.
fn display_numeral(value: &NumeralValue) -> &str {
    if value.is_zero() { "(zero)" } else { value.text() }
}

fn numeral_json(value: &NumeralValue) -> Value {
    json!({ "numeral": value, "integer": value.integer() })
}

fn pretty(value: &Value) -> String {
    // Serializing a `Value` cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

pub fn render_conversion(value: &NumeralValue, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{} = {}", display_numeral(value), value.integer()),
        OutputFormat::Json => pretty(&numeral_json(value)),
    }
}

pub fn render_validation(
    results: &[(&str, Result<NumeralValue, ValidationError>)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => results
            .iter()
            .map(|(input, result)| match result {
                Ok(value) => format!("valid    {input} = {}", value.integer()),
                Err(error) => format!("invalid  {error}"),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => pretty(&Value::Array(
            results
                .iter()
                .map(|(input, result)| match result {
                    Ok(value) => json!({
                        "input": input,
                        "valid": true,
                        "numeral": value,
                        "integer": value.integer(),
                    }),
                    Err(error) => json!({
                        "input": input,
                        "valid": false,
                        "kind": error.kind(),
                        "message": error.to_string(),
                    }),
                })
                .collect(),
        )),
    }
}

fn expression(
    left: &str,
    operation: ArithmeticOperation,
    right: &str,
    result: &str,
) -> String {
    match operation {
        ArithmeticOperation::Subtract => format!("abs({left}-{right})={result}"),
        _ => format!("{left}{operation}{right}={result}"),
    }
}

pub fn render_calculation(
    left: &NumeralValue,
    operation: ArithmeticOperation,
    right: &NumeralValue,
    result: &NumeralValue,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => [
            expression(
                &left.integer().to_string(),
                operation,
                &right.integer().to_string(),
                &result.integer().to_string(),
            ),
            expression(
                display_numeral(left),
                operation,
                display_numeral(right),
                display_numeral(result),
            ),
        ]
        .join("\n"),
        OutputFormat::Json => pretty(&json!({
            "operation": operation.name(),
            "left": numeral_json(left),
            "right": numeral_json(right),
            "result": numeral_json(result),
        })),
    }
}

pub fn render_demo(
    first: &NumeralValue,
    second: &NumeralValue,
    demo: &DemoResults,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("In Roman numerals, you entered {}", display_numeral(first)),
                format!("In Arabic numerals, you entered {}", second.integer()),
            ];
            if let Some(error) = &demo.fallback {
                lines.push(format!("Arithmetic failed: {error}"));
                lines.push("All mathematical results have been set to zero.".to_string());
            }
            for (operation, result) in &demo.results {
                lines.push(render_calculation(
                    first,
                    *operation,
                    second,
                    result,
                    OutputFormat::Text,
                ));
            }
            lines.join("\n")
        }
        OutputFormat::Json => pretty(&json!({
            "first": numeral_json(first),
            "second": numeral_json(second),
            "fallback": demo.fallback.as_ref().map(ToString::to_string),
            "results": demo
                .results
                .iter()
                .map(|(operation, result)| {
                    json!({ "operation": operation.name(), "result": numeral_json(result) })
                })
                .collect::<Vec<_>>(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::run_demo;
    use rstest::rstest;

    fn numeral(text: &str) -> NumeralValue {
        NumeralValue::from_text(text).expect("test numeral should be valid")
    }

    #[rstest]
    fn test_render_conversion_text() {
        assert_eq!(
            render_conversion(&numeral("MCMXCIV"), OutputFormat::Text),
            "MCMXCIV = 1994"
        );
        assert_eq!(
            render_conversion(&NumeralValue::zero(), OutputFormat::Text),
            "(zero) = 0"
        );
    }

    #[rstest]
    fn test_render_conversion_json() {
        let rendered = render_conversion(&numeral("XIV"), OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(parsed, json!({ "numeral": "XIV", "integer": 14 }));
    }

    #[rstest]
    fn test_render_validation_text() {
        let results = vec![
            ("XIV", NumeralValue::from_text("XIV")),
            ("VV", NumeralValue::from_text("VV")),
        ];
        assert_eq!(
            render_validation(&results, OutputFormat::Text),
            "valid    XIV = 14\ninvalid  VV: too many repetitions of the same symbol ('VV')"
        );
    }

    #[rstest]
    fn test_render_validation_json_includes_kind() {
        let results = vec![("IM", NumeralValue::from_text("IM"))];
        let parsed: Value =
            serde_json::from_str(&render_validation(&results, OutputFormat::Json))
                .expect("valid json");
        assert_eq!(parsed[0]["valid"], json!(false));
        assert_eq!(parsed[0]["kind"], json!("invalid_order"));
    }

    #[rstest]
    #[case(ArithmeticOperation::Add, "X", "V", "10+5=15\nX+V=XV")]
    #[case(ArithmeticOperation::Subtract, "X", "XX", "abs(10-20)=10\nabs(X-XX)=X")]
    #[case(ArithmeticOperation::Subtract, "X", "X", "abs(10-10)=0\nabs(X-X)=(zero)")]
    #[case(ArithmeticOperation::Divide, "X", "III", "10/3=3\nX/III=III")]
    fn test_render_calculation_text(
        #[case] operation: ArithmeticOperation,
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: &str,
    ) {
        let left = numeral(left);
        let right = numeral(right);
        let result = operation.apply(&left, &right).expect("operation succeeds");
        assert_eq!(
            render_calculation(&left, operation, &right, &result, OutputFormat::Text),
            expected
        );
    }

    #[rstest]
    fn test_render_demo_reports_fallback() {
        let first = numeral("X");
        let second = NumeralValue::zero();
        let demo = run_demo(&first, &second);
        let rendered = render_demo(&first, &second, &demo, OutputFormat::Text);
        assert!(rendered.contains("Arithmetic failed: cannot divide 10 by zero"));
        assert!(rendered.contains("All mathematical results have been set to zero."));
        assert!(rendered.contains("10+0=0"));
    }

    #[rstest]
    fn test_render_demo_json() {
        let first = numeral("X");
        let second = numeral("II");
        let demo = run_demo(&first, &second);
        let parsed: Value =
            serde_json::from_str(&render_demo(&first, &second, &demo, OutputFormat::Json))
                .expect("valid json");
        assert_eq!(parsed["fallback"], Value::Null);
        assert_eq!(parsed["results"][2]["result"]["numeral"], json!("XX"));
        assert_eq!(parsed["results"][3]["operation"], json!("divide"));
    }
}

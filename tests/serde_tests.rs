#![cfg(feature = "serde")]
//! Serialization tests for `NumeralValue`.

use numerus::NumeralValue;
use rstest::rstest;

#[rstest]
fn serializes_as_numeral_text() {
    let value = NumeralValue::from_integer(1994).expect("valid integer");
    assert_eq!(serde_json::to_string(&value).expect("serialize"), r#""MCMXCIV""#);
}

#[rstest]
fn zero_serializes_as_empty_string() {
    assert_eq!(
        serde_json::to_string(&NumeralValue::zero()).expect("serialize"),
        r#""""#
    );
}

#[rstest]
#[case(r#""XLII""#, 42)]
#[case("42", 42)]
#[case(r#""""#, 0)]
fn deserializes_from_text_or_integer(#[case] json: &str, #[case] expected: u32) {
    let value: NumeralValue = serde_json::from_str(json).expect("deserialize");
    assert_eq!(value.integer(), expected);
}

#[rstest]
fn deserialization_normalizes_non_canonical_text() {
    let value: NumeralValue = serde_json::from_str(r#""IXI""#).expect("deserialize");
    assert_eq!(value.text(), "X");
}

#[rstest]
#[case(r#""IIII""#, "too many repetitions")]
#[case(r#""IM""#, "wrong order")]
#[case(r#""xiv""#, "forbidden character")]
#[case("-5", "negative")]
#[case("5000000000", "exceeds the largest supported numeral")]
#[case("[1]", "a Roman numeral string or a non-negative integer")]
fn deserialization_validates(#[case] json: &str, #[case] message: &str) {
    let error = serde_json::from_str::<NumeralValue>(json).expect_err("should be rejected");
    assert!(
        error.to_string().contains(message),
        "{error} should mention {message}"
    );
}

#[rstest]
fn round_trips_inside_a_structure() {
    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Chapter {
        number: NumeralValue,
        title: String,
    }

    let chapter = Chapter {
        number: NumeralValue::from_text("XIV").expect("valid numeral"),
        title: "The Ides of March".to_string(),
    };
    let json = serde_json::to_string(&chapter).expect("serialize");
    assert_eq!(json, r#"{"number":"XIV","title":"The Ides of March"}"#);
    assert_eq!(serde_json::from_str::<Chapter>(&json).expect("deserialize"), chapter);
}

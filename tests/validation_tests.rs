mod common;

use common::messages;
use form_validator::*;
use pretty_assertions::assert_eq;

#[test]
fn test_optional_empty_value_is_valid() {
    assert_eq!(validate("", &ValidationRule::new()), Validation::Valid);
    assert_eq!(
        validate("", &ValidationRule::new().with_input_type(InputType::Email)),
        Validation::Valid
    );
}

#[test]
fn test_required_empty_value() {
    let outcome = validate("", &ValidationRule::required());
    assert_eq!(messages(&outcome), vec!["This field is required!"]);

    let details = outcome.details().unwrap();
    assert_eq!(details.value, "");
}

#[test]
fn test_required_with_custom_message() {
    let rule = ValidationRule::required().with_messages(CustomErrorMessages {
        on_requirement_fail: Some("Please enter your name".to_string()),
        ..Default::default()
    });
    assert_eq!(messages(&validate("", &rule)), vec!["Please enter your name"]);
    assert!(validate("Jane", &rule).is_valid());
}

#[test]
fn test_input_type_patterns() {
    let rule = ValidationRule::new().with_input_type(InputType::Email);
    assert!(validate("jane@example.com", &rule).is_valid());
    assert_eq!(
        messages(&validate("jane@", &rule)),
        vec!["Incorrect email format!"]
    );

    let rule = ValidationRule::new().with_input_type(InputType::Alpha);
    assert!(validate("Jane", &rule).is_valid());
    assert_eq!(
        messages(&validate("Jane2", &rule)),
        vec!["Incorrect input! Only letters allowed!"]
    );
}

#[test]
fn test_value_matcher_outcomes() {
    let rule = ValidationRule::new().with_matcher(Matcher::value(|value| match value {
        "ok" => MatchOutcome::Pass,
        "bad" => MatchOutcome::Fail,
        other => MatchOutcome::FailWith(format!("'{other}' is not accepted")),
    }));

    assert!(validate("ok", &rule).is_valid());
    assert_eq!(messages(&validate("bad", &rule)), vec!["Incorrect input!"]);
    assert_eq!(
        messages(&validate("what", &rule)),
        vec!["'what' is not accepted"]
    );
}

#[test]
fn test_value_matcher_fail_uses_custom_message() {
    let rule = ValidationRule::new()
        .with_matcher(Matcher::value(|value| (value.len() % 2 == 0).into()))
        .with_messages(CustomErrorMessages {
            on_match_fail: Some("Even length only".to_string()),
            ..Default::default()
        });

    assert!(validate("ab", &rule).is_valid());
    assert_eq!(messages(&validate("abc", &rule)), vec!["Even length only"]);
}

#[test]
fn test_pattern_matcher() {
    let rule = ValidationRule::new().with_matcher(Matcher::pattern("^[A-Z]").unwrap());
    assert!(validate("Riga", &rule).is_valid());
    assert_eq!(messages(&validate("riga", &rule)), vec!["Incorrect input!"]);
    // A pattern is checked even against an empty value.
    assert_eq!(messages(&validate("", &rule)), vec!["Incorrect input!"]);
}

#[test]
fn test_group_matcher_is_ignored_for_single_values() {
    let rule = ValidationRule::new().with_matcher(Matcher::group(|_| false));
    assert!(validate("anything", &rule).is_valid());
}

#[test]
fn test_length_range_min() {
    let rule = ValidationRule::new().with_range(Range::new(3.0, 10.0));
    assert_eq!(
        messages(&validate("ab", &rule)),
        vec!["Minimum 3 characters!"]
    );
    assert!(validate("abc", &rule).is_valid());
    // Emptiness is the required check's business.
    assert!(validate("", &rule).is_valid());
}

#[test]
fn test_length_range_max_reports_overflow() {
    let rule = ValidationRule::new().with_range(Range::new(3.0, 10.0));
    assert_eq!(
        messages(&validate("abcdefghijk", &rule)),
        vec!["Maximum 10 characters (1 too many)"]
    );
    assert!(validate("abcdefghij", &rule).is_valid());
}

#[test]
fn test_length_error_is_prepended() {
    let rule = ValidationRule::required()
        .with_input_type(InputType::Alpha)
        .with_range(Range::max(5.0).with_length_error());

    assert_eq!(
        messages(&validate("abc1234", &rule)),
        vec![
            "Please enter no more than 5 characters.",
            "Incorrect input! Only letters allowed!",
            "Maximum 5 characters (2 too many)",
        ]
    );
}

#[test]
fn test_length_counts_characters() {
    let rule = ValidationRule::new().with_range(Range::max(3.0));
    assert!(validate("äöü", &rule).is_valid());
}

#[test]
fn test_numeric_range() {
    let rule = ValidationRule::new()
        .with_input_type(InputType::Numeric)
        .with_range(Range::new(5.0, 10.0));

    assert_eq!(messages(&validate("3", &rule)), vec!["Minimal value is 5!"]);
    assert_eq!(messages(&validate("11", &rule)), vec!["Maximum value is 10!"]);
    assert!(validate("7", &rule).is_valid());
    assert!(validate("10", &rule).is_valid());
}

#[test]
fn test_numeric_range_with_unparsable_value() {
    let rule = ValidationRule::new()
        .with_input_type(InputType::Numeric)
        .with_range(Range::new(5.0, 10.0));

    assert_eq!(
        messages(&validate("abc", &rule)),
        vec!["Incorrect input! Numeric value required!"]
    );
}

#[test]
fn test_numeric_empty_value_counts_as_zero() {
    let rule = ValidationRule::new()
        .with_input_type(InputType::Integer)
        .with_range(Range::min(1.0));
    assert_eq!(messages(&validate("", &rule)), vec!["Minimal value is 1!"]);
}

#[test]
fn test_zero_bound_is_enforced() {
    let rule = ValidationRule::new()
        .with_input_type(InputType::Integer)
        .with_range(Range::max(0.0));
    assert_eq!(messages(&validate("1", &rule)), vec!["Maximum value is 0!"]);
    assert!(validate("0", &rule).is_valid());
    assert!(validate("-4", &rule).is_valid());
}

#[test]
fn test_range_custom_messages() {
    let rule = ValidationRule::new()
        .with_range(Range::new(2.0, 4.0))
        .with_messages(CustomErrorMessages {
            on_range_fail_min: Some("Too short".to_string()),
            on_range_fail_max: Some("Too long".to_string()),
            ..Default::default()
        });
    assert_eq!(messages(&validate("a", &rule)), vec!["Too short"]);
    assert_eq!(messages(&validate("abcde", &rule)), vec!["Too long"]);
}

#[test]
fn test_file_extension() {
    let rule = ValidationRule::new().with_file_extension("jpg, png");
    assert!(validate("photo.png", &rule).is_valid());
    assert!(validate("", &rule).is_valid());
    assert_eq!(
        messages(&validate("photo.gif", &rule)),
        vec!["Incorrect File extension upload!"]
    );
    assert_eq!(
        messages(&validate("photo.JPG", &rule)),
        vec!["Incorrect File extension upload!"]
    );
}

#[test]
fn test_failures_accumulate_in_check_order() {
    let rule = ValidationRule::new()
        .with_input_type(InputType::Alpha)
        .with_matcher(Matcher::pattern("^x").unwrap())
        .with_range(Range::min(3.0))
        .with_file_extension("pdf");

    assert_eq!(
        messages(&validate("a.1", &rule)),
        vec![
            "Incorrect input! Only letters allowed!",
            "Incorrect input!",
            "Incorrect File extension upload!",
        ]
    );

    assert_eq!(
        messages(&validate("a1", &rule)),
        vec![
            "Incorrect input! Only letters allowed!",
            "Incorrect input!",
            "Minimum 3 characters!",
            "Incorrect File extension upload!",
        ]
    );
}

#[test]
fn test_rule_from_json() {
    let rule = ValidationRule::from_json(
        r#"{
            "isRequired": true,
            "inputType": "email",
            "match": "@shop\\.com$",
            "range": { "max": 20 },
            "customErrorMessages": { "onInputTypeFail": "Bad email" }
        }"#,
    )
    .unwrap();

    assert!(validate("me@shop.com", &rule).is_valid());
    assert_eq!(
        messages(&validate("x@y", &rule)),
        vec!["Bad email", "Incorrect input!"]
    );
    assert_eq!(
        messages(&validate("", &rule)),
        vec!["This field is required!", "Incorrect input!"]
    );
}

#[test]
fn test_rule_from_json_rejects_bad_pattern() {
    assert!(ValidationRule::from_json(r#"{ "match": "([a-z" }"#).is_err());
}

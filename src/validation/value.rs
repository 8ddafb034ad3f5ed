use super::{MessageKey, Validator};
use crate::types::{
    FileExtension, InputType, MatchOutcome, Matcher, Range, Validation, ValidationOutput,
    ValidationRule,
};

impl Validator {
    /// Runs every check of `rule` against `value` and collects all failures.
    ///
    /// Checks run in a fixed order (required, input type, match, range, file
    /// extension) and none of them short-circuits the others.
    pub fn validate(&self, value: &str, rule: &ValidationRule) -> Validation<ValidationOutput> {
        let custom = &rule.custom_error_messages;
        let mut output = ValidationOutput::new(value);
        let errors = &mut output.error_messages;

        if rule.is_required && value.is_empty() {
            errors.push(self.message_or(&custom.on_requirement_fail, MessageKey::IsRequired));
        }

        if let Some(input_type) = rule.input_type {
            if !value.is_empty() && !self.patterns.matches(input_type, value) {
                errors.push(
                    self.message_or(&custom.on_input_type_fail, MessageKey::InputType(input_type)),
                );
            }
        }

        match &rule.matcher {
            Some(Matcher::Value(matcher)) => match matcher(value) {
                MatchOutcome::Pass => {}
                MatchOutcome::Fail => {
                    errors.push(self.message_or(&custom.on_match_fail, MessageKey::Match));
                }
                MatchOutcome::FailWith(message) => errors.push(message),
            },
            Some(Matcher::Pattern(pattern)) if !pattern.is_match(value) => {
                errors.push(self.message_or(&custom.on_match_fail, MessageKey::Match));
            }
            _ => {}
        }

        if let Some(range) = &rule.range {
            if rule.input_type.is_some_and(InputType::is_numeric) {
                self.check_value_range(value, range, rule, errors);
            } else {
                self.check_length_range(value, range, rule, errors);
            }
        }

        if let Some(extension) = &rule.file_extension {
            if !value.is_empty() && !has_accepted_extension(value, extension) {
                errors.push(self.message_or(&custom.on_extension_fail, MessageKey::FileExtension));
            }
        }

        if !output.error_messages.is_empty() {
            tracing::trace!(
                failures = output.error_messages.len(),
                "Value failed validation"
            );
        }
        output.into_validation()
    }

    fn check_value_range(
        &self,
        value: &str,
        range: &Range,
        rule: &ValidationRule,
        errors: &mut Vec<String>,
    ) {
        let custom = &rule.custom_error_messages;
        let number = coerce_number(value);

        if let Some(min) = range.min {
            if number < min {
                errors.push(self.formatted_or(
                    &custom.on_range_fail_min,
                    MessageKey::RangeMinValue,
                    &[&min],
                ));
            }
        }

        if let Some(max) = range.max {
            if number > max {
                errors.push(self.formatted_or(
                    &custom.on_range_fail_max,
                    MessageKey::RangeMaxValue,
                    &[&max],
                ));
            }
        }
    }

    fn check_length_range(
        &self,
        value: &str,
        range: &Range,
        rule: &ValidationRule,
        errors: &mut Vec<String>,
    ) {
        let custom = &rule.custom_error_messages;
        let length = value.chars().count() as f64;

        if let Some(min) = range.min {
            if length > 0.0 && length < min {
                errors.push(self.formatted_or(
                    &custom.on_range_fail_min,
                    MessageKey::LengthMin,
                    &[&min],
                ));
            }
        }

        if let Some(max) = range.max {
            if length > max {
                let too_many = length - max;
                errors.push(self.formatted_or(
                    &custom.on_range_fail_max,
                    MessageKey::LengthMax,
                    &[&max, &too_many],
                ));

                if range.show_length_error {
                    errors.insert(
                        0,
                        self.messages.format(MessageKey::LengthExceeded, &[&max]),
                    );
                }
            }
        }
    }

    pub(crate) fn message_or(&self, custom: &Option<String>, key: MessageKey) -> String {
        custom.clone().unwrap_or_else(|| self.messages.get(key))
    }

    fn formatted_or(
        &self,
        custom: &Option<String>,
        key: MessageKey,
        args: &[&dyn std::fmt::Display],
    ) -> String {
        custom
            .clone()
            .unwrap_or_else(|| self.messages.format(key, args))
    }
}

/// Converts form input to a number the way browsers do.
///
/// Blank input counts as zero. Only the spelled-out `Infinity` is infinite,
/// `0x`/`0o`/`0b` prefixes select a radix, and anything else that is not a
/// plain decimal becomes NaN, which never satisfies a comparison.
fn coerce_number(value: &str) -> f64 {
    let trimmed = value.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            if let Some(number) = parse_radix_literal(trimmed) {
                return number;
            }
            let is_decimal = trimmed
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
            if is_decimal {
                trimmed.parse().unwrap_or(f64::NAN)
            } else {
                f64::NAN
            }
        }
    }
}

/// Unsigned `0x`, `0o` and `0b` literals. Returns `None` when there is no prefix.
fn parse_radix_literal(value: &str) -> Option<f64> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let number = digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(number.unwrap_or(f64::NAN))
}

fn has_accepted_extension(value: &str, extension: &FileExtension) -> bool {
    let current = value.rsplit('.').next().unwrap_or(value);
    extension.accepted().any(|accepted| accepted == current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_numbers_loosely() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number(" 42 "), 42.0);
        assert_eq!(coerce_number("-1.5"), -1.5);
        assert!(coerce_number("12abc").is_nan());
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
    }

    #[test]
    fn only_spelled_out_infinity_is_infinite() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("+Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        for word in ["inf", "-inf", "infinity", "INFINITY", "nan", "NaN"] {
            assert!(coerce_number(word).is_nan(), "{word} should not be a number");
        }
    }

    #[test]
    fn radix_prefixes_are_parsed() {
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0XFF"), 255.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0b102").is_nan());
        assert!(coerce_number("-0x10").is_nan());
    }

    #[test]
    fn non_numeric_words_fail_only_the_input_type() {
        let rule = ValidationRule::new()
            .with_input_type(InputType::Numeric)
            .with_range(Range::new(1.0, 10.0));
        let outcome = Validator::default().validate("inf", &rule);
        match outcome {
            Validation::Invalid(output) => {
                assert_eq!(output.error_messages, vec!["Incorrect input! Numeric value required!"]);
            }
            Validation::Valid => panic!("expected `inf` to be rejected"),
        }

        let rule = ValidationRule::new()
            .with_input_type(InputType::Decimal)
            .with_range(Range::new(1.0, 100.0));
        assert!(Validator::default().validate("0x1F", &rule).is_invalid());
    }

    #[test]
    fn extension_is_suffix_after_last_dot() {
        let accept = FileExtension::new("jpg, png");
        assert!(has_accepted_extension("photo.final.png", &accept));
        assert!(!has_accepted_extension("photo.PNG", &accept));
        assert!(!has_accepted_extension("png.gif", &accept));
        assert!(!has_accepted_extension("noextension", &accept));
    }
}

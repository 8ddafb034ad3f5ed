use super::{MessageKey, Validator};
use crate::types::{LengthRange, PasswordCheck};

/// Counts how many of digits, lowercase, uppercase and symbols occur in `value`.
pub fn number_of_character_classes(value: &str) -> usize {
    let has = |predicate: fn(&char) -> bool| value.chars().any(|c| predicate(&c));

    [
        has(char::is_ascii_digit),
        has(char::is_ascii_lowercase),
        has(char::is_ascii_uppercase),
        has(|c| !c.is_ascii_alphanumeric()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

impl Validator {
    /// Checks password length and character-class diversity.
    ///
    /// An empty password passes; whether one is required is a separate rule.
    pub fn validate_password(
        &self,
        value: &str,
        range: LengthRange,
        min_classes: usize,
    ) -> PasswordCheck {
        if value.is_empty() {
            return PasswordCheck::Valid;
        }

        let length = value.chars().count();

        if length < range.min {
            return PasswordCheck::Invalid(
                self.messages.format(MessageKey::PasswordMin, &[&range.min]),
            );
        }

        if length > range.max {
            return PasswordCheck::Invalid(
                self.messages.format(MessageKey::PasswordMax, &[&range.max]),
            );
        }

        if number_of_character_classes(value) < min_classes {
            return PasswordCheck::Invalid(
                self.messages
                    .format(MessageKey::PasswordClasses, &[&min_classes]),
            );
        }

        PasswordCheck::Valid
    }
}

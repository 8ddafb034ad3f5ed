use form_validator::*;
use pretty_assertions::assert_eq;

const CLASSES_MESSAGE: &str = "Minimum of different classes of characters in password is 3. \
     Classes of characters: Lower Case, Upper Case, Digits, Special Characters.";

fn range() -> LengthRange {
    LengthRange::new(8, 64)
}

#[test]
fn test_empty_password_is_not_checked() {
    assert_eq!(validate_password("", range(), 3), PasswordCheck::Valid);
}

#[test]
fn test_too_short() {
    assert_eq!(
        validate_password("abc", range(), 3),
        PasswordCheck::Invalid("Minimum 8 characters!".to_string())
    );
}

#[test]
fn test_too_long() {
    let long = "aB1!".repeat(17);
    assert_eq!(
        validate_password(&long, range(), 3),
        PasswordCheck::Invalid("Maximum 64 characters!".to_string())
    );
}

#[test]
fn test_not_enough_character_classes() {
    let check = validate_password("abcdefgh", range(), 3);
    assert_eq!(check.message(), Some(CLASSES_MESSAGE));
}

#[test]
fn test_strong_enough() {
    assert!(validate_password("abcDEF123", range(), 3).is_valid());
    assert!(validate_password("abcdefgh", range(), 1).is_valid());
    assert!(validate_password("abcdefgh", range(), 0).is_valid());
}

#[test]
fn test_length_checked_before_classes() {
    assert_eq!(
        validate_password("a1", range(), 4).message(),
        Some("Minimum 8 characters!")
    );
}

#[test]
fn test_character_classes() {
    assert_eq!(number_of_character_classes(""), 0);
    assert_eq!(number_of_character_classes("abc"), 1);
    assert_eq!(number_of_character_classes("ABC"), 1);
    assert_eq!(number_of_character_classes("123"), 1);
    assert_eq!(number_of_character_classes("!? "), 1);
    assert_eq!(number_of_character_classes("abc123XYZ!"), 4);
}

#[test]
fn test_custom_password_messages() {
    let validator = Validator::from_config(
        &ValidatorConfig::new().with_message("passwordMin", "Mindestens %s Zeichen!"),
    )
    .unwrap();
    assert_eq!(
        validator.validate_password("abc", range(), 3).message(),
        Some("Mindestens 8 Zeichen!")
    );
}

//! Default validation messages and `%s` interpolation.
//!
//! The catalog is a translation table keyed by failure kind. Localized or
//! rebranded storefronts replace entries through [`ValidatorConfig`].
//!
//! [`ValidatorConfig`]: crate::core::ValidatorConfig

use std::collections::HashMap;
use std::fmt;

use crate::error::{FormValidatorError, Result};
use crate::types::InputType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    IsRequired,
    Match,
    Group,
    FileExtension,
    InputType(InputType),
    /// Numeric value below `range.min`; takes the bound.
    RangeMinValue,
    /// Numeric value above `range.max`; takes the bound.
    RangeMaxValue,
    /// Too few characters; takes the bound.
    LengthMin,
    /// Too many characters; takes the bound and the overflow.
    LengthMax,
    /// Leading summary used with `show_length_error`; takes the bound.
    LengthExceeded,
    PasswordMin,
    PasswordMax,
    /// Takes the required number of character classes.
    PasswordClasses,
}

impl MessageKey {
    pub fn name(self) -> &'static str {
        match self {
            MessageKey::IsRequired => "isRequired",
            MessageKey::Match => "match",
            MessageKey::Group => "group",
            MessageKey::FileExtension => "fileExtension",
            MessageKey::InputType(input_type) => input_type.as_str(),
            MessageKey::RangeMinValue => "rangeMinValue",
            MessageKey::RangeMaxValue => "rangeMaxValue",
            MessageKey::LengthMin => "lengthMin",
            MessageKey::LengthMax => "lengthMax",
            MessageKey::LengthExceeded => "lengthExceeded",
            MessageKey::PasswordMin => "passwordMin",
            MessageKey::PasswordMax => "passwordMax",
            MessageKey::PasswordClasses => "passwordClasses",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|key| key.name() == name)
    }

    pub fn all() -> impl Iterator<Item = MessageKey> {
        [
            MessageKey::IsRequired,
            MessageKey::Match,
            MessageKey::Group,
            MessageKey::FileExtension,
            MessageKey::RangeMinValue,
            MessageKey::RangeMaxValue,
            MessageKey::LengthMin,
            MessageKey::LengthMax,
            MessageKey::LengthExceeded,
            MessageKey::PasswordMin,
            MessageKey::PasswordMax,
            MessageKey::PasswordClasses,
        ]
        .into_iter()
        .chain(InputType::ALL.into_iter().map(MessageKey::InputType))
    }

    fn default_template(self) -> &'static str {
        match self {
            MessageKey::IsRequired => "This field is required!",
            MessageKey::Match => "Incorrect input!",
            MessageKey::Group => "Field contains issues!",
            MessageKey::FileExtension => "Incorrect File extension upload!",
            MessageKey::RangeMinValue => "Minimal value is %s!",
            MessageKey::RangeMaxValue => "Maximum value is %s!",
            MessageKey::LengthMin => "Minimum %s characters!",
            MessageKey::LengthMax => "Maximum %s characters (%s too many)",
            MessageKey::LengthExceeded => "Please enter no more than %s characters.",
            MessageKey::PasswordMin => "Minimum %s characters!",
            MessageKey::PasswordMax => "Maximum %s characters!",
            MessageKey::PasswordClasses => {
                "Minimum of different classes of characters in password is %s. \
                 Classes of characters: Lower Case, Upper Case, Digits, Special Characters."
            }
            MessageKey::InputType(input_type) => match input_type {
                InputType::Alpha => "Incorrect input! Only letters allowed!",
                InputType::AlphaSpace => "Incorrect input! Only words allowed!",
                InputType::AlphaNumeric => "Incorrect input! Alpha-Numeric value required!",
                InputType::AlphaDash => "Incorrect input! Alpha-Dash value required!",
                InputType::Url => "Incorrect input! URL required!",
                InputType::Numeric => "Incorrect input! Numeric value required!",
                InputType::NumericDash => "Incorrect input! Numeric-Dash value required!",
                InputType::Integer => "Incorrect input! Integer required!",
                InputType::Decimal => "Incorrect input! decimal required!",
                InputType::Email => "Incorrect email format!",
                InputType::EmailList => "Incorrect list of emails!",
                InputType::Date => "Incorrect date input!",
                InputType::Password => "Incorrect password input!",
                InputType::Phone => "Incorrect phone input!",
            },
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message templates indexed by failure kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: HashMap<MessageKey, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            templates: MessageKey::all()
                .map(|key| (key, key.default_template().to_string()))
                .collect(),
        }
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the given templates replacing the defaults, keyed by name.
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut catalog = Self::default();
        for (name, template) in overrides {
            let key = MessageKey::from_name(name).ok_or_else(|| {
                FormValidatorError::config(format!("Unknown message key: {name}"))
            })?;
            catalog.set(key, template.clone());
        }
        Ok(catalog)
    }

    pub fn set(&mut self, key: MessageKey, template: impl Into<String>) {
        self.templates.insert(key, template.into());
    }

    pub fn template(&self, key: MessageKey) -> &str {
        self.templates
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_template())
    }

    pub fn get(&self, key: MessageKey) -> String {
        self.template(key).to_string()
    }

    pub fn format(&self, key: MessageKey, args: &[&dyn fmt::Display]) -> String {
        format_message(self.template(key), args)
    }
}

/// Substitutes each `%s` with the next argument; extra placeholders stay as-is.
pub fn format_message(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("%s"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_placeholders_in_order() {
        assert_eq!(
            format_message("Maximum %s characters (%s too many)", &[&10, &1]),
            "Maximum 10 characters (1 too many)"
        );
    }

    #[test]
    fn leaves_unfilled_placeholders() {
        assert_eq!(format_message("%s and %s", &[&"a"]), "a and %s");
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(format_message("Minimal value is %s!", &[&3.0_f64]), "Minimal value is 3!");
    }

    #[test]
    fn every_key_round_trips_through_its_name() {
        for key in MessageKey::all() {
            assert_eq!(MessageKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn rejects_unknown_override() {
        let overrides = [("nope".to_string(), "x".to_string())];
        let result = MessageCatalog::with_overrides(overrides.iter().map(|(k, v)| (k, v)));
        assert!(result.is_err());
    }
}

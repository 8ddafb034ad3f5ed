use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::error::{FormValidatorError, Result};
use crate::types::InputType;

const EMAIL_ITEM: &str = r"[a-zA-Z0-9_\-.]+@[a-zA-Z0-9_\-.]+\.[a-zA-Z]{2,5}";

/// Every part of a password pattern must match. The regex engine has no
/// look-around, so each required character class is its own expression.
const PASSWORD_PARTS: [&str; 5] = [r"^\S{8,}$", r"[0-9]", r"[a-z]", r"[A-Z]", r"[^a-zA-Z0-9\s]"];

fn default_sources(input_type: InputType) -> Vec<String> {
    if input_type == InputType::Password {
        return PASSWORD_PARTS.iter().map(|part| part.to_string()).collect();
    }
    vec![default_source(input_type)]
}

fn default_source(input_type: InputType) -> String {
    match input_type {
        InputType::Alpha => r"(?i)^[a-z]+$".to_string(),
        InputType::AlphaSpace => r"(?i)^[a-z\s]+$".to_string(),
        InputType::AlphaNumeric => r"(?i)^[a-z0-9]+$".to_string(),
        InputType::AlphaDash => r"(?i)^[a-z0-9_\-]+$".to_string(),
        InputType::Url => {
            r"(?i)^(https?://)?[a-z0-9]+([\-.][a-z0-9]+)*\.[a-z]{2,}(:[0-9]{1,5})?(/.*)?$"
                .to_string()
        }
        InputType::Numeric => r"^[0-9]+$".to_string(),
        InputType::NumericDash => r"^[\d\-\s]+$".to_string(),
        InputType::Integer => r"^-?[0-9]+$".to_string(),
        InputType::Decimal => r"^-?\d*(\.\d+)?$".to_string(),
        InputType::Email => {
            r#"^[^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*@([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}$"#
                .to_string()
        }
        InputType::EmailList => format!(r"^{EMAIL_ITEM}([,\s]+{EMAIL_ITEM})*$"),
        InputType::Date => r"\d{4}-\d{1,2}-\d{1,2}".to_string(),
        InputType::Password => PASSWORD_PARTS[0].to_string(),
        InputType::Phone => r"^[\s\d\-+()]+$".to_string(),
    }
}

static DEFAULT_PATTERNS: Lazy<HashMap<InputType, Vec<Regex>>> = Lazy::new(|| {
    InputType::ALL
        .into_iter()
        .map(|input_type| {
            let compiled = default_sources(input_type)
                .iter()
                .map(|source| match Regex::new(source) {
                    Ok(re) => re,
                    Err(error) => panic!("built-in {input_type} pattern is invalid: {error}"),
                })
                .collect();
            (input_type, compiled)
        })
        .collect()
});

/// Regexes registered for each input type. A value passes its type only when
/// every registered regex matches it.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: HashMap<InputType, Vec<Regex>>,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a InputType, &'a String)>,
    {
        let mut table = Self::default();
        for (input_type, source) in overrides {
            let re = Regex::new(source).map_err(|source| FormValidatorError::Pattern {
                input_type: input_type.to_string(),
                source,
            })?;
            table.patterns.insert(*input_type, vec![re]);
        }
        Ok(table)
    }

    pub fn get(&self, input_type: InputType) -> Option<&[Regex]> {
        self.patterns.get(&input_type).map(Vec::as_slice)
    }

    /// A type without a registered pattern accepts everything.
    pub fn matches(&self, input_type: InputType, value: &str) -> bool {
        self.get(input_type)
            .is_none_or(|parts| parts.iter().all(|re| re.is_match(value)))
    }
}

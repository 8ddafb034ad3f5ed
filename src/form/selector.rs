use std::fmt;
use std::str::FromStr;

use crate::error::{FormValidatorError, Result};

/// Fields collected by a group validation when its rule names no selector.
pub const DEFAULT_FIELD_SELECTOR: &str =
    "select, input, textarea, .js-validatabale, form, .FieldGroup";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split('.');
        let tag = match parts.next() {
            Some("") | Some("*") | None => None,
            Some(tag) if is_identifier(tag) => Some(tag.to_ascii_lowercase()),
            Some(tag) => {
                return Err(FormValidatorError::selector(format!(
                    "invalid tag name '{tag}' in '{raw}'"
                )));
            }
        };

        let classes = parts
            .map(|class| {
                if is_identifier(class) {
                    Ok(class.to_string())
                } else {
                    Err(FormValidatorError::selector(format!(
                        "invalid class name '{class}' in '{raw}'"
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tag, classes })
    }

    fn matches(&self, tag_name: &str, classes: &[String]) -> bool {
        self.tag
            .as_deref()
            .is_none_or(|tag| tag.eq_ignore_ascii_case(tag_name))
            && self.classes.iter().all(|class| classes.contains(class))
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Comma-separated list of `tag`, `.class` and `tag.class` selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    source: String,
    alternatives: Vec<SimpleSelector>,
}

impl FieldSelector {
    pub fn parse(source: &str) -> Result<Self> {
        let alternatives = source
            .split(',')
            .map(str::trim)
            .map(|part| {
                if part.is_empty() {
                    Err(FormValidatorError::selector(format!(
                        "empty selector in '{source}'"
                    )))
                } else {
                    SimpleSelector::parse(part)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: source.to_string(),
            alternatives,
        })
    }

    pub fn matches(&self, tag_name: &str, classes: &[String]) -> bool {
        self.alternatives
            .iter()
            .any(|alt| alt.matches(tag_name, classes))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self {
            source: DEFAULT_FIELD_SELECTOR.to_string(),
            alternatives: vec![
                SimpleSelector::tag("select"),
                SimpleSelector::tag("input"),
                SimpleSelector::tag("textarea"),
                SimpleSelector::class("js-validatabale"),
                SimpleSelector::tag("form"),
                SimpleSelector::class("FieldGroup"),
            ],
        }
    }
}

impl SimpleSelector {
    fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            classes: Vec::new(),
        }
    }

    fn class(class: &str) -> Self {
        Self {
            tag: None,
            classes: vec![class.to_string()],
        }
    }
}

impl FromStr for FieldSelector {
    type Err = FormValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_matches_parsed_default() {
        assert_eq!(
            FieldSelector::parse(DEFAULT_FIELD_SELECTOR).unwrap(),
            FieldSelector::default()
        );
    }

    #[test]
    fn matches_tags_case_insensitively() {
        let selector = FieldSelector::default();
        assert!(selector.matches("INPUT", &[]));
        assert!(selector.matches("textarea", &[]));
        assert!(!selector.matches("div", &[]));
    }

    #[test]
    fn matches_classes() {
        let selector = FieldSelector::default();
        assert!(selector.matches("div", &classes(&["FieldGroup", "Wide"])));
        assert!(selector.matches("span", &classes(&["js-validatabale"])));
        assert!(!selector.matches("div", &classes(&["fieldgroup"])));
    }

    #[test]
    fn compound_selector_needs_tag_and_class() {
        let selector = FieldSelector::parse("input.Required").unwrap();
        assert!(selector.matches("input", &classes(&["Required"])));
        assert!(!selector.matches("input", &[]));
        assert!(!selector.matches("select", &classes(&["Required"])));
    }

    #[test]
    fn rejects_malformed_selectors() {
        assert!(FieldSelector::parse("input,").is_err());
        assert!(FieldSelector::parse("input[type=text]").is_err());
        assert!(FieldSelector::parse("div > input").is_err());
    }
}

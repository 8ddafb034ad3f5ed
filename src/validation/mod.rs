//! Rule-based validation of single values, field groups and passwords.
//!
//! Every check returns a [`Validation`] or a [`PasswordCheck`]; failing input is
//! never an error. Missing information (an unattached container, a rule
//! without checks) is treated as valid.

pub mod group;
pub mod messages;
pub mod password;
pub mod patterns;
pub mod value;

use once_cell::sync::Lazy;

use crate::core::ValidatorConfig;
use crate::error::Result;
use crate::form::{FieldContainer, FieldSelector};
use crate::types::{
    LengthRange, PasswordCheck, Validation, ValidationDomOutput, ValidationOutput, ValidationRule,
};

pub use messages::{MessageCatalog, MessageKey, format_message};
pub use password::number_of_character_classes;
pub use patterns::PatternTable;

static SHARED: Lazy<Validator> = Lazy::new(Validator::default);

/// Message catalog and pattern table used by every check.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    messages: MessageCatalog,
    patterns: PatternTable,
    default_selector: FieldSelector,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance with default messages and patterns.
    pub fn shared() -> &'static Validator {
        &SHARED
    }

    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let validator = Self {
            messages: MessageCatalog::with_overrides(&config.messages)?,
            patterns: PatternTable::with_overrides(&config.patterns)?,
            default_selector: match &config.default_selector {
                Some(selector) => FieldSelector::parse(selector)?,
                None => FieldSelector::default(),
            },
        };
        tracing::debug!(
            messages = config.messages.len(),
            patterns = config.patterns.len(),
            "Built validator from configuration"
        );
        Ok(validator)
    }

    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_default_selector(mut self, selector: FieldSelector) -> Self {
        self.default_selector = selector;
        self
    }

    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn default_selector(&self) -> &FieldSelector {
        &self.default_selector
    }
}

/// Validates `value` against `rule` with the default messages and patterns.
pub fn validate(value: &str, rule: &ValidationRule) -> Validation<ValidationOutput> {
    Validator::shared().validate(value, rule)
}

/// Validates every field under `container`, plus the group-level `rule`.
pub fn validate_group<C>(
    container: &C,
    rule: Option<&ValidationRule>,
) -> Validation<ValidationDomOutput>
where
    C: FieldContainer + ?Sized,
{
    Validator::shared().validate_group(container, rule)
}

pub fn validate_password(value: &str, range: LengthRange, min_classes: usize) -> PasswordCheck {
    Validator::shared().validate_password(value, range, min_classes)
}

use serde::Serialize;

use super::field::FieldValue;

/// Outcome of a validation call.
///
/// `Invalid` always carries at least one message; callers match on the variant
/// instead of inspecting the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "details", rename_all = "lowercase")]
pub enum Validation<T> {
    Valid,
    Invalid(T),
}

impl<T> Validation<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn details(&self) -> Option<&T> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(details) => Some(details),
        }
    }

    pub fn into_details(self) -> Option<T> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(details) => Some(details),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutput {
    pub value: String,
    pub error_messages: Vec<String>,
}

impl ValidationOutput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error_messages: Vec::new(),
        }
    }

    pub(crate) fn into_validation(self) -> Validation<Self> {
        if self.error_messages.is_empty() {
            Validation::Valid
        } else {
            Validation::Invalid(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDomOutput {
    pub values: Vec<FieldValue>,
    pub error_fields: Vec<Vec<String>>,
    pub error_messages: Vec<String>,
}

impl ValidationDomOutput {
    pub(crate) fn into_validation(self) -> Validation<Self> {
        if self.error_messages.is_empty() && self.error_fields.is_empty() {
            Validation::Valid
        } else {
            Validation::Invalid(self)
        }
    }
}

/// Outcome of a password check: either valid or a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum PasswordCheck {
    Valid,
    Invalid(String),
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, PasswordCheck::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            PasswordCheck::Valid => None,
            PasswordCheck::Invalid(message) => Some(message),
        }
    }
}

/// Inclusive length bounds for password checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

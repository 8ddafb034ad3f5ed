use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{FormValidatorError, Result};
use crate::types::InputType;

/// Customization of a [`Validator`](crate::Validator), usually loaded from JSON.
///
/// ```json
/// {
///   "messages": { "isRequired": "Pflichtfeld!" },
///   "patterns": { "phone": "^\\+?[0-9 ]+$" },
///   "defaultSelector": "input, select, textarea"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Message templates by key name, e.g. `isRequired` or `email`.
    pub messages: HashMap<String, String>,
    pub patterns: HashMap<InputType, String>,
    pub default_selector: Option<String>,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FormValidatorError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), "Loaded validator configuration");
        Ok(config)
    }

    pub fn with_message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    pub fn with_pattern(mut self, input_type: InputType, pattern: impl Into<String>) -> Self {
        self.patterns.insert(input_type, pattern.into());
        self
    }

    pub fn with_default_selector(mut self, selector: impl Into<String>) -> Self {
        self.default_selector = Some(selector.into());
        self
    }
}

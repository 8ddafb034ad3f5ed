use serde::Serialize;
use std::fmt;

/// Normalized kind of a form control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Email,
    Password,
    Number,
    File,
    Tel,
    Date,
    Hidden,
    #[serde(untagged)]
    Other(String),
}

impl FieldType {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "select" | "select-one" | "select-multiple" => FieldType::Select,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "email" => FieldType::Email,
            "password" => FieldType::Password,
            "number" => FieldType::Number,
            "file" => FieldType::File,
            "tel" => FieldType::Tel,
            "date" => FieldType::Date,
            "hidden" => FieldType::Hidden,
            other => FieldType::Other(other.to_string()),
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::Radio)
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::File => "file",
            FieldType::Tel => "tel",
            FieldType::Date => "date",
            FieldType::Hidden => "hidden",
            FieldType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One collected entry of a group validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            field_type,
        }
    }

    pub fn is_present(&self) -> bool {
        !self.value.is_empty()
    }
}

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

use super::field::FieldValue;

/// Named value formats a rule can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    Alpha,
    AlphaSpace,
    AlphaNumeric,
    AlphaDash,
    Url,
    Numeric,
    NumericDash,
    Integer,
    Decimal,
    Email,
    EmailList,
    Date,
    Password,
    Phone,
}

impl InputType {
    pub const ALL: [InputType; 14] = [
        InputType::Alpha,
        InputType::AlphaSpace,
        InputType::AlphaNumeric,
        InputType::AlphaDash,
        InputType::Url,
        InputType::Numeric,
        InputType::NumericDash,
        InputType::Integer,
        InputType::Decimal,
        InputType::Email,
        InputType::EmailList,
        InputType::Date,
        InputType::Password,
        InputType::Phone,
    ];

    /// Numeric types compare their range against the parsed value instead of its length.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            InputType::Numeric | InputType::NumericDash | InputType::Integer | InputType::Decimal
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Alpha => "alpha",
            InputType::AlphaSpace => "alphaSpace",
            InputType::AlphaNumeric => "alphaNumeric",
            InputType::AlphaDash => "alphaDash",
            InputType::Url => "url",
            InputType::Numeric => "numeric",
            InputType::NumericDash => "numericDash",
            InputType::Integer => "integer",
            InputType::Decimal => "decimal",
            InputType::Email => "email",
            InputType::EmailList => "emailList",
            InputType::Date => "date",
            InputType::Password => "password",
            InputType::Phone => "phone",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a value matcher reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Pass,
    /// Fail with the rule's `on_match_fail` or the default message.
    Fail,
    /// Fail with this exact message.
    FailWith(String),
}

impl From<bool> for MatchOutcome {
    fn from(passed: bool) -> Self {
        if passed {
            MatchOutcome::Pass
        } else {
            MatchOutcome::Fail
        }
    }
}

pub type ValueMatchFn = Arc<dyn Fn(&str) -> MatchOutcome + Send + Sync>;
pub type GroupMatchFn = Arc<dyn Fn(&[FieldValue]) -> bool + Send + Sync>;

/// Custom check attached to a rule.
#[derive(Clone)]
pub enum Matcher {
    Pattern(Regex),
    Value(ValueMatchFn),
    /// Receives every collected value of a group; ignored for single values.
    Group(GroupMatchFn),
}

impl Matcher {
    pub fn pattern(pattern: &str) -> crate::Result<Self> {
        Ok(Matcher::Pattern(Regex::new(pattern)?))
    }

    pub fn value<F>(f: F) -> Self
    where
        F: Fn(&str) -> MatchOutcome + Send + Sync + 'static,
    {
        Matcher::Value(Arc::new(f))
    }

    pub fn group<F>(f: F) -> Self
    where
        F: Fn(&[FieldValue]) -> bool + Send + Sync + 'static,
    {
        Matcher::Group(Arc::new(f))
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Matcher::Value(_) => f.write_str("Value(<fn>)"),
            Matcher::Group(_) => f.write_str("Group(<fn>)"),
        }
    }
}

/// Numeric bound for numeric input types, length bound otherwise.
///
/// A bound is only enforced when it is set; `Some(0.0)` is a real bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub show_length_error: bool,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            show_length_error: false,
        }
    }

    pub fn min(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Default::default()
        }
    }

    pub fn max(max: f64) -> Self {
        Self {
            max: Some(max),
            ..Default::default()
        }
    }

    pub fn with_length_error(mut self) -> Self {
        self.show_length_error = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileExtension {
    /// Allowed extensions separated by `", "`, e.g. `"jpg, png"`.
    pub accept: String,
}

impl FileExtension {
    pub fn new(accept: impl Into<String>) -> Self {
        Self {
            accept: accept.into(),
        }
    }

    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        self.accept.split(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomErrorMessages {
    pub on_requirement_fail: Option<String>,
    pub on_input_type_fail: Option<String>,
    pub on_match_fail: Option<String>,
    pub on_range_fail_min: Option<String>,
    pub on_range_fail_max: Option<String>,
    pub on_extension_fail: Option<String>,
    pub on_group_fail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRule {
    pub is_required: bool,
    pub input_type: Option<InputType>,
    #[serde(rename = "match", deserialize_with = "deserialize_pattern")]
    pub matcher: Option<Matcher>,
    pub range: Option<Range>,
    pub file_extension: Option<FileExtension>,
    pub custom_error_messages: CustomErrorMessages,
    pub selector: Option<String>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required() -> Self {
        Self {
            is_required: true,
            ..Default::default()
        }
    }

    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_file_extension(mut self, accept: impl Into<String>) -> Self {
        self.file_extension = Some(FileExtension::new(accept));
        self
    }

    pub fn with_messages(mut self, messages: CustomErrorMessages) -> Self {
        self.custom_error_messages = messages;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn deserialize_pattern<'de, D>(deserializer: D) -> Result<Option<Matcher>, D::Error>
where
    D: Deserializer<'de>,
{
    let pattern: Option<String> = Option::deserialize(deserializer)?;
    pattern
        .map(|p| Regex::new(&p).map(Matcher::Pattern))
        .transpose()
        .map_err(serde::de::Error::custom)
}

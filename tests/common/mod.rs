use form_validator::*;
use std::cell::Cell;

/// A field with canned errors that counts how often it was validated.
#[allow(dead_code)]
pub struct StubField {
    pub name: String,
    pub value: String,
    pub tag: String,
    pub input_type: Option<String>,
    pub checked: bool,
    pub errors: Vec<String>,
    pub validations: Cell<usize>,
}

#[allow(dead_code)]
impl StubField {
    pub fn input(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            tag: "input".to_string(),
            input_type: Some("text".to_string()),
            checked: false,
            errors: Vec::new(),
            validations: Cell::new(0),
        }
    }

    pub fn with_errors(mut self, errors: &[&str]) -> Self {
        self.errors = errors.iter().map(|e| e.to_string()).collect();
        self
    }
}

impl FieldHandle for StubField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn validate(&self) -> Vec<String> {
        self.validations.set(self.validations.get() + 1);
        self.errors.clone()
    }
}

/// Container over stub fields that records whether it was queried.
#[allow(dead_code)]
pub struct StubContainer {
    pub attached: bool,
    pub fields: Vec<StubField>,
    pub queries: Cell<usize>,
}

#[allow(dead_code)]
impl StubContainer {
    pub fn attached(fields: Vec<StubField>) -> Self {
        Self {
            attached: true,
            fields,
            queries: Cell::new(0),
        }
    }

    pub fn detached(fields: Vec<StubField>) -> Self {
        Self {
            attached: false,
            ..Self::attached(fields)
        }
    }

    pub fn total_validations(&self) -> usize {
        self.fields.iter().map(|f| f.validations.get()).sum()
    }
}

impl FieldContainer for StubContainer {
    fn list_fields(&self, _selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>> {
        if !self.attached {
            return None;
        }
        self.queries.set(self.queries.get() + 1);
        Some(
            self.fields
                .iter()
                .map(|f| Box::new(StubFieldRef(f)) as Box<dyn FieldHandle + '_>)
                .collect(),
        )
    }
}

struct StubFieldRef<'a>(&'a StubField);

impl FieldHandle for StubFieldRef<'_> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn value(&self) -> &str {
        self.0.value()
    }

    fn tag_name(&self) -> &str {
        self.0.tag_name()
    }

    fn input_type(&self) -> Option<&str> {
        self.0.input_type()
    }

    fn is_checked(&self) -> bool {
        self.0.is_checked()
    }

    fn validate(&self) -> Vec<String> {
        self.0.validate()
    }
}

#[allow(dead_code)]
pub fn messages(outcome: &Validation<ValidationOutput>) -> Vec<String> {
    outcome
        .details()
        .map(|output| output.error_messages.clone())
        .unwrap_or_default()
}

use serde::Deserialize;
use std::sync::Arc;

use super::{FieldContainer, FieldHandle, FieldSelector};
use crate::types::ValidationRule;
use crate::validation::Validator;

/// An element of an in-memory form.
///
/// Leaf controls validate their value against `rule`; containers (a `form`
/// or anything with children) validate their children as a group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub checked: bool,
    pub rule: Option<ValidationRule>,
    pub children: Vec<FormNode>,
}

impl FormNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn input(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self::new("input")
            .with_name(name)
            .with_type(input_type)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_child(mut self, child: FormNode) -> Self {
        self.children.push(child);
        self
    }

    fn is_group(&self) -> bool {
        self.tag.eq_ignore_ascii_case("form") || !self.children.is_empty()
    }

    fn collect<'a>(
        nodes: &'a [FormNode],
        selector: &FieldSelector,
        validator: &'a Validator,
        out: &mut Vec<Box<dyn FieldHandle + 'a>>,
    ) {
        for node in nodes {
            if selector.matches(&node.tag, &node.classes) {
                out.push(Box::new(TreeField { node, validator }));
            }
            Self::collect(&node.children, selector, validator, out);
        }
    }
}

/// A detachable root holding the top-level form nodes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormTree {
    pub attached: bool,
    pub nodes: Vec<FormNode>,
    #[serde(skip)]
    validator: Option<Arc<Validator>>,
}

impl Default for FormTree {
    fn default() -> Self {
        Self {
            attached: true,
            nodes: Vec::new(),
            validator: None,
        }
    }
}

impl FormTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree that is not mounted yet; group validation treats it as valid.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Default::default()
        }
    }

    pub fn with_node(mut self, node: FormNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Field-level validation uses this validator instead of the default one.
    pub fn with_validator(mut self, validator: Arc<Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn validator(&self) -> &Validator {
        self.validator
            .as_deref()
            .unwrap_or_else(|| Validator::shared())
    }
}

impl FieldContainer for FormTree {
    fn list_fields(&self, selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>> {
        if !self.attached {
            return None;
        }
        let mut fields = Vec::new();
        FormNode::collect(&self.nodes, selector, self.validator(), &mut fields);
        Some(fields)
    }
}

struct TreeField<'a> {
    node: &'a FormNode,
    validator: &'a Validator,
}

impl<'a> TreeField<'a> {
    fn children(&self) -> ChildNodes<'a> {
        ChildNodes {
            nodes: &self.node.children,
            validator: self.validator,
        }
    }
}

impl FieldHandle for TreeField<'_> {
    fn name(&self) -> &str {
        &self.node.name
    }

    fn value(&self) -> &str {
        &self.node.value
    }

    fn tag_name(&self) -> &str {
        &self.node.tag
    }

    fn input_type(&self) -> Option<&str> {
        self.node.input_type.as_deref()
    }

    fn is_checked(&self) -> bool {
        self.node.checked
    }

    fn validate(&self) -> Vec<String> {
        let Some(rule) = &self.node.rule else {
            return Vec::new();
        };

        if self.node.is_group() {
            self.validator
                .validate_group(&self.children(), Some(rule))
                .into_details()
                .map(|details| details.error_messages)
                .unwrap_or_default()
        } else {
            self.validator
                .validate(&self.node.value, rule)
                .into_details()
                .map(|details| details.error_messages)
                .unwrap_or_default()
        }
    }
}

struct ChildNodes<'a> {
    nodes: &'a [FormNode],
    validator: &'a Validator,
}

impl FieldContainer for ChildNodes<'_> {
    fn list_fields(&self, selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>> {
        let mut fields = Vec::new();
        FormNode::collect(self.nodes, selector, self.validator, &mut fields);
        Some(fields)
    }
}

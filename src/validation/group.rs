use super::{MessageKey, Validator};
use crate::form::{FieldContainer, FieldHandle, FieldSelector};
use crate::types::{FieldType, FieldValue, Matcher, Validation, ValidationDomOutput, ValidationRule};

/// Value a checked checkbox or radio reports when it has none of its own.
pub const CHECKED_DEFAULT_VALUE: &str = "on";

impl Validator {
    /// Validates every field discovered under `container`, then applies the
    /// group-level `rule` to the collected values.
    ///
    /// A container that cannot be queried yet is valid, and no field is
    /// touched in that case.
    pub fn validate_group<C>(
        &self,
        container: &C,
        rule: Option<&ValidationRule>,
    ) -> Validation<ValidationDomOutput>
    where
        C: FieldContainer + ?Sized,
    {
        let parsed;
        let selector = match rule.and_then(|rule| rule.selector.as_deref()) {
            Some(source) => match FieldSelector::parse(source) {
                Ok(selector) => {
                    parsed = selector;
                    &parsed
                }
                Err(error) => {
                    tracing::warn!(%error, "Ignoring malformed group selector");
                    &self.default_selector
                }
            },
            None => &self.default_selector,
        };

        let Some(fields) = container.list_fields(selector) else {
            tracing::debug!("Field container is not attached, skipping group validation");
            return Validation::Valid;
        };

        let mut output = ValidationDomOutput::default();

        for field in &fields {
            output.values.push(collect_value(&**field));

            let errors = field.validate();
            if !errors.is_empty() {
                output.error_fields.push(errors);
            }
        }

        if let Some(rule) = rule {
            self.apply_group_rule(rule, &mut output);
        }

        tracing::trace!(
            fields = output.values.len(),
            invalid_fields = output.error_fields.len(),
            group_errors = output.error_messages.len(),
            "Validated field group"
        );
        output.into_validation()
    }

    fn apply_group_rule(&self, rule: &ValidationRule, output: &mut ValidationDomOutput) {
        let custom = &rule.custom_error_messages;

        if rule.is_required && !output.values.iter().any(FieldValue::is_present) {
            output
                .error_messages
                .push(self.message_or(&custom.on_requirement_fail, MessageKey::IsRequired));
        }

        if let Some(Matcher::Group(matcher)) = &rule.matcher {
            if !matcher(output.values.as_slice()) {
                output
                    .error_messages
                    .push(self.message_or(&custom.on_match_fail, MessageKey::Match));
            }
        }

        if output.error_messages.is_empty() && !output.error_fields.is_empty() {
            output
                .error_messages
                .push(self.message_or(&custom.on_group_fail, MessageKey::Group));
        }
    }
}

/// Reads a field into its collected form.
///
/// A `textarea` tag always reports the `textarea` type, a control without a
/// `type` is treated as a select, and checkboxes and radios only contribute
/// their value while checked. A checked toggle without a value reports `on`,
/// as browsers do.
fn collect_value(field: &dyn FieldHandle) -> FieldValue {
    let field_type = if field.tag_name().eq_ignore_ascii_case("textarea") {
        FieldType::Textarea
    } else {
        field.input_type().map_or(FieldType::Select, FieldType::parse)
    };

    let value = match (field_type.is_toggle(), field.is_checked(), field.value()) {
        (true, false, _) => String::new(),
        (true, true, "") => CHECKED_DEFAULT_VALUE.to_string(),
        (_, _, value) => value.to_string(),
    };

    FieldValue::new(field.name(), value, field_type)
}

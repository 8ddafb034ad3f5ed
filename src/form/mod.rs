//! Form structure consumed by group validation.
//!
//! The validator never walks a concrete UI tree. The UI layer hands it a
//! [`FieldContainer`] that lists the fields under it, and each
//! [`FieldHandle`] runs its own field-level validation when asked.

pub mod selector;
pub mod tree;

pub use selector::{DEFAULT_FIELD_SELECTOR, FieldSelector};
pub use tree::{FormNode, FormTree};

/// A single form control discovered inside a container.
pub trait FieldHandle {
    fn name(&self) -> &str;

    fn value(&self) -> &str;

    /// Element tag, e.g. `input` or `textarea`.
    fn tag_name(&self) -> &str;

    /// The explicit `type` attribute, if any.
    fn input_type(&self) -> Option<&str>;

    fn is_checked(&self) -> bool {
        false
    }

    /// Runs the field's own validation and returns its error messages.
    ///
    /// Must complete synchronously; an empty list means the field is fine.
    fn validate(&self) -> Vec<String>;
}

/// A subtree of fields that can be queried.
pub trait FieldContainer {
    /// Fields matching `selector` in document order, or `None` while the
    /// container is not attached and cannot be queried.
    fn list_fields(&self, selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>>;
}

impl<C: FieldContainer + ?Sized> FieldContainer for &C {
    fn list_fields(&self, selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>> {
        (**self).list_fields(selector)
    }
}

impl<C: FieldContainer> FieldContainer for Option<C> {
    fn list_fields(&self, selector: &FieldSelector) -> Option<Vec<Box<dyn FieldHandle + '_>>> {
        self.as_ref()?.list_fields(selector)
    }
}
